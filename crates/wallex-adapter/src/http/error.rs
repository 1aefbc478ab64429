/*
[INPUT]:  Error sources (transport, API error bodies, serialization, config)
[OUTPUT]: Classified error values for every failed call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing error classification
*/

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub(crate) const NO_RESPONSE_MESSAGE: &str = "No response received from Wallex";
pub(crate) const REQUEST_FAILED_MESSAGE: &str = "Error making request to Wallex";

/// Main error type for the Wallex adapter
#[derive(Error, Debug)]
pub enum WallexError {
    /// The request went out (or could not be built) and no response came back
    #[error("RequestException: {message}")]
    NoResponse { message: String },

    /// The server answered with an error status
    #[error("APIError(code={code}): {message} | {result}")]
    Api {
        code: i64,
        message: String,
        result: Value,
    },

    /// The server answered with an error status, detailed-error mode
    #[error("{0}")]
    ApiDetailed(Box<DetailedApiError>),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error shape raised when `raise_detailed_errors` is enabled
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedApiError {
    pub code: i64,
    pub text: String,
    pub message: String,
    pub result: Value,
    pub status_code: u16,
    pub response: RawResponse,
    pub request: RawRequest,
}

impl std::fmt::Display for DetailedApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "APIError(code={}): {} | {} | {}",
            self.code, self.message, self.result, self.text
        )
    }
}

/// Response as received from the server, body kept verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Request that produced an error response
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

/// Error body fields; anything missing stays at its default
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Value,
}

struct ParsedErrorBody {
    code: i64,
    message: String,
    result: Value,
}

fn parse_error_body(body: &str) -> ParsedErrorBody {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ParsedErrorBody {
            code: parsed.code.unwrap_or_default(),
            message: parsed.message.unwrap_or_default(),
            result: parsed.result,
        },
        Err(_) => ParsedErrorBody {
            code: 0,
            message: format!("Invalid JSON error message from Wallex: {body}"),
            result: Value::Null,
        },
    }
}

impl WallexError {
    /// Classify an error status response
    pub fn from_response(detailed: bool, response: RawResponse, request: RawRequest) -> Self {
        let parsed = parse_error_body(&response.body);
        if !detailed {
            return WallexError::Api {
                code: parsed.code,
                message: parsed.message,
                result: parsed.result,
            };
        }

        WallexError::ApiDetailed(Box::new(DetailedApiError {
            code: parsed.code,
            text: REQUEST_FAILED_MESSAGE.to_string(),
            message: parsed.message,
            result: parsed.result,
            status_code: response.status,
            response,
            request,
        }))
    }

    /// Classify a transport failure that produced no response
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let message = if err.is_builder() {
            REQUEST_FAILED_MESSAGE
        } else {
            NO_RESPONSE_MESSAGE
        };
        WallexError::NoResponse {
            message: message.to_string(),
        }
    }

    /// The request could not be assembled, so nothing was sent
    pub(crate) fn request_failed() -> Self {
        WallexError::NoResponse {
            message: REQUEST_FAILED_MESSAGE.to_string(),
        }
    }

    /// True when no response was received
    pub fn is_no_response(&self) -> bool {
        matches!(self, WallexError::NoResponse { .. })
    }

    /// True for either server error shape
    pub fn is_api_error(&self) -> bool {
        matches!(self, WallexError::Api { .. } | WallexError::ApiDetailed(_))
    }

    /// Server error code, if the server answered
    pub fn api_code(&self) -> Option<i64> {
        match self {
            WallexError::Api { code, .. } => Some(*code),
            WallexError::ApiDetailed(detail) => Some(detail.code),
            _ => None,
        }
    }

    /// HTTP status, only known in detailed mode
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            WallexError::ApiDetailed(detail) => StatusCode::from_u16(detail.status_code).ok(),
            _ => None,
        }
    }
}

/// Result type alias for Wallex operations
pub type Result<T> = std::result::Result<T, WallexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: BTreeMap::new(),
            body: body.to_string(),
        }
    }

    fn raw_request() -> RawRequest {
        RawRequest {
            method: "POST".to_string(),
            url: "https://api.wallex.ir/v1/account/orders".to_string(),
            headers: BTreeMap::new(),
        }
    }

    #[test]
    fn test_api_error_from_body() {
        let body = r#"{"code":4001,"message":"insufficient balance","result":null}"#;
        let err = WallexError::from_response(false, raw_response(400, body), raw_request());
        match err {
            WallexError::Api {
                code,
                message,
                result,
            } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "insufficient balance");
                assert_eq!(result, Value::Null);
            }
            other => panic!("Expected Api error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_detailed_error_keeps_raw_parts() {
        let body = r#"{"code":4001,"message":"insufficient balance","result":{"asset":"USDT"}}"#;
        let err = WallexError::from_response(true, raw_response(422, body), raw_request());
        assert_eq!(err.status_code(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        match err {
            WallexError::ApiDetailed(detail) => {
                assert_eq!(detail.code, 4001);
                assert_eq!(detail.result, json!({"asset": "USDT"}));
                assert_eq!(detail.text, REQUEST_FAILED_MESSAGE);
                assert_eq!(detail.response.body, body);
                assert_eq!(detail.request.method, "POST");
            }
            other => panic!("Expected ApiDetailed variant, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_body_falls_back() {
        let err = WallexError::from_response(true, raw_response(502, "Bad Gateway"), raw_request());
        match err {
            WallexError::ApiDetailed(detail) => {
                assert_eq!(detail.code, 0);
                assert_eq!(
                    detail.message,
                    "Invalid JSON error message from Wallex: Bad Gateway"
                );
                assert_eq!(detail.status_code, 502);
            }
            other => panic!("Expected ApiDetailed variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = WallexError::Api {
            code: 4001,
            message: "insufficient balance".to_string(),
            result: Value::Null,
        };
        assert_eq!(err.to_string(), "APIError(code=4001): insufficient balance | null");

        let err = WallexError::NoResponse {
            message: NO_RESPONSE_MESSAGE.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "RequestException: No response received from Wallex"
        );
        assert!(err.is_no_response());
        assert!(!err.is_api_error());
        assert_eq!(err.api_code(), None);
    }
}
