/*
[INPUT]:  Per-call request options, client-wide options, HTTP method, signed flag
[OUTPUT]: PreparedRequest (timeout, headers, query pairs, JSON body)
[POS]:    HTTP layer - option merging and payload shaping
[UPDATE]: When changing merge precedence or GET/POST payload rules
*/

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Per-call request shaping fields
///
/// The same type carries the client-wide options stored on
/// [`ClientConfig`](crate::http::ClientConfig).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Hard timeout for this request
    pub timeout: Option<Duration>,
    /// Extra headers, keyed by lowercase name
    pub headers: BTreeMap<String, String>,
    /// Payload; query string for GET, JSON body otherwise
    pub data: Option<Value>,
    /// Explicit query parameters
    pub params: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Use `payload` as data unless the caller already supplied some
    pub(crate) fn with_default_data<T: Serialize>(
        mut self,
        payload: &T,
    ) -> serde_json::Result<Self> {
        if self.data.is_none() {
            self.data = Some(serde_json::to_value(payload)?);
        }
        Ok(self)
    }
}

/// Which side wins when per-call and client-wide options set the same field
///
/// `ClientWins` is the long-standing behavior: client-wide options are
/// assigned over the per-call ones. Object-valued fields are shallow-merged
/// either way; only the winner of a shared key changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePrecedence {
    #[default]
    ClientWins,
    CallWins,
}

/// Fully shaped request, ready to hand to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub timeout: Duration,
    pub headers: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Merge, sign and reshape the options for one call
pub fn prepare_options(
    method: &Method,
    signed: bool,
    options: RequestOptions,
    client_options: &RequestOptions,
    precedence: MergePrecedence,
    default_timeout: Duration,
    api_key: Option<&str>,
) -> PreparedRequest {
    let merged = merge(options, client_options, precedence);

    let data = merged.data.filter(|value| value.is_object() || value.is_array());

    let mut headers = merged.headers;
    if signed {
        match api_key {
            Some(key) => {
                headers.insert(API_KEY_HEADER.to_string(), key.to_string());
            }
            None => tracing::warn!("signed request without an api key; header omitted"),
        }
    }

    let (mut query, body) = match data {
        Some(payload) if *method == Method::GET => (query_pairs(&payload), None),
        other => (Vec::new(), other),
    };
    query.extend(merged.params);

    PreparedRequest {
        method: method.clone(),
        timeout: merged.timeout.unwrap_or(default_timeout),
        headers,
        query,
        body,
    }
}

fn merge(
    call: RequestOptions,
    client: &RequestOptions,
    precedence: MergePrecedence,
) -> RequestOptions {
    let (low, high) = match precedence {
        MergePrecedence::ClientWins => (call, client.clone()),
        MergePrecedence::CallWins => (client.clone(), call),
    };

    let mut headers = lowercase_names(low.headers);
    headers.extend(lowercase_names(high.headers));

    let mut params = low.params;
    params.extend(high.params);

    RequestOptions {
        timeout: non_zero(high.timeout).or(non_zero(low.timeout)),
        headers,
        data: merge_data(low.data, high.data),
        params,
    }
}

/// Zero means unset, so it never beats the other side's timeout
fn non_zero(timeout: Option<Duration>) -> Option<Duration> {
    timeout.filter(|timeout| !timeout.is_zero())
}

fn lowercase_names(headers: BTreeMap<String, String>) -> BTreeMap<String, String> {
    headers
        .into_iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value))
        .collect()
}

fn merge_data(low: Option<Value>, high: Option<Value>) -> Option<Value> {
    match (low, high) {
        (Some(Value::Object(mut low)), Some(Value::Object(high))) => {
            low.extend(high);
            Some(Value::Object(low))
        }
        (low, None) => low,
        (_, high) => high,
    }
}

/// Flatten a JSON object payload into query pairs
fn query_pairs(payload: &Value) -> Vec<(String, String)> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };
    let mut pairs = Vec::new();
    push_pairs(object, &mut pairs);
    pairs
}

fn push_pairs(object: &Map<String, Value>, pairs: &mut Vec<(String, String)>) {
    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let name = format!("{key}[]");
                for item in items.iter().filter(|item| !item.is_null()) {
                    pairs.push((name.clone(), scalar_text(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

    fn prepare(method: Method, signed: bool, options: RequestOptions) -> PreparedRequest {
        prepare_options(
            &method,
            signed,
            options,
            &RequestOptions::default(),
            MergePrecedence::ClientWins,
            DEFAULT_TIMEOUT,
            Some("test-key"),
        )
    }

    #[test]
    fn test_default_timeout_applied() {
        let prepared = prepare(Method::GET, false, RequestOptions::new());
        assert_eq!(prepared.timeout, DEFAULT_TIMEOUT);

        let prepared = prepare(
            Method::GET,
            false,
            RequestOptions::new().timeout(Duration::ZERO),
        );
        assert_eq!(prepared.timeout, DEFAULT_TIMEOUT);

        let prepared = prepare(
            Method::GET,
            false,
            RequestOptions::new().timeout(Duration::from_secs(1)),
        );
        assert_eq!(prepared.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_signed_header_merged_with_caller_headers() {
        let options = RequestOptions::new().header("x-trace", "abc");
        let prepared = prepare(Method::POST, true, options);
        assert_eq!(prepared.headers.get("x-trace").map(String::as_str), Some("abc"));
        assert_eq!(
            prepared.headers.get(API_KEY_HEADER).map(String::as_str),
            Some("test-key")
        );
    }

    #[test]
    fn test_signed_header_overrides_caller_key() {
        let options = RequestOptions::new().header(API_KEY_HEADER, "spoofed");
        let prepared = prepare(Method::GET, true, options);
        assert_eq!(
            prepared.headers.get(API_KEY_HEADER).map(String::as_str),
            Some("test-key")
        );
    }

    #[test]
    fn test_unsigned_request_has_no_key() {
        let prepared = prepare(Method::GET, false, RequestOptions::new());
        assert!(!prepared.headers.contains_key(API_KEY_HEADER));
    }

    #[test]
    fn test_signed_without_key_omits_header() {
        let prepared = prepare_options(
            &Method::GET,
            true,
            RequestOptions::new(),
            &RequestOptions::default(),
            MergePrecedence::ClientWins,
            DEFAULT_TIMEOUT,
            None,
        );
        assert!(!prepared.headers.contains_key(API_KEY_HEADER));
    }

    #[test]
    fn test_get_payload_becomes_query() {
        let options = RequestOptions::new().data(json!({
            "symbol": "BTCUSDT",
            "from": 1_700_000_000,
            "page": null,
            "active": true,
        }));
        let prepared = prepare(Method::GET, false, options);
        assert_eq!(prepared.body, None);
        let mut query = prepared.query;
        query.sort();
        assert_eq!(
            query,
            vec![
                ("active".to_string(), "true".to_string()),
                ("from".to_string(), "1700000000".to_string()),
                ("symbol".to_string(), "BTCUSDT".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_array_member_repeats_key() {
        let options = RequestOptions::new().data(json!({"symbols": ["BTCUSDT", "ETHUSDT"]}));
        let prepared = prepare(Method::GET, false, options);
        assert_eq!(
            prepared.query,
            vec![
                ("symbols[]".to_string(), "BTCUSDT".to_string()),
                ("symbols[]".to_string(), "ETHUSDT".to_string()),
            ]
        );
    }

    #[rstest]
    #[case(Method::POST)]
    #[case(Method::DELETE)]
    #[case(Method::PUT)]
    fn test_non_get_payload_stays_in_body(#[case] method: Method) {
        let payload = json!({"symbol": "BTCUSDT", "side": "BUY"});
        let prepared = prepare(method, true, RequestOptions::new().data(payload.clone()));
        assert_eq!(prepared.body, Some(payload));
        assert!(prepared.query.is_empty());
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(42))]
    #[case(json!("text"))]
    #[case(json!(false))]
    fn test_primitive_payload_dropped(#[case] payload: Value) {
        let prepared = prepare(Method::POST, false, RequestOptions::new().data(payload));
        assert_eq!(prepared.body, None);
    }

    #[test]
    fn test_explicit_params_follow_payload_pairs() {
        let options = RequestOptions::new()
            .data(json!({"symbol": "BTCUSDT"}))
            .param("lang", "en");
        let prepared = prepare(Method::GET, false, options);
        assert_eq!(
            prepared.query,
            vec![
                ("symbol".to_string(), "BTCUSDT".to_string()),
                ("lang".to_string(), "en".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_options_win_by_default() {
        let client = RequestOptions::new()
            .timeout(Duration::from_secs(9))
            .header("x-trace", "client")
            .header("x-client", "1")
            .data(json!({"page": 2}));
        let call = RequestOptions::new()
            .timeout(Duration::from_secs(1))
            .header("x-trace", "call")
            .header("x-call", "1")
            .data(json!({"page": 1, "per_page": 50}));

        let prepared = prepare_options(
            &Method::POST,
            false,
            call,
            &client,
            MergePrecedence::ClientWins,
            DEFAULT_TIMEOUT,
            None,
        );

        assert_eq!(prepared.timeout, Duration::from_secs(9));
        assert_eq!(prepared.headers.get("x-trace").map(String::as_str), Some("client"));
        assert!(prepared.headers.contains_key("x-client"));
        assert!(prepared.headers.contains_key("x-call"));
        assert_eq!(prepared.body, Some(json!({"page": 2, "per_page": 50})));
    }

    #[test]
    fn test_call_wins_flips_precedence() {
        let client = RequestOptions::new()
            .timeout(Duration::from_secs(9))
            .header("x-trace", "client");
        let call = RequestOptions::new()
            .timeout(Duration::from_secs(1))
            .header("x-trace", "call");

        let prepared = prepare_options(
            &Method::GET,
            false,
            call,
            &client,
            MergePrecedence::CallWins,
            DEFAULT_TIMEOUT,
            None,
        );

        assert_eq!(prepared.timeout, Duration::from_secs(1));
        assert_eq!(prepared.headers.get("x-trace").map(String::as_str), Some("call"));
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let client = RequestOptions::new().header("x-client", "1");
        let call = RequestOptions::new()
            .header("x-trace", "abc")
            .data(json!({"symbol": "BTCUSDT"}));

        let first = prepare_options(
            &Method::GET,
            true,
            call.clone(),
            &client,
            MergePrecedence::ClientWins,
            DEFAULT_TIMEOUT,
            Some("key"),
        );
        let second = prepare_options(
            &Method::GET,
            true,
            call,
            &client,
            MergePrecedence::ClientWins,
            DEFAULT_TIMEOUT,
            Some("key"),
        );

        assert_eq!(first, second);
        assert_eq!(client, RequestOptions::new().header("x-client", "1"));
    }

    #[test]
    fn test_caller_data_replaces_endpoint_payload() {
        let options = RequestOptions::new()
            .data(json!({"symbol": "ETHUSDT"}))
            .with_default_data(&json!({"symbol": "BTCUSDT", "side": "BUY"}))
            .expect("serialize payload");
        assert_eq!(options.data, Some(json!({"symbol": "ETHUSDT"})));

        let options = RequestOptions::new()
            .with_default_data(&json!({"symbol": "BTCUSDT"}))
            .expect("serialize payload");
        assert_eq!(options.data, Some(json!({"symbol": "BTCUSDT"})));
    }

    #[test]
    fn test_mixed_case_key_header_replaced_by_credential() {
        let mut options = RequestOptions::new();
        options
            .headers
            .insert("X-Api-Key".to_string(), "spoofed".to_string());
        let client = RequestOptions::new().header("X-API-KEY", "client-spoofed");

        let prepared = prepare_options(
            &Method::GET,
            true,
            options,
            &client,
            MergePrecedence::CallWins,
            DEFAULT_TIMEOUT,
            Some("test-key"),
        );

        let keys: Vec<_> = prepared
            .headers
            .keys()
            .filter(|name| name.eq_ignore_ascii_case(API_KEY_HEADER))
            .collect();
        assert_eq!(keys, vec![API_KEY_HEADER]);
        assert_eq!(
            prepared.headers.get(API_KEY_HEADER).map(String::as_str),
            Some("test-key")
        );
    }

    #[test]
    fn test_header_names_merge_case_insensitively() {
        let client = RequestOptions::new().header("X-Trace", "client");
        let call = RequestOptions::new().header("x-trace", "call");

        let prepared = prepare_options(
            &Method::GET,
            false,
            call,
            &client,
            MergePrecedence::ClientWins,
            DEFAULT_TIMEOUT,
            None,
        );

        assert_eq!(prepared.headers.len(), 1);
        assert_eq!(prepared.headers.get("x-trace").map(String::as_str), Some("client"));
    }

    #[rstest]
    #[case(MergePrecedence::ClientWins)]
    #[case(MergePrecedence::CallWins)]
    fn test_zero_client_wide_timeout_counts_as_unset(#[case] precedence: MergePrecedence) {
        let client = RequestOptions::new().timeout(Duration::ZERO);

        let prepared = prepare_options(
            &Method::GET,
            false,
            RequestOptions::new(),
            &client,
            precedence,
            DEFAULT_TIMEOUT,
            None,
        );
        assert_eq!(prepared.timeout, DEFAULT_TIMEOUT);

        let prepared = prepare_options(
            &Method::GET,
            false,
            RequestOptions::new().timeout(Duration::from_secs(2)),
            &client,
            precedence,
            DEFAULT_TIMEOUT,
            None,
        );
        assert_eq!(prepared.timeout, Duration::from_secs(2));
    }
}
