/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod options;
pub mod otc;
pub mod public;
pub mod trade;

pub use error::{DetailedApiError, RawRequest, RawResponse, Result, WallexError};
pub use options::{MergePrecedence, PreparedRequest, RequestOptions, prepare_options};

pub use client::{ApiVersion, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, WallexClient};

pub use reqwest::Method;
