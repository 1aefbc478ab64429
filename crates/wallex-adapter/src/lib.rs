/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Wallex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiVersion,
    ClientConfig,
    DetailedApiError,
    MergePrecedence,
    Method,
    RequestOptions,
    Result,
    WallexClient,
    WallexError,
};

// Re-export all types
pub use types::*;
