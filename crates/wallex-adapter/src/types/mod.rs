/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod account;
pub mod enums;
pub mod market;
pub mod order;
pub mod otc;
pub mod requests;
pub mod responses;
mod serde_helpers;

pub use account::*;
pub use enums::*;
pub use market::*;
pub use order::*;
pub use otc::*;
pub use requests::*;
pub use responses::*;
