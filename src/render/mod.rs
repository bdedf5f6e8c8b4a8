//! Serialization of outline results for downstream consumers.

mod json;

pub use json::{error_json, to_json, ErrorBody, JsonFormat};
