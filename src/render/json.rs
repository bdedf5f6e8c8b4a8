//! JSON rendering for outline results.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::OutlineResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert an outline result to JSON.
///
/// The shape is `{"title": ..., "outline": [{"text", "level", "page"}]}`.
pub fn to_json(result: &OutlineResult, format: JsonFormat) -> Result<String> {
    serialize(result, format)
}

/// Body returned in place of a result when processing failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Generic, user-facing message
    pub error: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            error: err.user_message().to_string(),
        }
    }
}

/// Render an error as `{"error": "<generic message>"}`.
///
/// Internal error detail is never included.
pub fn error_json(err: &Error, format: JsonFormat) -> Result<String> {
    serialize(&ErrorBody::from(err), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingCandidate, HeadingLevel};

    fn sample() -> OutlineResult {
        OutlineResult::new(
            "Chapter 1: Introduction",
            vec![HeadingCandidate::new(
                "Chapter 1: Introduction",
                HeadingLevel::H1,
                1,
            )],
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"level\": \"H1\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Chapter 1: Introduction","outline":[{"text":"Chapter 1: Introduction","level":"H1","page":1}]}"#
        );
    }

    #[test]
    fn test_error_json_is_generic() {
        let err = Error::Extraction("xref table at offset 991 corrupted".into());
        let json = error_json(&err, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"error":"Failed to parse PDF file"}"#);
    }
}
