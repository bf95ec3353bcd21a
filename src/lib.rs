use std::fs;
use std::path::Path;

pub use crate::document::error::{FileError, ParseError, ParseErrorKind};
pub use crate::document::number::Number;
pub use crate::document::value::Value;

mod document;
mod macros;

/// Parses a single JSON document out of `text`.
pub fn from_str(text: &str) -> Result<Value, ParseError> {
    document::parse(text.as_bytes())
}

/// Parses a single JSON document out of `buffer`.
pub fn from_slice(buffer: &[u8]) -> Result<Value, ParseError> {
    document::parse(buffer)
}

/// Renders `value` as indented text starting at depth 0.
pub fn to_string(value: &Value) -> String {
    document::serialize(value, 0)
}

/// Renders `value` as indented text with the outermost container sitting at
/// `base_indent` levels.
pub fn serialize(value: &Value, base_indent: usize) -> String {
    document::serialize(value, base_indent)
}

/// Reads the file at `path` and parses its content as one JSON document.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Value, FileError> {
    let buffer = fs::read(path)?;
    Ok(from_slice(&buffer)?)
}

/// Writes `value` to the file at `path` as indented text.
pub fn to_file<P: AsRef<Path>>(path: P, value: &Value) -> Result<(), FileError> {
    Ok(fs::write(path, to_string(value))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn round_trip_preserves_structure() {
        let val = json!({
            "name": "sensor-7",
            "enabled": true,
            "retries": 3,
            "threshold": 0.25,
            "tags": ["a", "b"],
            "nested": { "deep": [1, 2.0, null, false] }
        });

        assert_eq!(from_str(&to_string(&val)), Ok(val));
    }

    #[test]
    fn round_trip_keeps_numeric_tags() {
        let parsed = from_str(&to_string(&json!([2, 2.0]))).unwrap();

        assert!(parsed.get_index(0).unwrap().as_number().unwrap().is_integral());
        assert!(!parsed.get_index(1).unwrap().as_number().unwrap().is_integral());
    }

    #[test]
    fn deep_documents_round_trip() {
        let text = format!("{}42{}", "[".repeat(100), "]".repeat(100));
        let val = from_str(&text).unwrap();

        assert_eq!(from_str(&to_string(&val)), Ok(val));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let val = json!({ "a": 1, "b": "two" });

        to_file(&path, &val).unwrap();
        assert_eq!(from_file(&path).unwrap(), val);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = from_file("/definitely/not/here.json");

        assert!(matches!(result, Err(FileError::Io(_))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"a":}"#).unwrap();

        assert!(matches!(from_file(&path), Err(FileError::Parse(_))));
    }
}
