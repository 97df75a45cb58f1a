//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on the `freq-table`, `decode`, and
//! `encode` commands so other tools can parse CLI output programmatically.

use serde::{Deserialize, Serialize};

use playcode_notes::SoundEntry;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// No input was given
    pub const NO_INPUT: &str = "CLI_002";
    /// Sound-code decoding failed
    pub const DECODE_ERROR: &str = "CLI_003";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Token or pair position the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            position: None,
        }
    }

    /// Sets the position for this error.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

/// Output of `playcode decode --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeOutput {
    /// Whether decoding succeeded.
    pub ok: bool,
    /// Decoded play notation (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    /// Parsed entries (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<SoundEntry>>,
    /// Errors (present on failure).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Output of `playcode encode --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOutput {
    /// Whether encoding succeeded.
    pub ok: bool,
    /// Encoded entries.
    pub entries: Vec<SoundEntry>,
    /// The entries as hexadecimal byte tokens.
    pub tokens: String,
}

/// Output of `playcode freq-table --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreqTableOutput {
    /// Exact equal-tempered frequencies, ascending (absent with --codes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<Vec<f64>>,
    /// Code-indexed integer table (present with --codes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_table: Option<Vec<u16>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_builder() {
        let err = JsonError::new(error_codes::DECODE_ERROR, "bad pair").with_position(3);
        assert_eq!(err.code, "CLI_003");
        assert_eq!(err.position, Some(3));
    }

    #[test]
    fn test_decode_output_skips_empty_fields() {
        let output = DecodeOutput {
            ok: true,
            notation: Some("scde".to_string()),
            entries: None,
            errors: vec![],
        };
        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("errors"));
        assert!(!json.contains("entries"));
    }
}
