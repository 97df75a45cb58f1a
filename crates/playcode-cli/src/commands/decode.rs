//! Decode command implementation
//!
//! Decodes a sequence of hexadecimal sound-code byte pairs into a play
//! notation string.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use playcode_notes::decode::{parse_sound_bytes, DecodeError, Decoder, RestBehavior};

use crate::commands::json_output::{error_codes, DecodeOutput, JsonError};
use crate::input::{self, InputError};

/// Run the decode command
///
/// # Arguments
/// * `codes` - Hexadecimal byte tokens given inline on the command line
/// * `input_path` - File to read tokens from instead
/// * `fixed_rest` - Append rests instead of the legacy buffer overwrite
/// * `json` - Output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 on input or decode errors
pub fn run(
    codes: &[String],
    input_path: Option<&str>,
    fixed_rest: bool,
    json: bool,
) -> Result<ExitCode> {
    let inline = if codes.is_empty() {
        None
    } else {
        Some(codes.join(" "))
    };

    let source = match input::read_source(inline, input_path) {
        Ok(source) => source,
        Err(e) => return Ok(report_input_error(&e, json)),
    };

    let rest_behavior = if fixed_rest {
        RestBehavior::Append
    } else {
        RestBehavior::LegacyOverwrite
    };

    let result = parse_sound_bytes(&source)
        .and_then(|entries| {
            Decoder::with_rest_behavior(rest_behavior)
                .decode(&entries)
                .map(|notation| (entries, notation))
        });

    match result {
        Ok((entries, notation)) => {
            if json {
                let output = DecodeOutput {
                    ok: true,
                    notation: Some(notation),
                    entries: Some(entries),
                    errors: vec![],
                };
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{}", notation);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json {
                let output = DecodeOutput {
                    ok: false,
                    notation: None,
                    entries: None,
                    errors: vec![decode_json_error(&e)],
                };
                println!("{}", serde_json::to_string(&output)?);
            } else {
                eprintln!("{} {}", "error:".red().bold(), e);
            }
            Ok(ExitCode::from(1))
        }
    }
}

/// Report an input resolution failure and pick the exit code.
fn report_input_error(error: &InputError, json: bool) -> ExitCode {
    if json {
        let code = match error {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::NoInput => error_codes::NO_INPUT,
        };
        let output = DecodeOutput {
            ok: false,
            notation: None,
            entries: None,
            errors: vec![JsonError::new(code, error.to_string())],
        };
        // Serialization of a flat error struct cannot fail.
        println!("{}", serde_json::to_string(&output).unwrap_or_default());
    } else {
        eprintln!("{} {}", "error:".red().bold(), error);
    }
    ExitCode::from(1)
}

/// Map a decode failure to its stable JSON error, keeping the position.
fn decode_json_error(error: &DecodeError) -> JsonError {
    let position = match error {
        DecodeError::InvalidHexToken { position, .. } => *position,
        DecodeError::TrailingSoundCode { position } => *position,
        DecodeError::UnsupportedDuration { pair, .. } => *pair,
        DecodeError::InvalidNoteIndex { pair, .. } => *pair,
    };
    JsonError::new(error_codes::DECODE_ERROR, error.to_string()).with_position(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_error_keeps_position() {
        let err = DecodeError::UnsupportedDuration {
            multiplier: 5,
            pair: 7,
        };
        let json_err = decode_json_error(&err);
        assert_eq!(json_err.code, error_codes::DECODE_ERROR);
        assert_eq!(json_err.position, Some(7));
    }
}
