//! Encode command implementation
//!
//! Parses a play-notation string into the hexadecimal sound-code byte
//! pairs a player accepts.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use playcode_notes::{parse_notation, SoundEntry};

use crate::commands::json_output::{error_codes, EncodeOutput, JsonError};
use crate::input::{self, InputError};

/// Run the encode command
///
/// # Arguments
/// * `notation` - Play notation given inline on the command line
/// * `input_path` - File to read notation from instead
/// * `json` - Output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on input errors
pub fn run(notation: Option<&str>, input_path: Option<&str>, json: bool) -> Result<ExitCode> {
    let source = match input::read_source(notation.map(str::to_string), input_path) {
        Ok(source) => source,
        Err(e) => return Ok(report_input_error(&e, json)),
    };

    let entries = parse_notation(&source);
    let tokens = hex_tokens(&entries);

    if json {
        let output = EncodeOutput {
            ok: true,
            entries,
            tokens,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", tokens);
    }

    Ok(ExitCode::SUCCESS)
}

/// Render entries as uppercase hex byte tokens, pairs separated by spaces.
fn hex_tokens(entries: &[SoundEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{:02X} {:02X}", e.sound_code, e.length_multiplier))
        .collect::<Vec<_>>()
        .join(" ")
}

fn report_input_error(error: &InputError, json: bool) -> ExitCode {
    if json {
        let code = match error {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::NoInput => error_codes::NO_INPUT,
        };
        let output = serde_json::json!({
            "ok": false,
            "errors": [JsonError::new(code, error.to_string())],
        });
        println!("{}", output);
    } else {
        eprintln!("{} {}", "error:".red().bold(), error);
    }
    ExitCode::from(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_tokens() {
        let entries = parse_notation("sc-d#");
        assert_eq!(hex_tokens(&entries), "30 02 23 02");
    }
}
