//! Freq-table command implementation
//!
//! Prints the equal-tempered note frequency table: 15 octaves of 12
//! semitones from a 64 Hz base C, one frequency per line in ascending
//! pitch order. With `--codes`, prints the 256-entry code-indexed integer
//! table players use at runtime instead.

use anyhow::{Context, Result};
use std::process::ExitCode;

use playcode_notes::freq::{frequency_table, sound_code_frequencies};

use crate::commands::json_output::FreqTableOutput;

/// Run the freq-table command
///
/// # Arguments
/// * `codes` - Print the code-indexed integer table instead of exact values
/// * `json` - Output machine-readable JSON
///
/// # Returns
/// Exit code: always 0 (the table has no failure modes)
pub fn run(codes: bool, json: bool) -> Result<ExitCode> {
    if json {
        let output = if codes {
            FreqTableOutput {
                frequencies: None,
                code_table: Some(sound_code_frequencies().to_vec()),
            }
        } else {
            FreqTableOutput {
                frequencies: Some(frequency_table()),
                code_table: None,
            }
        };
        println!(
            "{}",
            serde_json::to_string(&output).context("failed to serialize frequency table")?
        );
        return Ok(ExitCode::SUCCESS);
    }

    if codes {
        for (code, freq) in sound_code_frequencies().iter().enumerate() {
            println!("{:#04x} {}", code, freq);
        }
    } else {
        for freq in frequency_table() {
            println!("{}", freq);
        }
    }

    Ok(ExitCode::SUCCESS)
}
