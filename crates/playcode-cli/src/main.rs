//! PlayCode CLI - Command-line interface for beeper sound tooling
//!
//! This binary provides commands for printing the note frequency table and
//! for converting between raw sound-code byte pairs and play notation.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use playcode_cli::commands;

/// PlayCode - Beeper Sound-Code and Play-Notation Tools
#[derive(Parser)]
#[command(name = "playcode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the equal-tempered note frequency table
    FreqTable {
        /// Print the 256-entry code-indexed integer table instead
        #[arg(long)]
        codes: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode hexadecimal sound-code byte pairs into play notation
    Decode {
        /// Hexadecimal byte tokens (sound-code / length-multiplier pairs)
        codes: Vec<String>,

        /// Read the byte tokens from a file instead
        #[arg(short, long)]
        input: Option<String>,

        /// Append rests instead of replicating the legacy buffer overwrite
        #[arg(long)]
        fixed_rest: bool,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },

    /// Encode a play-notation string into sound-code byte pairs
    Encode {
        /// Play notation (e.g. "s.-c-a#gf#fd#c")
        // Notation often starts with octave markers, so "-..." must not
        // parse as a flag.
        #[arg(allow_hyphen_values = true)]
        notation: Option<String>,

        /// Read the notation from a file instead
        #[arg(short, long)]
        input: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::FreqTable { codes, json } => commands::freq_table::run(codes, json),
        Commands::Decode {
            codes,
            input,
            fixed_rest,
            json,
        } => commands::decode::run(&codes, input.as_deref(), fixed_rest, json),
        Commands::Encode {
            notation,
            input,
            json,
        } => commands::encode::run(notation.as_deref(), input.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_freq_table() {
        let cli = Cli::try_parse_from(["playcode", "freq-table", "--codes"]).unwrap();
        match cli.command {
            Commands::FreqTable { codes, json } => {
                assert!(codes);
                assert!(!json);
            }
            _ => panic!("expected freq-table command"),
        }
    }

    #[test]
    fn test_cli_parses_decode_inline_tokens() {
        let cli =
            Cli::try_parse_from(["playcode", "decode", "30", "02", "32", "02"]).unwrap();
        match cli.command {
            Commands::Decode {
                codes,
                input,
                fixed_rest,
                json,
            } => {
                assert_eq!(codes, vec!["30", "02", "32", "02"]);
                assert!(input.is_none());
                assert!(!fixed_rest);
                assert!(!json);
            }
            _ => panic!("expected decode command"),
        }
    }

    #[test]
    fn test_cli_parses_decode_input_file() {
        let cli = Cli::try_parse_from([
            "playcode",
            "decode",
            "--input",
            "sound.txt",
            "--fixed-rest",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Decode {
                codes,
                input,
                fixed_rest,
                json,
            } => {
                assert!(codes.is_empty());
                assert_eq!(input.as_deref(), Some("sound.txt"));
                assert!(fixed_rest);
                assert!(json);
            }
            _ => panic!("expected decode command"),
        }
    }

    #[test]
    fn test_cli_parses_encode_with_leading_octave_markers() {
        let cli = Cli::try_parse_from(["playcode", "encode", "--g#f#"]).unwrap();
        match cli.command {
            Commands::Encode { notation, .. } => {
                assert_eq!(notation.as_deref(), Some("--g#f#"));
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_cli_parses_encode() {
        let cli = Cli::try_parse_from(["playcode", "encode", "scdefg"]).unwrap();
        match cli.command {
            Commands::Encode {
                notation,
                input,
                json,
            } => {
                assert_eq!(notation.as_deref(), Some("scdefg"));
                assert!(input.is_none());
                assert!(!json);
            }
            _ => panic!("expected encode command"),
        }
    }
}
