//! PlayCode Notes - Beeper Sound Codes and Play Notation
//!
//! This crate handles the compact sound encoding used by beeper-style game
//! sound players: flat sequences of (sound-code, length-multiplier) byte
//! pairs, and the play-notation text they are written in.
//!
//! # Features
//!
//! - **Decoding**: render raw byte pairs back into canonical play notation
//! - **Parsing**: turn a play-notation string into the byte pairs a player
//!   accepts
//! - **Frequency tables**: equal-tempered note frequencies from a 64 Hz
//!   base, both as exact floats and as the code-indexed integer table
//!   players use at runtime
//!
//! # Example
//!
//! ```
//! use playcode_notes::{decode_sound_bytes, parse_notation};
//!
//! let notation = decode_sound_bytes("30 02 32 02 34 02")?;
//! assert_eq!(notation, "scde");
//!
//! // The forward direction recovers the original bytes.
//! let entries = parse_notation(&notation);
//! assert_eq!(entries[0].sound_code, 0x30);
//! # Ok::<(), playcode_notes::DecodeError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`notation`]: shared vocabulary, [`SoundEntry`], and the forward parser
//! - [`decode`]: byte pairs to notation, with structured errors
//! - [`freq`]: note frequency tables

pub mod decode;
pub mod freq;
pub mod notation;

// Re-export main types
pub use decode::{decode_sound_bytes, parse_sound_bytes, DecodeError, Decoder, RestBehavior};
pub use freq::{frequency_table, note_frequency, sound_code_frequencies, BASE_C_FREQ};
pub use notation::{parse_notation, SoundEntry, DURATION_LETTERS, NOTE_NAMES};

/// Crate version for tool identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
