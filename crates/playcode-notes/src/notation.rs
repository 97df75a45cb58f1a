//! Play-notation vocabulary shared by the parser and the decoder.
//!
//! Play notation is a compact melody language for beeper-style sound
//! players: duration letters set a running note length, `+`/`-` step a
//! running octave, and note letters (with optional `#`/`!`) emit a sound
//! code relative to that state.

use serde::{Deserialize, Serialize};

/// The 12 semitone names cycling per octave.
pub const NOTE_NAMES: [&str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
];

/// Duration letters in ascending note length: 32nd, 16th, eighth, quarter,
/// half, whole. The letter at index `i` corresponds to length multiplier
/// `2^i`.
pub const DURATION_LETTERS: [char; 6] = ['t', 's', 'i', 'q', 'h', 'w'];

/// Rest marker.
pub const REST: char = 'x';
/// Steps the running octave up by one.
pub const OCTAVE_UP: char = '+';
/// Steps the running octave down by one.
pub const OCTAVE_DOWN: char = '-';
/// Dotted-duration marker (length multiplied by 1.5).
pub const DOTTED: char = '.';
/// Triplet marker (length divided by 3).
pub const TRIPLET: char = '3';
/// Sharp marker following a note letter.
pub const SHARP: char = '#';
/// Flat marker following a note letter.
pub const FLAT: char = '!';

/// First sound code that carries a literal effect parameter instead of a
/// note. Codes 240-255 pass the value `code - 240` through to the player.
pub const EFFECT_CODE_BASE: u8 = 240;

/// Octave a notation string starts in.
pub const DEFAULT_OCTAVE: u8 = 3;
/// Length multiplier a notation string starts with (a 32nd note).
pub const DEFAULT_MULTIPLIER: u8 = 1;

/// Lowest octave reachable with `-` markers.
pub const MIN_OCTAVE: u8 = 1;
/// Highest octave reachable with `+` markers.
pub const MAX_OCTAVE: u8 = 6;

/// Semitone offsets for the note letters `a` through `g`.
const SCALE_INDICES: [u8; 7] = [9, 11, 0, 2, 4, 5, 7];

/// A single note, rest, or effect that can be strung together with others
/// to make a game sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Sound code. 0 is a rest, 1-239 encode octave (code div 16) and
    /// semitone (code mod 16), 240-255 are effect parameters.
    pub sound_code: u8,
    /// Relative note length. 1 means a 32nd note, 2 a 16th, and so on.
    pub length_multiplier: u8,
}

impl SoundEntry {
    /// Returns true for the rest code.
    pub fn is_rest(&self) -> bool {
        self.sound_code == 0
    }

    /// Returns true for effect parameter codes (240-255).
    pub fn is_effect(&self) -> bool {
        self.sound_code >= EFFECT_CODE_BASE
    }

    /// Octave encoded in the high nibble of a note code.
    pub fn octave(&self) -> u8 {
        self.sound_code / 16
    }

    /// Semitone index encoded in the low nibble of a note code. Only
    /// values 0-11 name a note in [`NOTE_NAMES`].
    pub fn semitone(&self) -> u8 {
        self.sound_code % 16
    }

    /// Literal parameter carried by an effect code.
    pub fn effect_index(&self) -> u8 {
        self.sound_code - EFFECT_CODE_BASE
    }
}

/// Parse a play-notation string into the sound entries a player accepts.
///
/// Tracks a running octave (starting at 3, clamped to 1..=6) and a running
/// length multiplier (starting at 1). Duration letters replace the
/// multiplier, `.` extends it by half, `3` divides it by three. Note
/// letters `a`-`g` take an optional trailing `#` or `!` and emit a sound
/// code; `x` emits a rest; digits emit effect codes. Anything else is
/// skipped, so inputs may contain spaces freely.
///
/// # Examples
/// ```
/// use playcode_notes::notation::{parse_notation, SoundEntry};
///
/// assert_eq!(
///     parse_notation("c+c"),
///     vec![
///         SoundEntry { sound_code: 0x30, length_multiplier: 1 },
///         SoundEntry { sound_code: 0x40, length_multiplier: 1 },
///     ],
/// );
/// ```
pub fn parse_notation(notation: &str) -> Vec<SoundEntry> {
    let bytes = notation.as_bytes();
    let mut index = 0;
    let mut octave = DEFAULT_OCTAVE;
    let mut length_multiplier = DEFAULT_MULTIPLIER;
    let mut entries = Vec::new();

    while index < bytes.len() {
        match bytes[index].to_ascii_lowercase() {
            b't' => length_multiplier = 1,
            b's' => length_multiplier = 2,
            b'i' => length_multiplier = 4,
            b'q' => length_multiplier = 8,
            b'h' => length_multiplier = 16,
            b'w' => length_multiplier = 32,
            b'3' => length_multiplier /= 3,
            b'.' => length_multiplier += length_multiplier / 2,
            b'+' => {
                if octave < MAX_OCTAVE {
                    octave += 1;
                }
            }
            b'-' => {
                if octave > MIN_OCTAVE {
                    octave -= 1;
                }
            }
            b'x' => {
                entries.push(SoundEntry {
                    sound_code: 0,
                    length_multiplier,
                });
            }
            note_letter @ b'a'..=b'g' => {
                let mut semitone = SCALE_INDICES[(note_letter - b'a') as usize];

                match bytes.get(index + 1).copied() {
                    Some(b'#') => {
                        semitone = semitone.wrapping_add(1);
                        index += 1;
                    }
                    Some(b'!') => {
                        semitone = semitone.wrapping_sub(1);
                        index += 1;
                    }
                    _ => {}
                }

                // A wrapped accidental (c! or b#) lands on a nibble outside
                // the scale; the decoder rejects it rather than this parser.
                entries.push(SoundEntry {
                    sound_code: (octave * 16).wrapping_add(semitone),
                    length_multiplier,
                });
            }
            // b'3' is the triplet marker and is matched above.
            effect_digit @ b'0'..=b'9' => {
                entries.push(SoundEntry {
                    sound_code: EFFECT_CODE_BASE + (effect_digit - b'0'),
                    length_multiplier,
                });
            }
            _ => {}
        }

        index += 1;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(sound_code: u8, length_multiplier: u8) -> SoundEntry {
        SoundEntry {
            sound_code,
            length_multiplier,
        }
    }

    #[test]
    fn test_notes_track_running_octave() {
        assert_eq!(
            parse_notation("c-c+e"),
            vec![entry(0x30, 1), entry(0x20, 1), entry(0x34, 1)],
        );
    }

    #[test]
    fn test_duration_letters_set_multiplier() {
        assert_eq!(
            parse_notation("tcscicqchcwc"),
            vec![
                entry(0x30, 1),
                entry(0x30, 2),
                entry(0x30, 4),
                entry(0x30, 8),
                entry(0x30, 16),
                entry(0x30, 32),
            ],
        );
    }

    #[test]
    fn test_dotted_and_triplet_modifiers() {
        // s. = 2 + 1, q3 = 8 / 3 in integer arithmetic.
        assert_eq!(
            parse_notation("s.c q3c"),
            vec![entry(0x30, 3), entry(0x30, 2)],
        );
    }

    #[test]
    fn test_sharp_and_flat_suffixes() {
        assert_eq!(
            parse_notation("c#d!"),
            vec![entry(0x31, 1), entry(0x31, 1)],
        );
    }

    #[test]
    fn test_octave_markers_clamp() {
        assert_eq!(parse_notation("---c")[0], entry(0x10, 1));
        assert_eq!(parse_notation("++++c")[0], entry(0x60, 1));
    }

    #[test]
    fn test_rests_and_effect_digits() {
        assert_eq!(
            parse_notation("x4"),
            vec![entry(0, 1), entry(244, 1)],
        );
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(parse_notation("c d"), parse_notation("cd"));
    }

    #[test]
    fn test_semitone_accessors() {
        let e = entry(0x2A, 3);
        assert_eq!(e.octave(), 2);
        assert_eq!(e.semitone(), 10);
        assert!(!e.is_rest());
        assert!(!e.is_effect());
        assert_eq!(entry(244, 1).effect_index(), 4);
        assert!(entry(0, 1).is_rest());
    }
}
