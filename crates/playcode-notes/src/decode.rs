//! Sound-code to play-notation decoding.
//!
//! The inverse of [`parse_notation`](crate::notation::parse_notation):
//! takes the raw (sound-code, length-multiplier) byte pairs stored in game
//! data and renders the play-notation string that produces them. Duration
//! letters are only emitted when the multiplier changes, and octave
//! markers step the running octave toward each note's target, so the
//! output is the canonical spelling of the sequence.

use thiserror::Error;

use crate::notation::{
    SoundEntry, DEFAULT_MULTIPLIER, DEFAULT_OCTAVE, DOTTED, DURATION_LETTERS, NOTE_NAMES,
    OCTAVE_DOWN, OCTAVE_UP, REST, TRIPLET,
};

/// Errors that can occur while decoding sound codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token '{token}' at position {position} is not a hexadecimal byte")]
    InvalidHexToken { token: String, position: usize },
    #[error("sound code at token {position} has no length multiplier")]
    TrailingSoundCode { position: usize },
    #[error("length multiplier {multiplier} in pair {pair} is not a representable duration")]
    UnsupportedDuration { multiplier: u8, pair: usize },
    #[error("sound code {sound_code:#04x} in pair {pair} is outside the chromatic scale")]
    InvalidNoteIndex { sound_code: u8, pair: usize },
}

/// How a rest code affects the output buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestBehavior {
    /// Replace everything decoded so far with a single rest marker. This
    /// matches the legacy tool byte for byte and is almost certainly a bug
    /// in it; kept as the default for output parity.
    #[default]
    LegacyOverwrite,
    /// Append the rest marker like any other token.
    Append,
}

/// Streaming decoder state: the running octave and length multiplier
/// persist across [`decode`](Decoder::decode) calls.
#[derive(Debug)]
pub struct Decoder {
    current_octave: u8,
    current_multiplier: u8,
    rest_behavior: RestBehavior,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Decoder with the player's initial state (octave 3, multiplier 1)
    /// and legacy rest handling.
    pub fn new() -> Self {
        Self::with_rest_behavior(RestBehavior::default())
    }

    /// Decoder with an explicit rest behavior.
    pub fn with_rest_behavior(rest_behavior: RestBehavior) -> Self {
        Decoder {
            current_octave: DEFAULT_OCTAVE,
            current_multiplier: DEFAULT_MULTIPLIER,
            rest_behavior,
        }
    }

    /// Render a sequence of sound entries as play notation.
    ///
    /// # Examples
    /// ```
    /// use playcode_notes::decode::Decoder;
    /// use playcode_notes::notation::SoundEntry;
    ///
    /// let entries = [
    ///     SoundEntry { sound_code: 0x30, length_multiplier: 2 },
    ///     SoundEntry { sound_code: 0x32, length_multiplier: 2 },
    /// ];
    /// assert_eq!(Decoder::new().decode(&entries).unwrap(), "scd");
    /// ```
    pub fn decode(&mut self, entries: &[SoundEntry]) -> Result<String, DecodeError> {
        let mut output = String::new();

        for (pair, entry) in entries.iter().enumerate() {
            if entry.length_multiplier != self.current_multiplier {
                push_duration(&mut output, entry.length_multiplier, pair)?;
                self.current_multiplier = entry.length_multiplier;
            }

            if entry.is_rest() {
                match self.rest_behavior {
                    RestBehavior::LegacyOverwrite => {
                        output.clear();
                        output.push(REST);
                    }
                    RestBehavior::Append => output.push(REST),
                }
            } else if entry.is_effect() {
                output.push_str(&entry.effect_index().to_string());
            } else {
                let semitone = entry.semitone();
                if semitone as usize >= NOTE_NAMES.len() {
                    return Err(DecodeError::InvalidNoteIndex {
                        sound_code: entry.sound_code,
                        pair,
                    });
                }
                let octave = entry.octave();
                while self.current_octave > octave {
                    output.push(OCTAVE_DOWN);
                    self.current_octave -= 1;
                }
                while self.current_octave < octave {
                    output.push(OCTAVE_UP);
                    self.current_octave += 1;
                }
                output.push_str(NOTE_NAMES[semitone as usize]);
            }
        }

        Ok(output)
    }
}

/// Append the duration marker for a new length multiplier.
///
/// The multiplier is matched against three shapes, in order: an exact
/// power of two (a bare duration letter), one-and-a-half times a power of
/// two (letter plus dot), and a third of a power of two (letter plus
/// triplet digit). Anything else has no spelling in the notation.
fn push_duration(output: &mut String, multiplier: u8, pair: usize) -> Result<(), DecodeError> {
    let unsupported = DecodeError::UnsupportedDuration { multiplier, pair };
    let mul = u32::from(multiplier);

    let mut exponent: usize = 1;
    while (1u32 << (exponent + 1)) < mul {
        exponent += 1;
    }

    if mul == 1u32 << exponent && exponent < DURATION_LETTERS.len() {
        output.push(DURATION_LETTERS[exponent]);
    } else if mul == (1u32 << exponent) * 3 / 2 && exponent < DURATION_LETTERS.len() {
        output.push(DURATION_LETTERS[exponent]);
        output.push(DOTTED);
    } else {
        let mut power: usize = 1;
        while (1u32 << power) < mul * 3 {
            power += 1;
        }
        if mul * 3 == 1u32 << power && power < DURATION_LETTERS.len() {
            output.push(DURATION_LETTERS[power]);
            output.push(TRIPLET);
        } else {
            return Err(unsupported);
        }
    }

    Ok(())
}

/// Parse a whitespace-separated string of hexadecimal byte tokens into
/// (sound-code, length-multiplier) pairs.
///
/// # Examples
/// ```
/// use playcode_notes::decode::parse_sound_bytes;
/// use playcode_notes::notation::SoundEntry;
///
/// assert_eq!(
///     parse_sound_bytes("20 3").unwrap(),
///     vec![SoundEntry { sound_code: 0x20, length_multiplier: 3 }],
/// );
/// ```
pub fn parse_sound_bytes(text: &str) -> Result<Vec<SoundEntry>, DecodeError> {
    let mut bytes = Vec::new();
    for (position, token) in text.split_ascii_whitespace().enumerate() {
        let value =
            u8::from_str_radix(token, 16).map_err(|_| DecodeError::InvalidHexToken {
                token: token.to_string(),
                position,
            })?;
        bytes.push(value);
    }

    if bytes.len() % 2 != 0 {
        return Err(DecodeError::TrailingSoundCode {
            position: bytes.len() - 1,
        });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| SoundEntry {
            sound_code: pair[0],
            length_multiplier: pair[1],
        })
        .collect())
}

/// Decode a whitespace-separated hex byte string in one call, with the
/// default (legacy) rest behavior.
pub fn decode_sound_bytes(text: &str) -> Result<String, DecodeError> {
    Decoder::new().decode(&parse_sound_bytes(text)?)
}
