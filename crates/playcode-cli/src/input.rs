//! Input loading for the decode and encode commands.
//!
//! Both commands accept their payload either inline on the command line or
//! from a file; this module resolves the two into one source string.

use std::path::{Path, PathBuf};

/// Errors raised while resolving command input.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Neither inline input nor a file path was given.
    NoInput,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::NoInput => {
                write!(f, "no input given (pass it on the command line or via --input)")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::NoInput => None,
        }
    }
}

/// Resolve inline text or a file path into the source string to process.
///
/// A file path wins over inline input when both are given, matching the
/// usual expectation that an explicit `--input` flag is deliberate.
pub fn read_source(inline: Option<String>, path: Option<&str>) -> Result<String, InputError> {
    if let Some(path) = path {
        let path = Path::new(path);
        return std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
            path: path.to_path_buf(),
            source,
        });
    }

    match inline {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(InputError::NoInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_input() {
        assert_eq!(read_source(Some("30 02".to_string()), None).unwrap(), "30 02");
    }

    #[test]
    fn test_empty_inline_is_no_input() {
        assert!(matches!(
            read_source(Some("   ".to_string()), None),
            Err(InputError::NoInput),
        ));
        assert!(matches!(read_source(None, None), Err(InputError::NoInput)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_source(None, Some("/nonexistent/sound.txt")).unwrap_err();
        match err {
            InputError::FileRead { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/sound.txt"));
            }
            other => panic!("expected FileRead, got {:?}", other),
        }
    }
}
