//! Error types for string_extras.

use std::fmt;

/// Result type alias for string_extras operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for string_extras operations.
#[derive(Debug)]
pub enum Error {
    /// Range bound outside `0..=len`.
    OutOfBounds { lo: isize, hi: isize, len: usize },
    /// Range with `lo` past its exclusive end, or not on a boundary.
    InvalidRange { lo: isize, hi: isize },
    /// Payload could not be decoded as UTF-8.
    Decode(String),
    /// Markup rejected by the HTML engine.
    Html { offset: usize, message: String },
    /// Validation pattern failed to compile.
    InvalidPattern(regex::Error),
}

impl Error {
    pub(crate) fn html(offset: usize, message: impl Into<String>) -> Self {
        Self::Html {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { lo, hi, len } => {
                write!(f, "range {lo}..{hi} out of bounds for len {len}")
            }
            Self::InvalidRange { lo, hi } => {
                write!(f, "invalid range {lo}..{hi}")
            }
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Html { offset, message } => {
                write!(f, "html error at byte {offset}: {message}")
            }
            Self::InvalidPattern(e) => write!(f, "invalid pattern: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::InvalidPattern(e)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::Decode(e.to_string())
    }
}
