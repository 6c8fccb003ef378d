//! Whole-string pattern validation.

use regex::Regex;

use crate::error::Result;

/// A pattern input text is validated against.
///
/// Patterns match the entire input, never a substring of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputValidation {
    Email,
    /// One or more ASCII digits.
    Digits,
    /// One or more letters in any script.
    Alphabetic,
    /// One or more letters or digits in any script.
    Alphanumeric,
    /// Optional leading `+`, then digits with spaces, dashes, dots or
    /// parentheses; at least seven digits overall.
    PhoneNumber,
    /// `http` or `https` URL with a dotted host.
    Url,
    /// Caller-supplied regular expression.
    Custom(String),
}

impl InputValidation {
    /// The unanchored pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Email => r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}",
            Self::Digits => r"[0-9]+",
            Self::Alphabetic => r"\p{Alphabetic}+",
            Self::Alphanumeric => r"[\p{Alphabetic}\p{Nd}]+",
            Self::PhoneNumber => r"\+?(?:[ .()-]*[0-9]){7,15}[ .()-]*",
            Self::Url => r"(?i:https?)://[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+(?::[0-9]{1,5})?(?:[/?#]\S*)?",
            Self::Custom(pattern) => pattern,
        }
    }

    /// Whether all of `text` matches the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if a
    /// custom pattern does not compile.
    pub fn matches(&self, text: &str) -> Result<bool> {
        let regex = Regex::new(&format!("^(?:{})$", self.pattern()))?;
        Ok(regex.is_match(text))
    }
}
