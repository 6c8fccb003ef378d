//! Unicode normalization and comparison helpers.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Normalize `text` to NFC (canonical composition).
#[must_use]
pub fn normalize_nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Normalize `text` to NFD (canonical decomposition).
#[must_use]
pub fn normalize_nfd(text: &str) -> String {
    text.nfd().collect()
}

/// Compare two strings after NFC normalization.
#[must_use]
pub fn compare_normalized(a: &str, b: &str) -> Ordering {
    a.nfc().cmp(b.nfc())
}

/// Compare two strings ignoring case.
///
/// Both sides are NFC-normalized and lowercased per Unicode before a
/// char-by-char comparison, so `"Straße"` and `"STRASSE"` still differ
/// while `"É"` and `"e\u{301}"` compare equal.
#[must_use]
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase()));
    }
    a.nfc()
        .flat_map(char::to_lowercase)
        .cmp(b.nfc().flat_map(char::to_lowercase))
}

/// Check whether two strings are equal ignoring case.
#[must_use]
pub fn eq_case_insensitive(a: &str, b: &str) -> bool {
    compare_case_insensitive(a, b) == Ordering::Equal
}
