//! URL construction and percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
pub use ::url::Url;

/// Bytes that need escaping inside a URL host.
///
/// Everything except ASCII alphanumerics and `!$&'()*+,-.:;=[]_~`.
pub const URL_HOST: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'[')
    .remove(b']')
    .remove(b'_')
    .remove(b'~');

/// Parse an absolute URL, or `None` if `text` is not one.
#[must_use]
pub fn parse_url(text: &str) -> Option<Url> {
    Url::parse(text).ok()
}

/// Percent-encode `text` for use in a URL host.
#[must_use]
pub fn url_escaped(text: &str) -> String {
    utf8_percent_encode(text, URL_HOST).to_string()
}

/// UTF-8 bytes of `text`.
#[must_use]
pub fn utf8_encoded(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
