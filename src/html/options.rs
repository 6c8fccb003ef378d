//! Options for HTML rendering.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::font::FontDescriptor;

/// How malformed UTF-8 in byte payloads is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decoding {
    /// Replace malformed sequences with U+FFFD.
    #[default]
    Lossy,
    /// Reject payloads that are not valid UTF-8.
    Strict,
}

/// Character encoding of byte payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

/// How the payload is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentType {
    #[default]
    Html,
    /// Text is taken verbatim in the base font.
    PlainText,
}

/// Configuration for [`render_html_bytes`](crate::html::render_html_bytes)
/// and the markup engine.
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlOptions {
    pub decoding: Decoding,
    pub encoding: TextEncoding,
    pub document_type: DocumentType,
    /// Font for text outside any font-changing element.
    pub base_font: FontDescriptor,
    /// Family for `code`, `pre`, `tt`, `kbd` and `samp`.
    pub monospace_family: String,
    /// Maximum element nesting depth before the markup is rejected.
    pub max_depth: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            decoding: Decoding::Lossy,
            encoding: TextEncoding::Utf8,
            document_type: DocumentType::Html,
            base_font: FontDescriptor::new("Times", 12.0),
            monospace_family: "Courier".to_string(),
            max_depth: 512,
        }
    }
}

impl HtmlOptions {
    /// Decode a byte payload according to `encoding` and `decoding`.
    pub fn decode<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, str>> {
        match (self.encoding, self.decoding) {
            (TextEncoding::Latin1, _) => Ok(Cow::Owned(
                payload.iter().map(|&b| char::from(b)).collect(),
            )),
            (TextEncoding::Utf8, Decoding::Lossy) => Ok(String::from_utf8_lossy(payload)),
            (TextEncoding::Utf8, Decoding::Strict) => std::str::from_utf8(payload)
                .map(Cow::Borrowed)
                .map_err(|e| Error::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = HtmlOptions::default();
        assert_eq!(options.decoding, Decoding::Lossy);
        assert_eq!(options.document_type, DocumentType::Html);
        assert_eq!(options.base_font.family, "Times");
    }

    #[test]
    fn lossy_repairs_invalid_utf8() {
        let options = HtmlOptions::default();
        let text = options.decode(b"ok \xff!").unwrap();
        assert_eq!(text, "ok \u{FFFD}!");
    }

    #[test]
    fn strict_rejects_invalid_utf8() {
        let options = HtmlOptions {
            decoding: Decoding::Strict,
            ..HtmlOptions::default()
        };
        assert!(matches!(options.decode(b"\xc3("), Err(Error::Decode(_))));
        assert_eq!(options.decode("é".as_bytes()).unwrap(), "é");
    }

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        let options = HtmlOptions {
            encoding: TextEncoding::Latin1,
            ..HtmlOptions::default()
        };
        assert_eq!(options.decode(b"caf\xe9").unwrap(), "café");
    }
}
