//! HTML to styled text.
//!
//! Rendering never fails loudly: decode and markup errors are reported
//! through the log callback and surface as `None`, so callers treat every
//! render as possibly empty.
//!
//! # Examples
//!
//! ```
//! use string_extras::font::{FontCollection, FontDescriptor, FontTraits};
//! use string_extras::html::apply_html;
//!
//! let fonts = FontCollection::with_standard_families();
//! let target = FontDescriptor::new("Helvetica", 15.0);
//! let doc = apply_html(Some("plain <b>bold</b>"), Some(&target), &fonts).unwrap();
//!
//! let bold = doc.attributes_at(6).unwrap().font().unwrap();
//! assert_eq!(bold.family, "Helvetica");
//! assert!(bold.traits.contains(FontTraits::BOLD));
//! ```

mod document;
mod engine;
mod options;
mod tokenizer;

pub use document::{
    AttributeKey, AttributeValue, Attributes, StyledDocument, StyledDocumentBuilder, StyledRun,
};
pub use engine::{HtmlEngine, MarkupEngine};
pub use options::{Decoding, DocumentType, HtmlOptions, TextEncoding};
pub use tokenizer::{Token, Tokenizer, decode_entities};

use crate::event::{LogLevel, emit_log};
use crate::font::{FontDescriptor, FontSystem, copy_symbolic_traits};

/// Render an HTML string with the default options.
///
/// Absent input gives an absent document.
#[must_use]
pub fn render_html(payload: Option<&str>) -> Option<StyledDocument> {
    render_html_with(payload?, &HtmlOptions::default(), &MarkupEngine)
}

/// Render an HTML byte payload, decoding it per `options`.
#[must_use]
pub fn render_html_bytes(payload: &[u8], options: &HtmlOptions) -> Option<StyledDocument> {
    match options.decode(payload) {
        Ok(text) => render_html_with(&text, options, &MarkupEngine),
        Err(e) => {
            emit_log(LogLevel::Warn, &format!("html payload not decodable: {e}"));
            None
        }
    }
}

/// Render `markup` with a specific engine.
pub fn render_html_with(
    markup: &str,
    options: &HtmlOptions,
    engine: &(impl HtmlEngine + ?Sized),
) -> Option<StyledDocument> {
    match engine.render(markup, options) {
        Ok(doc) => Some(doc),
        Err(e) => {
            emit_log(LogLevel::Warn, &format!("html render failed: {e}"));
            None
        }
    }
}

/// Rewrite every font in `doc` to `font`, keeping each run's symbolic traits.
///
/// Each maximal span sharing one font value gets `font`'s family and size
/// with the span's traits merged in. The text and run boundaries of `doc`
/// are kept as they are, even where two runs end up with equal attributes. Spans are left as they are when the
/// font system has no face for the merged traits, or when the span's font
/// attribute is missing or not a font. `None` returns `doc` unchanged.
#[must_use]
pub fn apply_font(
    doc: &StyledDocument,
    font: Option<&FontDescriptor>,
    system: &(impl FontSystem + ?Sized),
) -> StyledDocument {
    let Some(target) = font else {
        return doc.clone();
    };

    let replacements: Vec<_> = doc
        .enumerate_attribute(AttributeKey::Font)
        .into_iter()
        .map(|(range, value)| {
            let replacement = match value {
                Some(AttributeValue::Font(original)) => {
                    let merged = copy_symbolic_traits(original, target, system);
                    if merged.is_none() {
                        emit_log(
                            LogLevel::Debug,
                            &format!(
                                "no {} face with traits {:?}; keeping {}",
                                target.family, original.traits, original.family
                            ),
                        );
                    }
                    merged
                }
                Some(other) => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("font attribute holds {other:?}; leaving run unchanged"),
                    );
                    None
                }
                None => None,
            };
            (range, replacement)
        })
        .collect();

    let mut builder = StyledDocument::builder();
    let mut spans = replacements.iter().peekable();
    for run in doc.runs() {
        while spans
            .peek()
            .is_some_and(|(range, _)| range.end <= run.range.start)
        {
            spans.next();
        }
        let mut attributes = run.attributes.clone();
        if let Some((_, Some(replacement))) = spans.peek() {
            attributes.insert(AttributeKey::Font, AttributeValue::Font(replacement.clone()));
        }
        builder.push_run(&doc.text()[run.range.clone()], attributes);
    }
    builder.build()
}

/// Render `payload` and apply `font` with trait preservation.
///
/// Absent or unrenderable payloads give `None`; a `None` font keeps the
/// fonts the markup produced.
#[must_use]
pub fn apply_html(
    payload: Option<&str>,
    font: Option<&FontDescriptor>,
    system: &(impl FontSystem + ?Sized),
) -> Option<StyledDocument> {
    let doc = render_html(payload)?;
    if font.is_none() {
        return Some(doc);
    }
    Some(apply_font(&doc, font, system))
}

/// Visible text of an HTML string, or an empty string if it cannot be
/// rendered.
#[must_use]
pub fn html_to_plain(payload: &str) -> String {
    render_html(Some(payload))
        .map(|doc| doc.text().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontCollection, FontTraits};

    fn fonts() -> FontCollection {
        FontCollection::with_standard_families()
    }

    #[test]
    fn absent_payload_is_absent() {
        assert!(render_html(None).is_none());
        assert!(apply_html(None, None, &fonts()).is_none());
    }

    #[test]
    fn render_failure_is_absent() {
        assert!(render_html(Some("<p>cut <b")).is_none());
        assert_eq!(html_to_plain("<p>cut <b"), "");
    }

    #[test]
    fn html_to_plain_extracts_text() {
        assert_eq!(html_to_plain("<p>Hello, <b>world</b>!</p>"), "Hello, world!");
    }

    #[test]
    fn strict_bytes_reject_invalid_utf8() {
        let options = HtmlOptions {
            decoding: Decoding::Strict,
            ..HtmlOptions::default()
        };
        assert!(render_html_bytes(b"<b>\xff\xfe</b>", &options).is_none());
    }

    #[test]
    fn lossy_bytes_repair_invalid_utf8() {
        let doc = render_html_bytes(b"<b>ok\xff</b>", &HtmlOptions::default()).unwrap();
        assert_eq!(doc.text(), "ok\u{FFFD}");
    }

    #[test]
    fn apply_font_none_is_identity() {
        let doc = render_html(Some("a <b>b</b> <i>c</i>")).unwrap();
        assert_eq!(apply_font(&doc, None, &fonts()), doc);
    }

    #[test]
    fn apply_font_keeps_bold() {
        let doc = render_html(Some("plain <b>bold</b> tail")).unwrap();
        let target = FontDescriptor::new("Georgia", 18.0);
        let out = apply_font(&doc, Some(&target), &fonts());

        assert_eq!(out.text(), doc.text());
        let ranges: Vec<_> = out.runs().iter().map(|r| r.range.clone()).collect();
        let original: Vec<_> = doc.runs().iter().map(|r| r.range.clone()).collect();
        assert_eq!(ranges, original);

        let bold = out.attributes_at(6).unwrap().font().unwrap();
        assert_eq!(bold, &target.clone().with_traits(FontTraits::BOLD));
        let plain = out.attributes_at(0).unwrap().font().unwrap();
        assert_eq!(plain, &target);
    }

    #[test]
    fn apply_font_keeps_boundaries_of_merged_families() {
        let doc = render_html(Some("a<font face=Georgia>b</font>")).unwrap();
        let target = FontDescriptor::new("Helvetica", 14.0);
        let out = apply_font(&doc, Some(&target), &fonts());

        let before: Vec<_> = doc.runs().iter().map(|r| r.range.clone()).collect();
        let after: Vec<_> = out.runs().iter().map(|r| r.range.clone()).collect();
        assert_eq!(before, vec![0..1, 1..2]);
        assert_eq!(after, before);
        assert_eq!(out.runs()[0].attributes, out.runs()[1].attributes);
        assert_eq!(out.attributes_at(1).unwrap().font(), Some(&target));
    }

    #[test]
    fn apply_font_leaves_unrepresentable_runs() {
        let doc = render_html(Some("x<code>mono</code>")).unwrap();
        let target = FontDescriptor::new("Georgia", 18.0);
        let out = apply_font(&doc, Some(&target), &fonts());
        // Georgia has no monospace face.
        let mono = out.attributes_at(1).unwrap().font().unwrap();
        assert_eq!(mono.family, "Courier");
        assert_eq!(out.attributes_at(0).unwrap().font().unwrap(), &target);
    }

    #[test]
    fn apply_font_leaves_non_font_values() {
        let mut builder = StyledDocument::builder();
        builder.push(
            "odd",
            Attributes::new().with(AttributeKey::Font, AttributeValue::Number(3)),
        );
        builder.push("none", Attributes::new());
        let doc = builder.build();
        let target = FontDescriptor::new("Times", 10.0);
        assert_eq!(apply_font(&doc, Some(&target), &fonts()), doc);
    }

    #[test]
    fn apply_font_preserves_other_attributes() {
        let doc = render_html(Some("<a href=\"u\">link</a>")).unwrap();
        let target = FontDescriptor::new("Helvetica", 9.0);
        let out = apply_font(&doc, Some(&target), &fonts());
        let attrs = out.attributes_at(0).unwrap();
        assert_eq!(attrs.get(AttributeKey::Link), Some(&AttributeValue::Link("u".into())));
        assert_eq!(attrs.font(), Some(&target));
    }
}
