//! Fuzz target for HTML rendering.
//!
//! Arbitrary bytes must render or fail cleanly, and the font rewrite must
//! never change the text or the run boundaries.

#![no_main]

use libfuzzer_sys::fuzz_target;
use string_extras::html::{Decoding, HtmlOptions, apply_font, render_html_bytes};
use string_extras::{FontCollection, FontDescriptor};

fuzz_target!(|data: &[u8]| {
    let strict = HtmlOptions {
        decoding: Decoding::Strict,
        ..HtmlOptions::default()
    };
    let _ = render_html_bytes(data, &strict);

    let Some(doc) = render_html_bytes(data, &HtmlOptions::default()) else {
        return;
    };
    let fonts = FontCollection::with_standard_families();
    let target = FontDescriptor::new("Helvetica", 14.0);
    let applied = apply_font(&doc, Some(&target), &fonts);
    assert_eq!(applied.text(), doc.text());
    assert_eq!(applied.runs().len(), doc.runs().len());
});
