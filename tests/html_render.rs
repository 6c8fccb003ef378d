//! End-to-end tests for HTML rendering and font application.
//!
//! Diagnostics from the crate's log callback are forwarded to `tracing`
//! so failures show up in test output.

use std::sync::{Arc, Mutex, Once};

use insta::{assert_debug_snapshot, assert_snapshot};
use string_extras::html::{AttributeKey, AttributeValue, Decoding};
use string_extras::{
    FontCollection, FontDescriptor, FontTraits, HtmlOptions, LogLevel, StyledDocument,
    apply_font, apply_html, html_to_plain, render_html, render_html_bytes, set_log_callback,
};
use tracing::{Level, debug, error, info, warn};

type Records = Arc<Mutex<Vec<(LogLevel, String)>>>;

fn init_logging() -> Records {
    static INIT: Once = Once::new();
    static RECORDS: Mutex<Option<Records>> = Mutex::new(None);

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .try_init();

        let records: Records = Arc::default();
        let sink = Arc::clone(&records);
        set_log_callback(move |level, message| {
            match level {
                LogLevel::Debug => debug!("{message}"),
                LogLevel::Info => info!("{message}"),
                LogLevel::Warn => warn!("{message}"),
                LogLevel::Error => error!("{message}"),
            }
            sink.lock().unwrap().push((level, message.to_string()));
        });
        *RECORDS.lock().unwrap() = Some(records);
    });

    RECORDS.lock().unwrap().clone().unwrap()
}

/// One line per run: the run's text and the styling it carries.
fn summarize(doc: &StyledDocument) -> String {
    doc.segments()
        .map(|(text, attrs)| {
            let mut flags = Vec::new();
            if let Some(font) = attrs.font() {
                if font.is_bold() {
                    flags.push("bold".to_string());
                }
                if font.is_italic() {
                    flags.push("italic".to_string());
                }
            }
            if let Some(AttributeValue::Link(url)) = attrs.get(AttributeKey::Link) {
                flags.push(format!("link={url}"));
            }
            if attrs.get(AttributeKey::Underline).is_some() {
                flags.push("underline".to_string());
            }
            if flags.is_empty() {
                flags.push("regular".to_string());
            }
            format!("{text:?} {}", flags.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn plain_text_of_a_document() {
    let text = html_to_plain(
        "<h1>Title</h1><p>First <b>para</b>.</p><ul><li>one<li>two</ul><p>Done &amp; dusted</p>",
    );
    assert_debug_snapshot!(text, @r#""Title\nFirst para.\n•\tone\n•\ttwo\nDone & dusted""#);
}

#[test]
fn runs_of_nested_emphasis() {
    let doc =
        render_html(Some("plain <b>bold <i>both</i></b> <a href=\"x\">link</a>")).unwrap();
    assert_snapshot!(summarize(&doc), @r#"
    "plain " regular
    "bold " bold
    "both" bold italic
    " " regular
    "link" link=x underline
    "#);
}

#[test]
fn applied_font_keeps_traits_and_boundaries() {
    let fonts = FontCollection::with_standard_families();
    let target = FontDescriptor::new("Helvetica", 15.0);
    let markup = "plain <b>bold <i>both</i></b> <i>slanted</i>";

    let original = render_html(Some(markup)).unwrap();
    let applied = apply_html(Some(markup), Some(&target), &fonts).unwrap();

    assert_eq!(applied.text(), original.text());
    assert_eq!(summarize(&applied), summarize(&original));
    for (text, attrs) in applied.segments() {
        let font = attrs.font().unwrap();
        assert_eq!(font.family, "Helvetica", "run {text:?}");
        assert_eq!(font.size, 15.0, "run {text:?}");
    }

    let both = applied.text().find("both").unwrap();
    assert_eq!(
        applied.attributes_at(both).unwrap().font().unwrap().traits,
        FontTraits::BOLD | FontTraits::ITALIC
    );
}

#[test]
fn missing_faces_keep_the_original_font() {
    let records = init_logging();
    let fonts = FontCollection::with_standard_families();
    let target = FontDescriptor::new("Georgia", 11.0);

    let doc = apply_html(Some("say <code>mono</code>"), Some(&target), &fonts).unwrap();
    let mono = doc.text().find("mono").unwrap();
    assert_eq!(doc.attributes_at(mono).unwrap().font().unwrap().family, "Courier");
    assert_eq!(doc.attributes_at(0).unwrap().font(), Some(&target));

    let records = records.lock().unwrap();
    assert!(
        records
            .iter()
            .any(|(level, message)| *level == LogLevel::Debug && message.contains("Georgia"))
    );
}

#[test]
fn failures_are_absent_and_logged() {
    let records = init_logging();

    assert!(render_html(None).is_none());
    assert!(render_html(Some("<p>broken <!-- comment")).is_none());

    let strict = HtmlOptions {
        decoding: Decoding::Strict,
        ..HtmlOptions::default()
    };
    assert!(render_html_bytes(b"caf\xe9", &strict).is_none());

    let records = records.lock().unwrap();
    let warnings: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level == LogLevel::Warn)
        .map(|(_, message)| message.as_str())
        .collect();
    assert!(warnings.iter().any(|m| m.starts_with("html render failed")));
    assert!(warnings.iter().any(|m| m.starts_with("html payload not decodable")));
}

#[test]
fn no_font_means_no_rewrite() {
    let fonts = FontCollection::with_standard_families();
    let doc = render_html(Some("<em>a</em> b <strong>c</strong>")).unwrap();
    assert_eq!(apply_font(&doc, None, &fonts), doc);
    assert_eq!(
        apply_html(Some("<em>a</em> b <strong>c</strong>"), None, &fonts),
        Some(doc)
    );
}
