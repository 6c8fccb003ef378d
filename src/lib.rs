//! `string_extras` - convenience extensions for Rust text
//!
//! Grapheme-aware substring access over every std range shape, HTML to
//! styled text with trait-preserving font rewriting, and a handful of
//! smaller helpers: localization tables, URL parsing and escaping,
//! full-width/half-width forms, case-insensitive comparison and
//! whole-string validation.
//!
//! ```
//! use string_extras::StrExt;
//!
//! assert_eq!("he\u{301}llo".substring(1..=3).unwrap(), "e\u{301}ll");
//! assert_eq!("<p>Hi <b>there</b></p>".html_to_plain(), "Hi there");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Font sizes and offsets are small
#![allow(clippy::cast_sign_loss)] // Offsets are checked before casting
#![allow(clippy::cast_precision_loss)] // Intentional for font size math
#![allow(clippy::cast_possible_wrap)] // Lengths fit in isize
#![allow(clippy::module_name_repetitions)] // Allow html::HtmlOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::must_use_candidate)] // Not every accessor needs the attribute
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod error;
pub mod event;
pub mod ext;
pub mod font;
pub mod html;
pub mod localize;
pub mod text;
pub mod unicode;
pub mod url;
pub mod validate;

// Re-export core types at crate root
pub use color::Color;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use ext::StrExt;
pub use localize::Localizer;
pub use text::{OffsetRange, substring};
pub use validate::InputValidation;

// Re-export styled text types
pub use font::{FontCollection, FontDescriptor, FontSystem, FontTraits};
pub use html::{
    HtmlOptions, StyledDocument, apply_font, apply_html, html_to_plain, render_html,
    render_html_bytes,
};
