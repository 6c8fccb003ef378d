//! Method-call surface for the crate's text operations.

use std::cmp::Ordering;

use crate::error::Result;
use crate::html::{StyledDocument, html_to_plain, render_html};
use crate::localize::Localizer;
use crate::text::{OffsetRange, substring};
use crate::unicode::{compare_case_insensitive, eq_case_insensitive, to_full_width, to_half_width};
use crate::url::{Url, parse_url, url_escaped, utf8_encoded};
use crate::validate::InputValidation;

/// Extension methods on `str`.
///
/// Every method forwards to the free function of the same concern, so
/// `"abc".substring(1..)` and `substring("abc", 1..)` are interchangeable.
///
/// ```
/// use string_extras::{InputValidation, StrExt};
///
/// assert_eq!("héllo".substring(1..=3).unwrap(), "éll");
/// assert_eq!("ABC".full_width(), "ＡＢＣ");
/// assert!("Straße".eq_case_insensitive("STRAßE"));
/// assert!("12345".validate(&InputValidation::Digits).unwrap());
/// ```
pub trait StrExt {
    /// Translation from the localizer's default table, or `self`.
    fn localized(&self, localizer: &Localizer) -> String;

    /// Translation from `table`, falling back to `value` and then `self`.
    fn localized_with(&self, localizer: &Localizer, table: Option<&str>, value: &str) -> String;

    /// `self` parsed as an absolute URL.
    fn url(&self) -> Option<Url>;

    /// Substring by grapheme offsets.
    fn substring(&self, range: impl Into<OffsetRange>) -> Result<&str>;

    fn half_width(&self) -> String;

    fn full_width(&self) -> String;

    fn compare_case_insensitive(&self, other: &str) -> Ordering;

    fn eq_case_insensitive(&self, other: &str) -> bool;

    /// `self` rendered as HTML with default options.
    fn html_to_styled(&self) -> Option<StyledDocument>;

    /// Visible text of `self` rendered as HTML.
    fn html_to_plain(&self) -> String;

    fn url_escaped(&self) -> String;

    fn utf8_encoded(&self) -> Vec<u8>;

    /// `self` as a styled document with no attributes.
    fn to_styled(&self) -> StyledDocument;

    fn validate(&self, validation: &InputValidation) -> Result<bool>;
}

impl StrExt for str {
    fn localized(&self, localizer: &Localizer) -> String {
        localizer.localize(self)
    }

    fn localized_with(&self, localizer: &Localizer, table: Option<&str>, value: &str) -> String {
        localizer.localize_with(self, table, value)
    }

    fn url(&self) -> Option<Url> {
        parse_url(self)
    }

    fn substring(&self, range: impl Into<OffsetRange>) -> Result<&str> {
        substring(self, range)
    }

    fn half_width(&self) -> String {
        to_half_width(self)
    }

    fn full_width(&self) -> String {
        to_full_width(self)
    }

    fn compare_case_insensitive(&self, other: &str) -> Ordering {
        compare_case_insensitive(self, other)
    }

    fn eq_case_insensitive(&self, other: &str) -> bool {
        eq_case_insensitive(self, other)
    }

    fn html_to_styled(&self) -> Option<StyledDocument> {
        render_html(Some(self))
    }

    fn html_to_plain(&self) -> String {
        html_to_plain(self)
    }

    fn url_escaped(&self) -> String {
        url_escaped(self)
    }

    fn utf8_encoded(&self) -> Vec<u8> {
        utf8_encoded(self)
    }

    fn to_styled(&self) -> StyledDocument {
        StyledDocument::plain(self)
    }

    fn validate(&self, validation: &InputValidation) -> Result<bool> {
        validation.matches(self)
    }
}
