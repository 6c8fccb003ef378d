//! Styled documents: text plus gap-free attribute runs.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::font::FontDescriptor;

/// Attribute names a run can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    Link,
    Underline,
    Strikethrough,
    /// Positive for superscript, negative for subscript.
    Superscript,
}

/// Attribute values.
///
/// Values are not tied to their key, so a document can hold (for example)
/// a [`AttributeValue::Color`] under [`AttributeKey::Font`]. Consumers
/// must check the variant rather than assume it.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Font(FontDescriptor),
    Color(Color),
    Link(String),
    Flag(bool),
    Number(i32),
}

impl AttributeValue {
    #[must_use]
    pub const fn as_font(&self) -> Option<&FontDescriptor> {
        match self {
            Self::Font(font) => Some(font),
            _ => None,
        }
    }
}

/// The attribute set of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    values: BTreeMap<AttributeKey, AttributeValue>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: AttributeValue) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: AttributeKey, value: AttributeValue) -> Option<AttributeValue> {
        self.values.insert(key, value)
    }

    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.values.remove(&key)
    }

    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.values.get(&key)
    }

    /// The font, if the `Font` key holds a font value.
    #[must_use]
    pub fn font(&self) -> Option<&FontDescriptor> {
        self.get(AttributeKey::Font).and_then(AttributeValue::as_font)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

/// A byte range of the document text and the attributes applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun {
    pub range: Range<usize>,
    pub attributes: Attributes,
}

/// Text with attribute runs.
///
/// Runs are sorted, non-empty, and cover the text with no gaps or
/// overlaps. Runs appended with [`StyledDocumentBuilder::push`] merge
/// with an equal neighbour; [`StyledDocumentBuilder::push_run`] keeps
/// the boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledDocument {
    text: String,
    runs: Vec<StyledRun>,
}

impl StyledDocument {
    /// Wrap plain text as a single run with no attributes.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let mut builder = StyledDocumentBuilder::new();
        builder.push(&text, Attributes::new());
        builder.build()
    }

    #[must_use]
    pub fn builder() -> StyledDocumentBuilder {
        StyledDocumentBuilder::new()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Iterate over `(text, attributes)` segments.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.runs
            .iter()
            .map(|run| (&self.text[run.range.clone()], &run.attributes))
    }

    /// Attributes at byte `index`.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        let pos = self
            .runs
            .partition_point(|run| run.range.end <= index);
        self.runs
            .get(pos)
            .filter(|run| run.range.contains(&index))
            .map(|run| &run.attributes)
    }

    /// Maximal spans over which `key` has one value.
    ///
    /// Spans where the key is absent yield `None`. Spans are in order and
    /// cover the whole text.
    #[must_use]
    pub fn enumerate_attribute(
        &self,
        key: AttributeKey,
    ) -> Vec<(Range<usize>, Option<&AttributeValue>)> {
        let mut spans: Vec<(Range<usize>, Option<&AttributeValue>)> = Vec::new();
        for run in &self.runs {
            let value = run.attributes.get(key);
            match spans.last_mut() {
                Some((range, last)) if *last == value => range.end = run.range.end,
                _ => spans.push((run.range.clone(), value)),
            }
        }
        spans
    }

    /// Set `key` to `value` over the byte `range`, splitting runs as needed.
    ///
    /// Fails with [`Error::OutOfBounds`] past the end of the text and with
    /// [`Error::InvalidRange`] for reversed ranges or ranges that split a
    /// UTF-8 sequence.
    pub fn add_attribute(
        &mut self,
        range: Range<usize>,
        key: AttributeKey,
        value: AttributeValue,
    ) -> Result<()> {
        let as_signed = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);
        if range.start > self.text.len() || range.end > self.text.len() {
            return Err(Error::OutOfBounds {
                lo: as_signed(range.start),
                hi: as_signed(range.end),
                len: self.text.len(),
            });
        }
        if range.start > range.end
            || !self.text.is_char_boundary(range.start)
            || !self.text.is_char_boundary(range.end)
        {
            return Err(Error::InvalidRange {
                lo: as_signed(range.start),
                hi: as_signed(range.end),
            });
        }
        if range.is_empty() {
            return Ok(());
        }

        let mut out = Vec::with_capacity(self.runs.len() + 2);
        for run in self.runs.drain(..) {
            if run.range.end <= range.start || run.range.start >= range.end {
                out.push(run);
                continue;
            }
            if run.range.start < range.start {
                out.push(StyledRun {
                    range: run.range.start..range.start,
                    attributes: run.attributes.clone(),
                });
            }
            let mut inner = run.attributes.clone();
            inner.insert(key, value.clone());
            out.push(StyledRun {
                range: run.range.start.max(range.start)..run.range.end.min(range.end),
                attributes: inner,
            });
            if run.range.end > range.end {
                out.push(StyledRun {
                    range: range.end..run.range.end,
                    attributes: run.attributes,
                });
            }
        }
        self.runs = coalesce(out);
        Ok(())
    }
}

fn coalesce(runs: Vec<StyledRun>) -> Vec<StyledRun> {
    let mut out: Vec<StyledRun> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.range.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.attributes == run.attributes => last.range.end = run.range.end,
            _ => out.push(run),
        }
    }
    out
}

/// Incremental construction of a [`StyledDocument`].
#[derive(Debug, Default)]
pub struct StyledDocumentBuilder {
    text: String,
    runs: Vec<StyledRun>,
}

impl StyledDocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` styled with `attributes`.
    pub fn push(&mut self, text: &str, attributes: Attributes) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();
        match self.runs.last_mut() {
            Some(last) if last.attributes == attributes => last.range.end = end,
            _ => self.runs.push(StyledRun {
                range: start..end,
                attributes,
            }),
        }
        self
    }

    /// Append `text` as its own run, even when its attributes equal the
    /// previous run's.
    pub fn push_run(&mut self, text: &str, attributes: Attributes) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let start = self.text.len();
        self.text.push_str(text);
        self.runs.push(StyledRun {
            range: start..self.text.len(),
            attributes,
        });
        self
    }

    /// Text appended so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Remove trailing characters matching `pred`, shrinking runs.
    pub fn trim_end_matches(&mut self, pred: impl Fn(char) -> bool) -> &mut Self {
        let new_len = self.text.trim_end_matches(&pred).len();
        self.text.truncate(new_len);
        while let Some(last) = self.runs.last_mut() {
            if last.range.start >= new_len {
                self.runs.pop();
            } else {
                last.range.end = last.range.end.min(new_len);
                break;
            }
        }
        self
    }

    #[must_use]
    pub fn build(self) -> StyledDocument {
        StyledDocument {
            text: self.text,
            runs: self.runs,
        }
    }
}
