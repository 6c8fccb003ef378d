//! Grapheme cluster iteration and offset mapping.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over grapheme clusters in a string.
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterate over extended grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Number of extended grapheme clusters in `s`.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if s.is_ascii() {
        // ASCII has no multi-char clusters except CRLF.
        return s.len() - s.matches("\r\n").count();
    }
    s.graphemes(true).count()
}

/// Byte offset of the grapheme at index `n`.
///
/// `n == grapheme_count(s)` maps to `s.len()`. Returns `None` past that.
#[must_use]
pub fn grapheme_byte_offset(s: &str, n: usize) -> Option<usize> {
    let mut seen = 0usize;
    for (byte_offset, _) in s.grapheme_indices(true) {
        if seen == n {
            return Some(byte_offset);
        }
        seen += 1;
    }
    (seen == n).then_some(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_emoji() {
        // Family emoji (ZWJ sequence)
        assert_eq!(graphemes("👨‍👩‍👧").count(), 1);
    }

    #[test]
    fn test_graphemes_combining() {
        // e + combining acute accent
        assert_eq!(graphemes("e\u{0301}").count(), 1);
    }

    #[test]
    fn test_graphemes_reverse() {
        let g: Vec<_> = graphemes("ab🇺🇸").rev().collect();
        assert_eq!(g, vec!["🇺🇸", "b", "a"]);
    }

    #[test]
    fn test_grapheme_count() {
        assert_eq!(grapheme_count(""), 0);
        assert_eq!(grapheme_count("hello"), 5);
        assert_eq!(grapheme_count("a\r\nb"), 3);
        assert_eq!(grapheme_count("he\u{0301}llo"), 5);
        assert_eq!(grapheme_count("👨‍👩‍👧x"), 2);
    }

    #[test]
    fn test_grapheme_byte_offset() {
        let s = "he\u{0301}llo";
        assert_eq!(grapheme_byte_offset(s, 0), Some(0));
        assert_eq!(grapheme_byte_offset(s, 1), Some(1));
        assert_eq!(grapheme_byte_offset(s, 2), Some(4));
        assert_eq!(grapheme_byte_offset(s, 5), Some(s.len()));
        assert_eq!(grapheme_byte_offset(s, 6), None);
        assert_eq!(grapheme_byte_offset("", 0), Some(0));
    }
}
