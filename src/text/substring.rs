//! Substring access by grapheme offset.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::text::range::OffsetRange;
use crate::unicode::grapheme_count;

/// Byte span covered by a grapheme range.
///
/// Walks the string once: the clusters up to the range end are visited,
/// nothing after it.
pub fn grapheme_byte_range(text: &str, range: impl Into<OffsetRange>) -> Result<Range<usize>> {
    let range = range.into();
    if text.is_ascii() && !text.contains('\r') {
        // One byte per grapheme.
        return range.resolve(text.len());
    }

    let clusters = range.resolve(grapheme_count(text))?;
    let mut start = text.len();
    let mut end = text.len();
    for (index, (byte_offset, _)) in text.grapheme_indices(true).enumerate() {
        if index == clusters.start {
            start = byte_offset;
        }
        if index == clusters.end {
            end = byte_offset;
            break;
        }
    }
    Ok(start..end)
}

/// Substring covering the grapheme range `range` of `text`.
///
/// # Examples
///
/// ```
/// use string_extras::substring;
///
/// let seq = "he\u{301}llo";
/// assert_eq!(substring(seq, 1..=3).unwrap(), "e\u{301}ll");
/// assert_eq!(substring(seq, 1..3).unwrap(), "e\u{301}l");
/// assert!(substring(seq, 2..9).is_err());
/// ```
pub fn substring(text: &str, range: impl Into<OffsetRange>) -> Result<&str> {
    let bytes = grapheme_byte_range(text, range)?;
    Ok(&text[bytes])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn accented_sequence() {
        let seq = "héllo";
        assert_eq!(substring(seq, 1..=3).unwrap(), "éll");
        assert_eq!(substring(seq, 1..3).unwrap(), "él");
        assert_eq!(substring(seq, ..2).unwrap(), "hé");
        assert_eq!(substring(seq, ..=1).unwrap(), "hé");
        assert_eq!(substring(seq, 3..).unwrap(), "lo");
    }

    #[test]
    fn combining_marks_count_as_one() {
        let seq = "he\u{0301}llo";
        assert_eq!(substring(seq, 1..2).unwrap(), "e\u{0301}");
        assert_eq!(substring(seq, 2..).unwrap(), "llo");
    }

    #[test]
    fn emoji_clusters() {
        let seq = "a👨‍👩‍👧b🇯🇵c";
        assert_eq!(substring(seq, 1..=1).unwrap(), "👨‍👩‍👧");
        assert_eq!(substring(seq, 3..4).unwrap(), "🇯🇵");
        assert_eq!(substring(seq, 4..).unwrap(), "c");
    }

    #[test]
    fn crlf_is_one_grapheme() {
        let seq = "a\r\nb";
        assert_eq!(substring(seq, 1..2).unwrap(), "\r\n");
        assert_eq!(substring(seq, 2..).unwrap(), "b");
    }

    #[test]
    fn full_closed_range_round_trips() {
        for seq in ["hello", "héllo", "日本語", "x"] {
            let last = grapheme_count(seq) as isize - 1;
            assert_eq!(substring(seq, 0..=last).unwrap(), seq);
        }
    }

    #[test]
    fn empty_spans() {
        let seq = "héllo";
        assert_eq!(substring(seq, 2..2).unwrap(), "");
        assert_eq!(substring(seq, ..0).unwrap(), "");
        assert_eq!(substring(seq, 5..).unwrap(), "");
        assert_eq!(substring("", ..0).unwrap(), "");
        assert_eq!(substring("", 0..).unwrap(), "");
    }

    #[test]
    fn out_of_bounds_for_every_shape() {
        let seq = "héllo";
        let ranges: [OffsetRange; 5] = [
            (0..=5).into(),
            (0..6).into(),
            (..6).into(),
            (..=5).into(),
            (6..).into(),
        ];
        for range in ranges {
            assert!(
                matches!(substring(seq, range), Err(Error::OutOfBounds { .. })),
                "{range:?} should be out of bounds"
            );
        }
        assert!(matches!(
            substring(seq, -1..2),
            Err(Error::OutOfBounds { lo: -1, .. })
        ));
        assert!(matches!(
            substring(seq, -1..=2),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(substring(seq, -1..), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn ascii_fast_path_matches_general_path() {
        let seq = "abc\r\ndef";
        assert_eq!(grapheme_byte_range(seq, 3..4).unwrap(), 3..5);
        assert_eq!(grapheme_byte_range("abcdef", 1..=2).unwrap(), 1..3);
    }
}
