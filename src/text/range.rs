//! Grapheme offset ranges.
//!
//! The five std range shapes are folded into one [`OffsetRange`] and
//! resolved once into a [`ResolvedRange`] before any indexing happens.

use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{Error, Result};

/// A range of grapheme offsets in one of the five supported shapes.
///
/// Offsets are signed so that negative starts can be expressed and
/// rejected rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetRange {
    /// `lo..=hi`
    Closed { lo: isize, hi: isize },
    /// `lo..hi`
    HalfOpen { lo: isize, hi: isize },
    /// `..hi`
    UpTo { hi: isize },
    /// `..=hi`
    Through { hi: isize },
    /// `lo..`
    From { lo: isize },
}

/// Canonical `(lo, hi, inclusive)` form of an [`OffsetRange`].
///
/// `hi` is `None` only for [`OffsetRange::From`] until a length is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedRange {
    pub lo: isize,
    pub hi: Option<isize>,
    pub inclusive: bool,
}

impl OffsetRange {
    /// Fold the shape into its canonical triple.
    #[must_use]
    pub const fn canonical(self) -> ResolvedRange {
        match self {
            Self::Closed { lo, hi } => ResolvedRange {
                lo,
                hi: Some(hi),
                inclusive: true,
            },
            Self::HalfOpen { lo, hi } => ResolvedRange {
                lo,
                hi: Some(hi),
                inclusive: false,
            },
            Self::UpTo { hi } => ResolvedRange {
                lo: 0,
                hi: Some(hi),
                inclusive: false,
            },
            Self::Through { hi } => ResolvedRange {
                lo: 0,
                hi: Some(hi),
                inclusive: true,
            },
            Self::From { lo } => ResolvedRange {
                lo,
                hi: None,
                inclusive: false,
            },
        }
    }

    /// Resolve against a sequence of `len` graphemes into `start..end`.
    ///
    /// Every shape goes through the same checks: the start must lie in
    /// `0..=len`, the exclusive end must not exceed `len`, and the start
    /// must not pass the end.
    pub fn resolve(self, len: usize) -> Result<Range<usize>> {
        let ResolvedRange { lo, hi, inclusive } = self.canonical();
        let len_signed = isize::try_from(len).unwrap_or(isize::MAX);
        let end = match hi {
            Some(hi) if inclusive => hi.saturating_add(1),
            Some(hi) => hi,
            None => len_signed,
        };
        let reported_hi = hi.unwrap_or(len_signed);

        if lo < 0 || lo > len_signed || end > len_signed {
            return Err(Error::OutOfBounds {
                lo,
                hi: reported_hi,
                len,
            });
        }
        if lo > end {
            return Err(Error::InvalidRange {
                lo,
                hi: reported_hi,
            });
        }
        Ok(lo as usize..end as usize)
    }
}

impl From<RangeInclusive<isize>> for OffsetRange {
    fn from(r: RangeInclusive<isize>) -> Self {
        Self::Closed {
            lo: *r.start(),
            hi: *r.end(),
        }
    }
}

impl From<Range<isize>> for OffsetRange {
    fn from(r: Range<isize>) -> Self {
        Self::HalfOpen {
            lo: r.start,
            hi: r.end,
        }
    }
}

impl From<RangeTo<isize>> for OffsetRange {
    fn from(r: RangeTo<isize>) -> Self {
        Self::UpTo { hi: r.end }
    }
}

impl From<RangeToInclusive<isize>> for OffsetRange {
    fn from(r: RangeToInclusive<isize>) -> Self {
        Self::Through { hi: r.end }
    }
}

impl From<RangeFrom<isize>> for OffsetRange {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::From { lo: r.start }
    }
}
