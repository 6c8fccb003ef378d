//! Grapheme-indexed access to text.
//!
//! Offsets count extended grapheme clusters, so `"e\u{301}"` is one
//! position and a flag emoji is one position. Any of the five std range
//! shapes over `isize` can be used:
//!
//! ```
//! use string_extras::substring;
//!
//! let word = "héllo";
//! assert_eq!(substring(word, 1..=3).unwrap(), "éll");
//! assert_eq!(substring(word, 1..3).unwrap(), "él");
//! assert_eq!(substring(word, ..2).unwrap(), "hé");
//! assert_eq!(substring(word, ..=1).unwrap(), "hé");
//! assert_eq!(substring(word, 3..).unwrap(), "lo");
//! assert!(substring(word, 2..9).is_err());
//! ```

mod range;
mod substring;

pub use range::{OffsetRange, ResolvedRange};
pub use substring::{grapheme_byte_range, substring};
