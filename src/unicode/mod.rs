//! Unicode utilities: grapheme segmentation, normalization, comparison and
//! width-form conversion.

mod form;
mod grapheme;
mod normalize;

pub use form::{to_full_width, to_half_width};
pub use grapheme::{
    GraphemeIterator, grapheme_byte_offset, grapheme_count, grapheme_indices, graphemes,
};
pub use normalize::{
    compare_case_insensitive, compare_normalized, eq_case_insensitive, normalize_nfc,
    normalize_nfd,
};
