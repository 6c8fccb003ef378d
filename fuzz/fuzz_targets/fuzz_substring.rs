//! Fuzz target for grapheme-indexed substring access.
//!
//! Every range either resolves to a slice on cluster boundaries or is
//! rejected; nothing panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use string_extras::{OffsetRange, substring};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    lo: i16,
    hi: i16,
    shape: u8,
}

fuzz_target!(|input: Input<'_>| {
    let (lo, hi) = (isize::from(input.lo), isize::from(input.hi));
    let range = match input.shape % 5 {
        0 => OffsetRange::Closed { lo, hi },
        1 => OffsetRange::HalfOpen { lo, hi },
        2 => OffsetRange::UpTo { hi },
        3 => OffsetRange::Through { hi },
        _ => OffsetRange::From { lo },
    };
    if let Ok(slice) = substring(input.text, range) {
        assert!(input.text.contains(slice));
    }
});
