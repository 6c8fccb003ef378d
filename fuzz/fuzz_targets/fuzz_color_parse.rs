//! Fuzz target for CSS color parsing.
//!
//! Tests that Color::parse handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use string_extras::Color;

fuzz_target!(|data: &str| {
    let _ = Color::parse(data);
    let _ = Color::from_hex(data);
    if !data.starts_with('#') {
        let _ = Color::from_hex(&format!("#{data}"));
    }
});
