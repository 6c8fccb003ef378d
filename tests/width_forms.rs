//! Full-width / half-width conversion checked against display widths.

use proptest::prelude::*;
use string_extras::StrExt;
use string_extras::unicode::{to_full_width, to_half_width};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Printable ASCII including the space.
fn ascii_string() -> impl Strategy<Value = String> {
    "[\\x20-\\x7E]{0,80}"
}

/// Full-width katakana and CJK punctuation with half-width counterparts.
fn katakana_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'ア', 'カ', 'ガ', 'キ', 'ギ', 'ハ', 'バ', 'パ', 'ヴ', 'ン', 'ッ', 'ャ', 'ー', '。', '「',
            '」', '、', '・', 'ヲ',
        ]),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Every full-width ASCII form is two columns wide.
    #[test]
    fn full_width_ascii_is_wide(s in ascii_string()) {
        let full = to_full_width(&s);
        prop_assert_eq!(full.chars().count(), s.chars().count());
        for c in full.chars() {
            prop_assert_eq!(c.width(), Some(2), "{:?} should be wide", c);
        }
    }

    #[test]
    fn ascii_round_trips(s in ascii_string()) {
        prop_assert_eq!(to_half_width(&to_full_width(&s)), s);
    }

    /// Half-width katakana occupies one column per char.
    #[test]
    fn half_width_katakana_is_narrow(s in katakana_string()) {
        let half = to_half_width(&s);
        prop_assert_eq!(half.width(), half.chars().count());
    }

    #[test]
    fn katakana_round_trips(s in katakana_string()) {
        prop_assert_eq!(to_full_width(&to_half_width(&s)), s);
    }
}

#[test]
fn mixed_text() {
    assert_eq!("Tel: 03-1234".full_width(), "Ｔｅｌ：\u{3000}０３－１２３４");
    assert_eq!("ﾊﾟｿｺﾝ ｹﾞｰﾑ".full_width(), "パソコン\u{3000}ゲーム");
    assert_eq!("パソコン　ゲーム".half_width(), "ﾊﾟｿｺﾝ ｹﾞｰﾑ");
    assert_eq!("漢字 and ｶﾅ".full_width(), "漢字\u{3000}ａｎｄ\u{3000}カナ");
}

#[test]
fn lone_sound_marks_become_spacing_marks() {
    assert_eq!(to_full_width("ﾞa"), "\u{309B}ａ");
    assert_eq!(to_full_width("aﾟ"), "ａ\u{309C}");
    assert_eq!(to_half_width("\u{309B}"), "ﾞ");
}
