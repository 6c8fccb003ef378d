//! Full-width / half-width character form conversion.
//!
//! Covers the forms that round-trip through the Halfwidth and Fullwidth
//! Forms block (U+FF00-U+FFEF): ASCII, the space, the yen/cent/pound
//! signs, CJK punctuation, and katakana including the voiced and
//! semi-voiced sound marks. Hangul jamo and anything without a
//! counterpart pass through unchanged.

use unicode_normalization::char::{compose, decompose_canonical};

const FULLWIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

const HALFWIDTH_VOICED: char = '\u{FF9E}';
const HALFWIDTH_SEMI_VOICED: char = '\u{FF9F}';
const COMBINING_VOICED: char = '\u{3099}';
const COMBINING_SEMI_VOICED: char = '\u{309A}';
const SPACING_VOICED: char = '\u{309B}';
const SPACING_SEMI_VOICED: char = '\u{309C}';

/// Full-width counterparts of U+FF61..=U+FF9D, indexed by `c - 0xFF61`.
const HALFWIDTH_KANA: [char; 61] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン',
];

/// Symbol pairs outside the ASCII offset range: (half-width, full-width).
const SYMBOL_PAIRS: [(char, char); 6] = [
    ('\u{A2}', '\u{FFE0}'),
    ('\u{A3}', '\u{FFE1}'),
    ('\u{AC}', '\u{FFE2}'),
    ('\u{AF}', '\u{FFE3}'),
    ('\u{A5}', '\u{FFE5}'),
    ('\u{20A9}', '\u{FFE6}'),
];

/// Convert half-width characters in `text` to their full-width forms.
///
/// Half-width sound marks fold into the preceding kana when a composed
/// form exists (`ｶﾞ` becomes `ガ`), otherwise they become spacing marks.
#[must_use]
pub fn to_full_width(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut last: Option<char> = None;

    for c in text.chars() {
        let mapped = match c {
            HALFWIDTH_VOICED | HALFWIDTH_SEMI_VOICED => {
                let (combining, spacing) = if c == HALFWIDTH_VOICED {
                    (COMBINING_VOICED, SPACING_VOICED)
                } else {
                    (COMBINING_SEMI_VOICED, SPACING_SEMI_VOICED)
                };
                if let Some(composed) = last.and_then(|prev| compose(prev, combining)) {
                    out.pop();
                    composed
                } else {
                    spacing
                }
            }
            _ => full_width_char(c),
        };
        out.push(mapped);
        last = Some(mapped);
    }
    out
}

/// Convert full-width characters in `text` to their half-width forms.
///
/// Voiced kana split into base and sound mark (`ガ` becomes `ｶﾞ`).
#[must_use]
pub fn to_half_width(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(half) = half_width_char(c) {
            out.push(half);
            continue;
        }
        if ('\u{30A0}'..='\u{30FF}').contains(&c) {
            if let Some((base, mark)) = split_voiced(c) {
                out.push(base);
                out.push(mark);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn full_width_char(c: char) -> char {
    match c {
        ' ' => IDEOGRAPHIC_SPACE,
        '!'..='~' => char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c),
        '\u{FF61}'..='\u{FF9D}' => HALFWIDTH_KANA[(c as u32 - 0xFF61) as usize],
        _ => SYMBOL_PAIRS
            .iter()
            .find(|(half, _)| *half == c)
            .map_or(c, |(_, full)| *full),
    }
}

fn half_width_char(c: char) -> Option<char> {
    match c {
        IDEOGRAPHIC_SPACE => Some(' '),
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULLWIDTH_OFFSET),
        COMBINING_VOICED | SPACING_VOICED => Some(HALFWIDTH_VOICED),
        COMBINING_SEMI_VOICED | SPACING_SEMI_VOICED => Some(HALFWIDTH_SEMI_VOICED),
        _ => {
            if let Some(index) = HALFWIDTH_KANA.iter().position(|&k| k == c) {
                return char::from_u32(0xFF61 + index as u32);
            }
            SYMBOL_PAIRS
                .iter()
                .find(|(_, full)| *full == c)
                .map(|(half, _)| *half)
        }
    }
}

/// Split a precomposed voiced kana into half-width base and sound mark.
fn split_voiced(c: char) -> Option<(char, char)> {
    let mut parts = Vec::with_capacity(2);
    decompose_canonical(c, |d| parts.push(d));
    match parts.as_slice() {
        [base, mark] => {
            let base = half_width_char(*base)?;
            let mark = half_width_char(*mark)?;
            Some((base, mark))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let full = to_full_width("Hello, World! 123");
        assert_eq!(full, "Ｈｅｌｌｏ，\u{3000}Ｗｏｒｌｄ！\u{3000}１２３");
        assert_eq!(to_half_width(&full), "Hello, World! 123");
    }

    #[test]
    fn katakana_to_half_width() {
        assert_eq!(to_half_width("カタカナ"), "ｶﾀｶﾅ");
        assert_eq!(to_half_width("ガギグ"), "ｶﾞｷﾞｸﾞ");
        assert_eq!(to_half_width("パピプ"), "ﾊﾟﾋﾟﾌﾟ");
        assert_eq!(to_half_width("ヴ"), "ｳﾞ");
        assert_eq!(to_half_width("「ー」。"), "｢ｰ｣｡");
    }

    #[test]
    fn katakana_to_full_width() {
        assert_eq!(to_full_width("ｶﾀｶﾅ"), "カタカナ");
        assert_eq!(to_full_width("ｶﾞｷﾞｸﾞ"), "ガギグ");
        assert_eq!(to_full_width("ﾊﾟﾋﾟﾌﾟ"), "パピプ");
        assert_eq!(to_full_width("ｳﾞ"), "ヴ");
    }

    #[test]
    fn lone_sound_mark_becomes_spacing() {
        assert_eq!(to_full_width("ﾞ"), "\u{309B}");
        assert_eq!(to_full_width("ｱﾟ"), "ア\u{309C}");
    }

    #[test]
    fn hiragana_and_kanji_untouched() {
        assert_eq!(to_half_width("ひらがな漢字"), "ひらがな漢字");
        assert_eq!(to_full_width("ひらがな漢字"), "ひらがな漢字");
    }

    #[test]
    fn kana_without_half_width_form_untouched() {
        assert_eq!(to_half_width("ヶヮ"), "ヶヮ");
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(to_full_width("¥100"), "￥１００");
        assert_eq!(to_half_width("￥１００"), "¥100");
    }
}
