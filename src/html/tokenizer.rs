//! HTML tokenizer.
//!
//! A forgiving scanner in the spirit of browsers: stray `<` characters are
//! text, unknown constructs are skipped, and attribute values may be quoted
//! or bare. Only input truncated inside a tag, comment or quoted value is
//! rejected.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A lexical token of HTML input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data with references still encoded.
    Text(&'a str),
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Lowercased attribute names with decoded values.
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    /// Comment, doctype or processing instruction.
    Comment,
}

impl Token<'_> {
    /// Value of attribute `name` on a start tag.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

/// Streaming tokenizer over an HTML string.
///
/// Yields `Err` at most once; iteration stops after an error.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    raw_text_end: Option<String>,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text_end: None,
            failed: false,
        }
    }

    /// Byte offset just past the last token produced.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        self.input.as_bytes().get(index).copied()
    }

    fn text(&mut self) -> Token<'a> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        // The first byte is consumed even if it is a stray '<'.
        let end = bytes[start + 1..]
            .iter()
            .position(|&b| b == b'<')
            .map_or(bytes.len(), |i| start + 1 + i);
        self.pos = end;
        Token::Text(&self.input[start..end])
    }

    fn raw_text(&mut self, end_tag: &str) -> Token<'a> {
        let start = self.pos;
        let needle = end_tag.as_bytes();
        let end = self.input.as_bytes()[start..]
            .windows(needle.len())
            .position(|window| window.eq_ignore_ascii_case(needle))
            .map_or(self.input.len(), |i| start + i);
        self.pos = end;
        Token::Text(&self.input[start..end])
    }

    fn comment(&mut self) -> Result<Token<'a>> {
        let body = self.pos + 4;
        let close = self.input[body..]
            .find("-->")
            .ok_or_else(|| Error::html(self.pos, "unterminated comment"))?;
        self.pos = body + close + 3;
        Ok(Token::Comment)
    }

    fn declaration(&mut self) -> Result<Token<'a>> {
        let close = self.input[self.pos..]
            .find('>')
            .ok_or_else(|| Error::html(self.pos, "unterminated declaration"))?;
        self.pos += close + 1;
        Ok(Token::Comment)
    }

    fn tag_name(&self, start: usize) -> (String, usize) {
        let bytes = self.input.as_bytes();
        let mut end = start;
        while end < bytes.len()
            && (bytes[end].is_ascii_alphanumeric() || matches!(bytes[end], b'-' | b':' | b'_'))
        {
            end += 1;
        }
        (self.input[start..end].to_ascii_lowercase(), end)
    }

    fn skip_whitespace(&self, mut i: usize) -> usize {
        while self.byte_at(i).is_some_and(|b| b.is_ascii_whitespace()) {
            i += 1;
        }
        i
    }

    fn end_tag(&mut self) -> Result<Token<'a>> {
        let (name, after) = self.tag_name(self.pos + 2);
        let close = self.input[after..]
            .find('>')
            .ok_or_else(|| Error::html(self.pos, "unterminated tag"))?;
        self.pos = after + close + 1;
        Ok(Token::EndTag { name })
    }

    fn start_tag(&mut self) -> Result<Token<'a>> {
        let tag_start = self.pos;
        let unterminated = || Error::html(tag_start, "unterminated tag");
        let (name, mut i) = self.tag_name(tag_start + 1);
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            i = self.skip_whitespace(i);
            match self.byte_at(i) {
                None => return Err(unterminated()),
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') if self.byte_at(i + 1) == Some(b'>') => {
                    self_closing = true;
                    i += 2;
                    break;
                }
                Some(b'/' | b'=') => {
                    i += 1;
                    continue;
                }
                Some(_) => {}
            }

            let name_start = i;
            while self
                .byte_at(i)
                .is_some_and(|b| !b.is_ascii_whitespace() && !matches!(b, b'=' | b'>' | b'/'))
            {
                i += 1;
            }
            let attr_name = self.input[name_start..i].to_ascii_lowercase();

            i = self.skip_whitespace(i);
            let mut value = String::new();
            if self.byte_at(i) == Some(b'=') {
                i = self.skip_whitespace(i + 1);
                match self.byte_at(i) {
                    None => return Err(unterminated()),
                    Some(quote @ (b'"' | b'\'')) => {
                        let close = self.input.as_bytes()[i + 1..]
                            .iter()
                            .position(|&b| b == quote)
                            .ok_or_else(unterminated)?;
                        value = decode_entities(&self.input[i + 1..i + 1 + close]).into_owned();
                        i += close + 2;
                    }
                    Some(_) => {
                        let value_start = i;
                        while self
                            .byte_at(i)
                            .is_some_and(|b| !b.is_ascii_whitespace() && b != b'>')
                        {
                            i += 1;
                        }
                        value = decode_entities(&self.input[value_start..i]).into_owned();
                    }
                }
            }
            attributes.push((attr_name, value));
        }

        self.pos = i;
        if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.raw_text_end = Some(format!("</{name}"));
        }
        Ok(Token::StartTag {
            name,
            attributes,
            self_closing,
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        if let Some(end_tag) = self.raw_text_end.take() {
            let token = self.raw_text(&end_tag);
            if token != Token::Text("") {
                return Some(Ok(token));
            }
            if self.pos >= self.input.len() {
                return None;
            }
        }

        let input = self.input;
        let rest = &input.as_bytes()[self.pos..];
        let next_is_alpha = |i: usize| rest.get(i).is_some_and(u8::is_ascii_alphabetic);
        let result = match rest {
            [b'<', b'!', b'-', b'-', ..] => self.comment(),
            [b'<', b'!' | b'?', ..] => self.declaration(),
            [b'<', b'/', ..] if next_is_alpha(2) => self.end_tag(),
            [b'<', ..] if next_is_alpha(1) => self.start_tag(),
            _ => Ok(self.text()),
        };
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

/// Decode character references (`&amp;`, `&#233;`, `&#xE9;`).
///
/// Unknown or malformed references are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|&semi| semi > 0 && semi <= 10)
            .and_then(|semi| decode_reference(&after[..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return match char::from_u32(code) {
            Some('\0') | None => Some(char::REPLACEMENT_CHARACTER),
            Some(c) => Some(c),
        };
    }
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{A0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "laquo" => '«',
        "raquo" => '»',
        "bull" => '•',
        "middot" => '·',
        "deg" => '°',
        "times" => '×',
        "divide" => '÷',
        "euro" => '€',
        "pound" => '£',
        "yen" => '¥',
        "cent" => '¢',
        _ => return None,
    };
    Some(c)
}
