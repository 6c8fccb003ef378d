//! Markup engine: HTML tokens to a styled document.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::font::{FontDescriptor, FontTraits};
use crate::html::document::{
    AttributeKey, AttributeValue, Attributes, StyledDocument, StyledDocumentBuilder,
};
use crate::html::options::{DocumentType, HtmlOptions};
use crate::html::tokenizer::{Token, Tokenizer, decode_entities};

/// Converts markup into a [`StyledDocument`].
pub trait HtmlEngine: Send + Sync {
    /// Render `markup` into a styled document.
    fn render(&self, markup: &str, options: &HtmlOptions) -> Result<StyledDocument>;
}

/// The bundled HTML engine.
///
/// Understands the inline and block elements found in rich-text snippets
/// (emphasis, headings, lists, links, `font` and inline `style`), not
/// layout or scripting.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupEngine;

impl HtmlEngine for MarkupEngine {
    fn render(&self, markup: &str, options: &HtmlOptions) -> Result<StyledDocument> {
        if options.document_type == DocumentType::PlainText {
            let mut builder = StyledDocument::builder();
            builder.push(
                markup,
                Attributes::new().with(
                    AttributeKey::Font,
                    AttributeValue::Font(options.base_font.clone()),
                ),
            );
            return Ok(builder.build());
        }

        let mut renderer = Renderer::new(options);
        let mut tokens = Tokenizer::new(markup);
        while let Some(token) = tokens.next() {
            renderer.token(token?, tokens.offset())?;
        }
        Ok(renderer.finish())
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "dd", "div", "dl", "dt", "footer", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "nav", "ol", "p", "pre", "section", "table", "tr", "ul",
];

const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "title"];

/// Point sizes for `<font size=1..7>`.
const FONT_SIZES: [f32; 7] = [8.0, 10.0, 12.0, 14.0, 18.0, 24.0, 36.0];

#[derive(Clone, Debug, PartialEq)]
struct InlineStyle {
    family: String,
    size: f32,
    traits: FontTraits,
    color: Option<Color>,
    link: Option<String>,
    underline: bool,
    strikethrough: bool,
    baseline: i32,
}

impl InlineStyle {
    fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new().with(
            AttributeKey::Font,
            AttributeValue::Font(FontDescriptor {
                family: self.family.clone(),
                size: self.size,
                traits: self.traits,
            }),
        );
        if let Some(color) = self.color {
            attrs.insert(AttributeKey::ForegroundColor, AttributeValue::Color(color));
        }
        if let Some(link) = &self.link {
            attrs.insert(AttributeKey::Link, AttributeValue::Link(link.clone()));
        }
        if self.underline {
            attrs.insert(AttributeKey::Underline, AttributeValue::Flag(true));
        }
        if self.strikethrough {
            attrs.insert(AttributeKey::Strikethrough, AttributeValue::Flag(true));
        }
        if self.baseline != 0 {
            attrs.insert(AttributeKey::Superscript, AttributeValue::Number(self.baseline));
        }
        attrs
    }

    /// Apply an inline `style="..."` declaration list.
    fn apply_css(&mut self, css: &str) {
        for declaration in css.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim().to_ascii_lowercase();
            let raw_value = value.trim();
            let value = raw_value.to_ascii_lowercase();
            match property.as_str() {
                "color" => {
                    if let Some(color) = Color::parse(&value) {
                        self.color = Some(color);
                    }
                }
                "font-weight" => {
                    let bold = match value.as_str() {
                        "bold" | "bolder" => true,
                        "normal" | "lighter" => false,
                        numeric => match numeric.parse::<u16>() {
                            Ok(weight) => weight >= 600,
                            Err(_) => continue,
                        },
                    };
                    self.traits.set(FontTraits::BOLD, bold);
                }
                "font-style" => match value.as_str() {
                    "italic" | "oblique" => self.traits.insert(FontTraits::ITALIC),
                    "normal" => self.traits.remove(FontTraits::ITALIC),
                    _ => {}
                },
                "font-family" => {
                    if let Some(family) = first_family(raw_value) {
                        self.family = family;
                    }
                }
                "font-size" => {
                    let number = value
                        .strip_suffix("px")
                        .or_else(|| value.strip_suffix("pt"))
                        .unwrap_or(&value);
                    if let Ok(size) = number.trim().parse::<f32>() {
                        if size > 0.0 {
                            self.size = size;
                        }
                    }
                }
                "text-decoration" | "text-decoration-line" => {
                    if value.contains("none") {
                        self.underline = false;
                        self.strikethrough = false;
                    }
                    if value.contains("underline") {
                        self.underline = true;
                    }
                    if value.contains("line-through") {
                        self.strikethrough = true;
                    }
                }
                _ => {}
            }
        }
    }
}

/// First family of a comma-separated list, unquoted.
///
/// Keeps the original case of the family name.
fn first_family(list: &str) -> Option<String> {
    let family = list
        .split(',')
        .next()?
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    (!family.is_empty()).then(|| family.to_string())
}

struct Frame {
    tag: String,
    style: InlineStyle,
}

struct Renderer<'o> {
    options: &'o HtmlOptions,
    builder: StyledDocumentBuilder,
    base: InlineStyle,
    stack: Vec<Frame>,
    hidden_depth: usize,
    pre_depth: usize,
    /// Collapsed whitespace waiting for the next word, styled where it
    /// occurred.
    pending_space: Option<Attributes>,
    /// Set right after `<pre>`: a leading newline there is dropped.
    pre_start: bool,
}

impl<'o> Renderer<'o> {
    fn new(options: &'o HtmlOptions) -> Self {
        let base = InlineStyle {
            family: options.base_font.family.clone(),
            size: options.base_font.size,
            traits: options.base_font.traits,
            color: None,
            link: None,
            underline: false,
            strikethrough: false,
            baseline: 0,
        };
        Self {
            options,
            builder: StyledDocument::builder(),
            base,
            stack: Vec::new(),
            hidden_depth: 0,
            pre_depth: 0,
            pending_space: None,
            pre_start: false,
        }
    }

    fn style(&self) -> &InlineStyle {
        self.stack.last().map_or(&self.base, |frame| &frame.style)
    }

    fn token(&mut self, token: Token<'_>, offset: usize) -> Result<()> {
        match token {
            Token::Text(raw) => {
                if self.hidden_depth == 0 {
                    self.text(&decode_entities(raw));
                }
            }
            Token::EndTag { name } => self.end_tag(&name),
            Token::Comment => {}
            tag @ Token::StartTag { .. } => self.start_tag(&tag, offset)?,
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if self.pre_depth > 0 {
            let text = if self.pre_start {
                text.strip_prefix('\n').unwrap_or(text)
            } else {
                text
            };
            self.pre_start = false;
            if !text.is_empty() {
                self.pending_space = None;
                let attrs = self.style().attributes();
                self.builder.push(text, attrs);
            }
            return;
        }

        let attrs = self.style().attributes();
        for (i, word) in text.split(|c: char| c.is_ascii_whitespace()).enumerate() {
            if i > 0 && self.pending_space.is_none() {
                self.pending_space = Some(attrs.clone());
            }
            if word.is_empty() {
                continue;
            }
            if let Some(space) = self.pending_space.take() {
                let line_start =
                    self.builder.text().is_empty() || self.builder.text().ends_with('\n');
                if !line_start {
                    self.builder.push(" ", space);
                }
            }
            self.builder.push(word, attrs.clone());
        }
    }

    fn newline(&mut self) {
        self.pending_space = None;
        let attrs = self.style().attributes();
        self.builder.push("\n", attrs);
    }

    fn block_break(&mut self) {
        let text = self.builder.text();
        if !text.is_empty() && !text.ends_with('\n') {
            self.newline();
        }
        self.pending_space = None;
    }

    fn start_tag(&mut self, tag: &Token<'_>, offset: usize) -> Result<()> {
        let Token::StartTag {
            name, self_closing, ..
        } = tag
        else {
            return Ok(());
        };
        let name = name.as_str();

        if HIDDEN_ELEMENTS.contains(&name) {
            if !self_closing {
                self.hidden_depth += 1;
            }
            return Ok(());
        }
        if self.hidden_depth > 0 {
            return Ok(());
        }
        if name == "br" {
            self.newline();
            return Ok(());
        }

        // Unclosed paragraphs and list items end at the next sibling.
        if matches!(name, "p" | "li") && self.stack.last().is_some_and(|f| f.tag == name) {
            self.end_tag(name);
        }
        if BLOCK_ELEMENTS.contains(&name) {
            self.block_break();
        }
        if VOID_ELEMENTS.contains(&name) || *self_closing {
            return Ok(());
        }
        if self.stack.len() >= self.options.max_depth {
            return Err(Error::html(
                offset,
                format!("nesting deeper than {}", self.options.max_depth),
            ));
        }

        let mut style = self.style().clone();
        self.apply_element(name, tag, &mut style);
        if let Some(css) = tag.attribute("style") {
            style.apply_css(css);
        }
        self.stack.push(Frame {
            tag: name.to_string(),
            style,
        });

        match name {
            "pre" => {
                self.pre_depth += 1;
                self.pre_start = true;
            }
            "li" => {
                let attrs = self.style().attributes();
                self.builder.push("•\t", attrs);
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_element(&self, name: &str, tag: &Token<'_>, style: &mut InlineStyle) {
        let base_size = self.options.base_font.size;
        match name {
            "b" | "strong" => style.traits.insert(FontTraits::BOLD),
            "i" | "em" | "cite" | "var" | "dfn" | "address" => {
                style.traits.insert(FontTraits::ITALIC);
            }
            "u" | "ins" => style.underline = true,
            "s" | "strike" | "del" => style.strikethrough = true,
            "code" | "tt" | "kbd" | "samp" | "pre" => {
                style.family.clone_from(&self.options.monospace_family);
                style.traits.insert(FontTraits::MONOSPACE);
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let scale = match name {
                    "h1" => 2.0,
                    "h2" => 1.5,
                    "h3" => 1.17,
                    "h4" => 1.0,
                    "h5" => 0.83,
                    _ => 0.67,
                };
                style.size = base_size * scale;
                style.traits.insert(FontTraits::BOLD);
            }
            "big" => style.size *= 1.2,
            "small" => style.size /= 1.2,
            "sup" => style.baseline += 1,
            "sub" => style.baseline -= 1,
            "a" => {
                if let Some(href) = tag.attribute("href") {
                    style.link = Some(href.to_string());
                    style.underline = true;
                }
            }
            "font" => {
                if let Some(family) = tag.attribute("face").and_then(first_family) {
                    style.family = family;
                }
                if let Some(size) = tag.attribute("size").and_then(font_size) {
                    style.size = size;
                }
                if let Some(color) = tag.attribute("color").and_then(Color::parse) {
                    style.color = Some(color);
                }
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        if HIDDEN_ELEMENTS.contains(&name) {
            self.hidden_depth = self.hidden_depth.saturating_sub(1);
            return;
        }
        if self.hidden_depth > 0 {
            return;
        }
        let Some(index) = self.stack.iter().rposition(|frame| frame.tag == name) else {
            return;
        };
        for frame in self.stack.drain(index..).rev() {
            if frame.tag == "pre" {
                self.pre_depth = self.pre_depth.saturating_sub(1);
            }
        }
        if BLOCK_ELEMENTS.contains(&name) {
            self.block_break();
        }
    }

    fn finish(mut self) -> StyledDocument {
        self.builder.trim_end_matches(|c| c == '\n');
        self.builder.build()
    }
}

/// `<font size>`: absolute `1`-`7` or relative `+n` / `-n` from 3.
fn font_size(value: &str) -> Option<f32> {
    let value = value.trim();
    let index = if let Some(delta) = value.strip_prefix('+') {
        3i32.saturating_add(delta.parse::<i32>().ok()?)
    } else if let Some(delta) = value.strip_prefix('-') {
        3i32.saturating_sub(delta.parse::<i32>().ok()?)
    } else {
        value.parse::<i32>().ok()?
    };
    let index = usize::try_from(index.clamp(1, 7) - 1).ok()?;
    FONT_SIZES.get(index).copied()
}
