//! Font descriptors and symbolic traits.

use bitflags::bitflags;

bitflags! {
    /// Symbolic font traits (bold, italic, condensed, etc.).
    ///
    /// Traits describe the face, not the family: a bold run rewritten to a
    /// new family should keep [`FontTraits::BOLD`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FontTraits: u32 {
        /// Slanted face.
        const ITALIC        = 1 << 0;
        /// Heavier weight.
        const BOLD          = 1 << 1;
        /// Wider than normal.
        const EXPANDED      = 1 << 5;
        /// Narrower than normal.
        const CONDENSED     = 1 << 6;
        /// Fixed advance width.
        const MONOSPACE     = 1 << 10;
        /// Vertical glyph variants.
        const VERTICAL      = 1 << 11;
        /// Metrics tuned for interface text.
        const UI_OPTIMIZED  = 1 << 12;
        /// Reduced line spacing.
        const TIGHT_LEADING = 1 << 15;
        /// Increased line spacing.
        const LOOSE_LEADING = 1 << 16;
    }
}

impl FontTraits {
    /// Traits that only affect layout and never select a different face.
    pub const LAYOUT_ONLY: Self = Self::VERTICAL
        .union(Self::UI_OPTIMIZED)
        .union(Self::TIGHT_LEADING)
        .union(Self::LOOSE_LEADING);

    /// Return only the traits that select a face.
    #[must_use]
    pub const fn face_traits(self) -> Self {
        self.difference(Self::LAYOUT_ONLY)
    }
}

/// A concrete font: family, point size and symbolic traits.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Family name, e.g. `"Helvetica"`.
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Symbolic traits of this face.
    pub traits: FontTraits,
}

impl FontDescriptor {
    /// Create a regular-face descriptor.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            traits: FontTraits::empty(),
        }
    }

    /// Return a copy with the given traits.
    #[must_use]
    pub fn with_traits(mut self, traits: FontTraits) -> Self {
        self.traits = traits;
        self
    }

    /// Return a copy with the given size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Return a copy with the given family.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.traits.contains(FontTraits::BOLD)
    }

    #[must_use]
    pub fn is_italic(&self) -> bool {
        self.traits.contains(FontTraits::ITALIC)
    }
}
