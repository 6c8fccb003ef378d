//! Font system seam and an in-memory font collection.

use std::collections::HashMap;

use super::descriptor::{FontDescriptor, FontTraits};

/// Font lookup used when rewriting styled text.
pub trait FontSystem: Send + Sync {
    /// Symbolic traits of `font`.
    fn traits(&self, font: &FontDescriptor) -> FontTraits {
        font.traits
    }

    /// A font of `base`'s family and size carrying exactly `traits`.
    ///
    /// Returns `None` when the family has no face for that trait set.
    fn font_with_traits(&self, base: &FontDescriptor, traits: FontTraits)
    -> Option<FontDescriptor>;
}

/// Build a font from `to` that also carries the symbolic traits of `from`.
///
/// Returns `None` when `system` cannot represent the combined trait set.
pub fn copy_symbolic_traits(
    from: &FontDescriptor,
    to: &FontDescriptor,
    system: &(impl FontSystem + ?Sized),
) -> Option<FontDescriptor> {
    let traits = system.traits(to) | system.traits(from);
    system.font_with_traits(to, traits)
}

/// Registry of families and the faces (trait sets) each one provides.
///
/// Face matching ignores [`FontTraits::LAYOUT_ONLY`] flags; those are
/// carried over onto the returned descriptor as requested.
#[derive(Clone, Debug, Default)]
pub struct FontCollection {
    families: HashMap<String, Vec<FontTraits>>,
}

impl FontCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection with a few common families.
    ///
    /// `Times`, `Georgia`, `Helvetica` and `Courier` each provide regular,
    /// bold, italic and bold-italic faces. `Helvetica` adds condensed faces
    /// and every `Courier` face is monospace.
    #[must_use]
    pub fn with_standard_families() -> Self {
        let four = [
            FontTraits::empty(),
            FontTraits::BOLD,
            FontTraits::ITALIC,
            FontTraits::BOLD | FontTraits::ITALIC,
        ];
        let mut collection = Self::new();
        collection.register_family("Times", four);
        collection.register_family("Georgia", four);
        collection.register_family(
            "Helvetica",
            four.into_iter()
                .chain([FontTraits::CONDENSED, FontTraits::CONDENSED | FontTraits::BOLD]),
        );
        collection.register_family(
            "Courier",
            four.into_iter().map(|t| t | FontTraits::MONOSPACE),
        );
        collection
    }

    /// Register (or extend) a family with the given faces.
    pub fn register_family(
        &mut self,
        family: impl Into<String>,
        faces: impl IntoIterator<Item = FontTraits>,
    ) {
        let entry = self.families.entry(family.into()).or_default();
        for face in faces {
            let face = face.face_traits();
            if !entry.contains(&face) {
                entry.push(face);
            }
        }
    }

    #[must_use]
    pub fn contains_family(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// Faces registered for `family`.
    #[must_use]
    pub fn faces(&self, family: &str) -> &[FontTraits] {
        self.families.get(family).map_or(&[], Vec::as_slice)
    }
}

impl FontSystem for FontCollection {
    fn font_with_traits(
        &self,
        base: &FontDescriptor,
        traits: FontTraits,
    ) -> Option<FontDescriptor> {
        let wanted = traits.face_traits();
        let faces = self.families.get(&base.family)?;
        // A monospace family keeps MONOSPACE on every face, so a request
        // that lacks it still matches when the family supplies it.
        let face = faces
            .iter()
            .copied()
            .find(|&face| face == wanted)
            .or_else(|| {
                let mono = wanted | FontTraits::MONOSPACE;
                faces.iter().copied().find(|&face| face == mono)
            })?;
        Some(FontDescriptor {
            family: base.family.clone(),
            size: base.size,
            traits: face | (traits & FontTraits::LAYOUT_ONLY),
        })
    }
}
