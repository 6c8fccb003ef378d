//! Fonts: descriptors, symbolic traits and the font system seam.

mod collection;
mod descriptor;

pub use collection::{FontCollection, FontSystem, copy_symbolic_traits};
pub use descriptor::{FontDescriptor, FontTraits};
