//! Block variant families.
//!
//! A [`VariantRing`] is a closed cycle of related block types ("everything
//! made of oak"); the [`VariantRegistry`] maps each block type to the single
//! ring that owns it.

pub mod registry;
pub mod ring;

pub use registry::{RingId, VariantRegistry};
pub use ring::{RingBuilder, VariantRing};
