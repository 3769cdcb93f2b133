//! Block-state transforms driven by the handheld tools.
//!
//! Both transforms work through [`BlockWorld`](crate::world::access::BlockWorld)
//! and report what they did as an outcome enum. "Nothing to do" is an
//! outcome, never an error, and never writes to the world.

pub mod cycle;
pub mod repaint;

use crate::world::block::{BlockState, PropertyDef};
use crate::world::catalog::BlockCatalog;

pub use cycle::{CycleDirection, CycleOutcome, CycleSkip, cycle_block};
pub use repaint::{RepaintOutcome, normalize_bed_head, repaint_block};

// ── Well-known attributes ───────────────────────────────────────────────

/// Paired-half attribute of two-block-tall blocks (doors, tall plants).
pub const HALF: &str = "half";
pub const UPPER: &str = "upper";
pub const LOWER: &str = "lower";

/// Slab position attribute.
pub const SLAB_TYPE: &str = "type";
pub const TOP: &str = "top";
pub const BOTTOM: &str = "bottom";

/// Bed half attribute.
pub const PART: &str = "part";
pub const HEAD: &str = "head";
pub const FOOT: &str = "foot";

pub const FACING: &str = "facing";

/// `half` with an upper/lower domain. Stairs and trapdoors also have a
/// `half`, but theirs is top/bottom.
pub fn is_paired_half(prop: &PropertyDef) -> bool {
    prop.name() == HALF && prop.accepts_all(&[UPPER, LOWER])
}

/// `type` with a top/bottom domain. Chests also have a `type`
/// (single/left/right), which does not count.
pub fn is_slab_type(prop: &PropertyDef) -> bool {
    prop.name() == SLAB_TYPE && prop.accepts_all(&[TOP, BOTTOM])
}

pub fn is_double_block(catalog: &BlockCatalog, state: BlockState) -> bool {
    catalog
        .def(catalog.block_of(state))
        .property(HALF)
        .is_some_and(is_paired_half)
}

pub fn is_slab(catalog: &BlockCatalog, state: BlockState) -> bool {
    catalog
        .def(catalog.block_of(state))
        .property(SLAB_TYPE)
        .is_some_and(is_slab_type)
}

/// Copy every attribute of `from` onto `onto` that `onto`'s type can hold.
///
/// An attribute is copied when the destination declares one with the same
/// name and its domain contains the value; anything else is left at the
/// destination's value. Attributes for which `skip` returns true are never
/// copied.
pub fn carry_over(
    catalog: &BlockCatalog,
    from: BlockState,
    onto: BlockState,
    skip: impl Fn(&PropertyDef) -> bool,
) -> BlockState {
    let mut out = onto;
    for (prop, value) in catalog.values(from) {
        if skip(prop) {
            continue;
        }
        if let Some(next) = catalog.with_value(out, prop.name(), value) {
            out = next;
        }
    }
    out
}

/// Copy a single named attribute, if both sides support the value.
pub fn copy_attribute(catalog: &BlockCatalog, from: BlockState, onto: BlockState, name: &str) -> BlockState {
    catalog
        .value(from, name)
        .and_then(|v| catalog.with_value(onto, name, v))
        .unwrap_or(onto)
}
