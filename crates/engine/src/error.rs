//! Configuration errors.
//!
//! Everything in here indicates a mistake in a fixed startup table (block
//! catalog, family table, paint table). They are raised while the registries
//! are being built and are never expected at interaction time. Runtime
//! "nothing to do" conditions are outcome enums in `transform`, not errors.

use thiserror::Error;

use crate::paint::{DyeColor, PaintCategory};
use crate::world::block::BlockType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    // ── Catalog ──────────────────────────────────────────────────────────
    #[error("block catalog must start with an air block")]
    MissingAir,

    #[error("duplicate block name in catalog: {0}")]
    DuplicateBlock(String),

    #[error("block {block} declares property {property} twice")]
    DuplicateProperty { block: String, property: String },

    #[error("block {block} property {property} has an empty domain")]
    EmptyDomain { block: String, property: String },

    #[error("block {block} default {property}={value} is outside the property domain")]
    InvalidDefault {
        block: String,
        property: String,
        value: String,
    },

    #[error("block catalog exceeds {} states", u16::MAX)]
    TooManyStates,

    // ── Variant rings ────────────────────────────────────────────────────
    #[error("variant family {0} has no members")]
    EmptyRing(String),

    #[error("variant family {family} references unknown block {name}")]
    UnknownBlock { family: String, name: String },

    #[error("variant family {family} lists {block:?} more than once")]
    DuplicateMember { family: String, block: BlockType },

    #[error("{block:?} in family {family} is already registered under family {existing}")]
    AlreadyRegistered {
        block: BlockType,
        family: String,
        existing: String,
    },

    // ── Paint tables ─────────────────────────────────────────────────────
    #[error("paint category {category:?} maps both {first:?} and {second:?} to {block:?}")]
    ColorCollision {
        category: PaintCategory,
        first: DyeColor,
        second: DyeColor,
        block: BlockType,
    },

    #[error("paint category {category:?} is missing a block for {color:?}")]
    MissingColor {
        category: PaintCategory,
        color: DyeColor,
    },

    #[error("paint category {category:?} references unknown block {name}")]
    UnknownPaintBlock {
        category: PaintCategory,
        name: String,
    },

    #[error("{block:?} is classified as both {first:?} and {second:?}")]
    OverlappingCategory {
        block: BlockType,
        first: PaintCategory,
        second: PaintCategory,
    },
}
