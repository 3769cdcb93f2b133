//! Construction hammer: step a block through its variant ring.

use crate::variant::VariantRegistry;
use crate::world::UpdateFlags;
use crate::world::access::BlockWorld;
use crate::world::block::{BlockState, BlockType};
use crate::world::catalog::BlockCatalog;
use crate::world::position::BlockPos;

use super::{
    BOTTOM, HALF, LOWER, SLAB_TYPE, TOP, UPPER, carry_over, is_double_block, is_paired_half,
    is_slab, is_slab_type,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleDirection {
    Forward,
    Backward,
}

impl CycleDirection {
    /// Sneaking cycles backwards.
    pub fn from_sneaking(sneaking: bool) -> Self {
        if sneaking {
            CycleDirection::Backward
        } else {
            CycleDirection::Forward
        }
    }
}

/// Why a cycle request left the world untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleSkip {
    /// The block belongs to no variant ring.
    NotInFamily,
    /// The ring has a single member; the next variant is the block itself.
    SingleMember,
    /// A top slab cannot be lowered because the block below is occupied.
    SlabBlockedBelow,
    /// A double block cannot be placed because the block above is occupied.
    DoorBlockedAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The block was replaced by the next/previous variant.
    Cycled { from: BlockType, to: BlockType },
    /// A top slab was moved down into the bottom half of the block below.
    /// `original_cleared` is false when the block above the original kept
    /// it in place.
    SlabLowered { to: BlockPos, original_cleared: bool },
    Skipped(CycleSkip),
}

impl CycleOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, CycleOutcome::Skipped(_))
    }
}

/// Cycle the block at `pos` one step in `direction`.
pub fn cycle_block<W: BlockWorld + ?Sized>(
    world: &W,
    registry: &VariantRegistry,
    pos: BlockPos,
    direction: CycleDirection,
) -> CycleOutcome {
    let catalog = world.catalog();
    let (pos, current) = lower_half(world, pos);
    let current_type = catalog.block_of(current);

    if direction == CycleDirection::Forward
        && is_slab(catalog, current)
        && catalog.value(current, SLAB_TYPE) == Some(TOP)
    {
        return lower_top_slab(world, pos, current);
    }

    let Some(ring) = registry.ring_for(current_type) else {
        return skip(catalog, pos, current, CycleSkip::NotInFamily);
    };
    let candidate = match direction {
        CycleDirection::Forward => ring.next(current_type),
        CycleDirection::Backward => ring.previous(current_type),
    };
    let Some(candidate) = candidate.filter(|c| *c != current_type) else {
        return skip(catalog, pos, current, CycleSkip::SingleMember);
    };

    let base = carry_over(catalog, current, catalog.default_state(candidate), |p| {
        is_paired_half(p) || is_slab_type(p)
    });

    if is_double_block(catalog, base) {
        let above = pos.above();
        if !upper_space_free(world, above, current) {
            return skip(catalog, pos, current, CycleSkip::DoorBlockedAbove);
        }
        let lower = catalog.with_value(base, HALF, LOWER).unwrap_or(base);
        let upper = catalog.with_value(base, HALF, UPPER).unwrap_or(base);
        world.set_block_state(pos, lower, UpdateFlags::DEFAULT);
        world.set_block_state(above, upper, UpdateFlags::DEFAULT);
    } else {
        let next = if is_slab(catalog, base) {
            catalog.with_value(base, SLAB_TYPE, BOTTOM).unwrap_or(base)
        } else {
            base
        };
        world.set_block_state(pos, next, UpdateFlags::DEFAULT);
        if is_double_block(catalog, current) {
            clear_orphaned_upper(world, pos.above(), current_type);
        }
    }

    tracing::debug!(
        "Cycled {:?} {} -> {}",
        pos,
        catalog.name(current_type),
        catalog.name(candidate)
    );
    CycleOutcome::Cycled {
        from: current_type,
        to: candidate,
    }
}

/// A click on the upper half of a double block acts on its lower half.
fn lower_half<W: BlockWorld + ?Sized>(world: &W, pos: BlockPos) -> (BlockPos, BlockState) {
    let catalog = world.catalog();
    let state = world.block_state(pos);
    if !is_double_block(catalog, state) || catalog.value(state, HALF) != Some(UPPER) {
        return (pos, state);
    }
    let below = pos.below();
    let below_state = world.block_state(below);
    if catalog.block_of(below_state) == catalog.block_of(state)
        && catalog.value(below_state, HALF) == Some(LOWER)
    {
        (below, below_state)
    } else {
        (pos, state)
    }
}

fn lower_top_slab<W: BlockWorld + ?Sized>(
    world: &W,
    pos: BlockPos,
    current: BlockState,
) -> CycleOutcome {
    let catalog = world.catalog();
    let below = pos.below();
    if !catalog.is_air(world.block_state(below)) {
        return skip(catalog, pos, current, CycleSkip::SlabBlockedBelow);
    }

    let bottom = catalog
        .with_value(current, SLAB_TYPE, BOTTOM)
        .unwrap_or(current);
    world.set_block_state(below, bottom, UpdateFlags::DEFAULT);

    let original_cleared = catalog.is_air(world.block_state(pos.above()));
    if original_cleared {
        world.set_block_state(pos, BlockState::AIR, UpdateFlags::DEFAULT);
    }

    tracing::debug!(
        "Lowered top slab {} from {:?} to {:?}",
        catalog.describe(current),
        pos,
        below
    );
    CycleOutcome::SlabLowered {
        to: below,
        original_cleared,
    }
}

/// Air, something replaceable, or the current block's own upper half.
fn upper_space_free<W: BlockWorld + ?Sized>(world: &W, above: BlockPos, current: BlockState) -> bool {
    let catalog = world.catalog();
    let state = world.block_state(above);
    if catalog.is_air(state) || catalog.is_replaceable(state) {
        return true;
    }
    is_double_block(catalog, current)
        && catalog.block_of(state) == catalog.block_of(current)
        && catalog.value(state, HALF) == Some(UPPER)
}

fn clear_orphaned_upper<W: BlockWorld + ?Sized>(world: &W, above: BlockPos, old_type: BlockType) {
    let catalog = world.catalog();
    let state = world.block_state(above);
    if catalog.block_of(state) == old_type && catalog.value(state, HALF) == Some(UPPER) {
        world.set_block_state(above, BlockState::AIR, UpdateFlags::DEFAULT);
    }
}

fn skip(catalog: &BlockCatalog, pos: BlockPos, current: BlockState, reason: CycleSkip) -> CycleOutcome {
    tracing::debug!(
        "Cycle skipped at {:?} ({}): {:?}",
        pos,
        catalog.describe(current),
        reason
    );
    CycleOutcome::Skipped(reason)
}
