//! Paint brush: swap a block for its counterpart in another dye color.

use crate::paint::{DyeColor, PaintCategory, PaintClassifier};
use crate::world::UpdateFlags;
use crate::world::access::BlockWorld;
use crate::world::block::{BlockState, BlockType};
use crate::world::catalog::BlockCatalog;
use crate::world::entity::BlockEntity;
use crate::world::position::{BlockPos, Direction};

use super::{FACING, FOOT, HEAD, PART, carry_over, copy_attribute};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintOutcome {
    Painted { from: BlockType, to: BlockType },
    /// A bed head was repainted but its foot could not be found.
    PaintedSingleHalf { from: BlockType, to: BlockType },
    AlreadyThisColor,
    NotPaintable,
}

impl RepaintOutcome {
    pub fn changed(&self) -> bool {
        matches!(
            self,
            RepaintOutcome::Painted { .. } | RepaintOutcome::PaintedSingleHalf { .. }
        )
    }
}

/// A bed's foot redirects to its head (one step along `facing`), provided
/// a head facing the same way is actually there. Every other position,
/// including a lone foot, is returned unchanged.
pub fn normalize_bed_head<W: BlockWorld + ?Sized>(world: &W, pos: BlockPos) -> BlockPos {
    let catalog = world.catalog();
    let state = world.block_state(pos);
    if catalog.value(state, PART) != Some(FOOT) {
        return pos;
    }
    let Some(dir) = facing_of(catalog, state) else {
        return pos;
    };
    let head_pos = pos.relative(dir);
    let head = world.block_state(head_pos);
    if catalog.value(head, PART) == Some(HEAD) && facing_of(catalog, head) == Some(dir) {
        head_pos
    } else {
        pos
    }
}

/// Repaint the block at `pos` to `color`.
pub fn repaint_block<W: BlockWorld + ?Sized>(
    world: &W,
    classifier: &PaintClassifier,
    pos: BlockPos,
    color: DyeColor,
) -> RepaintOutcome {
    let catalog = world.catalog();
    let pos = bed_target(world, classifier, pos);
    let current = world.block_state(pos);
    let current_type = catalog.block_of(current);

    let Some(paintable) = classifier.classify(current_type) else {
        tracing::debug!("Not paintable at {:?}: {}", pos, catalog.describe(current));
        return RepaintOutcome::NotPaintable;
    };
    let Some(dest) = classifier.block_for(paintable.category, color) else {
        return RepaintOutcome::NotPaintable;
    };
    if dest == current_type {
        return RepaintOutcome::AlreadyThisColor;
    }

    let target = painted_state(catalog, current, dest, paintable.category);
    let outcome = if paintable.category == PaintCategory::Bed {
        paint_bed(world, classifier, pos, current, dest)
    } else if catalog.def(current_type).has_container() {
        paint_container(world, pos, target);
        RepaintOutcome::Painted {
            from: current_type,
            to: dest,
        }
    } else {
        world.set_block_state(pos, target, UpdateFlags::REPAINT);
        RepaintOutcome::Painted {
            from: current_type,
            to: dest,
        }
    };

    tracing::debug!(
        "Painted {:?} {} -> {} ({})",
        pos,
        catalog.name(current_type),
        catalog.name(dest),
        color
    );
    outcome
}

/// Default state of `dest`, plus every compatible attribute of `current`,
/// plus the category's preserved attributes.
fn painted_state(
    catalog: &BlockCatalog,
    current: BlockState,
    dest: BlockType,
    category: PaintCategory,
) -> BlockState {
    let mut out = carry_over(catalog, current, catalog.default_state(dest), |_| false);
    for name in category.preserved_attributes() {
        out = copy_attribute(catalog, current, out, name);
    }
    out
}

fn paint_bed<W: BlockWorld + ?Sized>(
    world: &W,
    classifier: &PaintClassifier,
    head_pos: BlockPos,
    head: BlockState,
    dest: BlockType,
) -> RepaintOutcome {
    let catalog = world.catalog();
    let from = catalog.block_of(head);
    world.set_block_state(
        head_pos,
        painted_state(catalog, head, dest, PaintCategory::Bed),
        UpdateFlags::REPAINT,
    );

    // The foot may be any bed color; halves can diverge after a partial write.
    let facing = facing_of(catalog, head);
    let foot = facing
        .filter(|_| catalog.value(head, PART) == Some(HEAD))
        .map(|dir| head_pos.relative(dir.opposite()))
        .map(|pos| (pos, world.block_state(pos)))
        .filter(|(_, state)| {
            is_bed(classifier, catalog, *state)
                && catalog.value(*state, PART) == Some(FOOT)
                && facing_of(catalog, *state) == facing
        });

    match foot {
        Some((foot_pos, foot_state)) => {
            world.set_block_state(
                foot_pos,
                painted_state(catalog, foot_state, dest, PaintCategory::Bed),
                UpdateFlags::REPAINT,
            );
            RepaintOutcome::Painted { from, to: dest }
        }
        None => {
            tracing::debug!("Bed at {:?} has no matching partner; painted one half", head_pos);
            RepaintOutcome::PaintedSingleHalf { from, to: dest }
        }
    }
}

/// Where a click at `pos` paints: the head for a bed foot whose head is a
/// bed too, `pos` otherwise.
fn bed_target<W: BlockWorld + ?Sized>(
    world: &W,
    classifier: &PaintClassifier,
    pos: BlockPos,
) -> BlockPos {
    let catalog = world.catalog();
    if !is_bed(classifier, catalog, world.block_state(pos)) {
        return pos;
    }
    let head = normalize_bed_head(world, pos);
    if head != pos && is_bed(classifier, catalog, world.block_state(head)) {
        head
    } else {
        pos
    }
}

fn is_bed(classifier: &PaintClassifier, catalog: &BlockCatalog, state: BlockState) -> bool {
    classifier
        .classify(catalog.block_of(state))
        .is_some_and(|p| p.category == PaintCategory::Bed)
}

/// Swap a container block while keeping its items and display name.
///
/// The old container is emptied before the swap so the world has nothing to
/// drop. The name goes first because the fallback naming channel rebuilds
/// the inventory from its tag; the items are put back afterwards.
fn paint_container<W: BlockWorld + ?Sized>(world: &W, pos: BlockPos, target: BlockState) {
    let snapshot = world.container(pos);
    world.clear_container(pos);
    world.set_block_state(pos, target, UpdateFlags::REPAINT);

    let Some(snapshot) = snapshot else {
        return;
    };
    if let Some(name) = snapshot.custom_name() {
        if world.set_custom_name(pos, name).is_err() {
            world.load_block_entity(pos, &BlockEntity::name_tag(name));
        }
    }
    world.set_container_items(pos, snapshot.items());
}

fn facing_of(catalog: &BlockCatalog, state: BlockState) -> Option<Direction> {
    catalog.value(state, FACING).and_then(Direction::from_name)
}
