//! Construction hammer: left-click cycles the block, sneaking reverses.

use chisel_engine::transform::{CycleDirection, CycleOutcome, cycle_block};
use chisel_engine::variant::VariantRegistry;
use chisel_engine::world::access::BlockWorld;
use chisel_engine::world::position::BlockPos;

pub const TOOLTIP: [&str; 3] = [
    "Left-click to cycle block variants",
    "Shift+Left-click to cycle backwards",
    "Top slabs drop into free space below",
];

/// Strike the block at `pos`.
pub fn strike<W: BlockWorld + ?Sized>(
    world: &W,
    registry: &VariantRegistry,
    pos: BlockPos,
    sneaking: bool,
) -> CycleOutcome {
    let outcome = cycle_block(world, registry, pos, CycleDirection::from_sneaking(sneaking));
    let catalog = world.catalog();
    match outcome {
        CycleOutcome::Cycled { from, to } => {
            tracing::info!(
                "Hammer cycled {} -> {} at ({}, {}, {})",
                catalog.name(from),
                catalog.name(to),
                pos.x,
                pos.y,
                pos.z
            );
        }
        CycleOutcome::SlabLowered { to, .. } => {
            tracing::info!("Hammer lowered slab to ({}, {}, {})", to.x, to.y, to.z);
        }
        CycleOutcome::Skipped(_) => {}
    }
    outcome
}
