//! Shapeless brush-charging recipe: one paint brush plus one paint bucket.

use chisel_engine::world::item::ItemStack;

use crate::config::PaintConfig;

use super::{ToolKind, brush, empty_paint_bucket};

/// Charges a brush with a bucket's color and hands back an empty bucket.
#[derive(Debug, Clone, Copy)]
pub struct BrushChargeRecipe {
    /// Uses added per bucket.
    pub bucket_charge: u32,
    /// Most uses a brush can hold.
    pub brush_capacity: u32,
}

impl Default for BrushChargeRecipe {
    fn default() -> Self {
        Self {
            bucket_charge: super::bucket::MAX_PAINTS,
            brush_capacity: brush::MAX_PAINT_USES,
        }
    }
}

impl From<&PaintConfig> for BrushChargeRecipe {
    fn from(config: &PaintConfig) -> Self {
        Self {
            bucket_charge: config.bucket_charge,
            brush_capacity: config.brush_capacity,
        }
    }
}

impl BrushChargeRecipe {
    /// Exactly one brush, exactly one colored bucket, nothing else.
    pub fn matches(&self, grid: &[ItemStack]) -> bool {
        let mut brushes = 0;
        let mut buckets = 0;
        for stack in grid.iter().filter(|s| !s.is_empty()) {
            match ToolKind::of(stack) {
                Some(ToolKind::Brush) => brushes += 1,
                Some(ToolKind::PaintBucket(_)) => buckets += 1,
                _ => return false,
            }
        }
        brushes == 1 && buckets == 1
    }

    /// The charged brush, or `None` if the grid does not match.
    pub fn assemble(&self, grid: &[ItemStack]) -> Option<ItemStack> {
        if !self.matches(grid) {
            return None;
        }
        let mut brush_stack = grid
            .iter()
            .find(|s| ToolKind::of(s) == Some(ToolKind::Brush))?
            .copy_with_count(1);
        let color = grid.iter().find_map(|s| match ToolKind::of(s) {
            Some(ToolKind::PaintBucket(color)) => Some(color),
            _ => None,
        })?;
        brush::charge_brush(&mut brush_stack, color, self.bucket_charge, self.brush_capacity);
        Some(brush_stack)
    }

    /// What stays in the grid after crafting: an empty bucket where the
    /// paint bucket was, nothing elsewhere.
    pub fn remaining_items(&self, grid: &[ItemStack]) -> Vec<ItemStack> {
        grid.iter()
            .map(|s| match ToolKind::of(s) {
                Some(ToolKind::PaintBucket(_)) => empty_paint_bucket(),
                _ => ItemStack::empty(),
            })
            .collect()
    }
}
