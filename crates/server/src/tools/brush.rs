//! Paint brush charge, stored in the item's custom data.

use chisel_engine::paint::DyeColor;
use chisel_engine::world::item::ItemStack;

const PAINT_COLOR: &str = "PaintColor";
const PAINT_USES: &str = "PaintUses";

/// Four buckets' worth.
pub const MAX_PAINT_USES: u32 = 128;

/// Loaded paint color. Accepts legacy upper-case names (`LIGHT_GRAY`).
pub fn paint_color(stack: &ItemStack) -> Option<DyeColor> {
    let name = stack.get_string(PAINT_COLOR)?;
    DyeColor::from_name(&name.to_ascii_lowercase())
}

pub fn paint_uses(stack: &ItemStack) -> u32 {
    stack
        .get_int(PAINT_USES)
        .map_or(0, |uses| uses.max(0) as u32)
}

/// A brush with uses left and a readable color.
pub fn charge(stack: &ItemStack) -> Option<(DyeColor, u32)> {
    let uses = paint_uses(stack);
    if uses == 0 {
        return None;
    }
    paint_color(stack).map(|color| (color, uses))
}

fn set_paint(stack: &mut ItemStack, color: DyeColor, uses: u32) {
    stack.put_string(PAINT_COLOR, color.name());
    stack.put_int(PAINT_USES, uses.min(i32::MAX as u32) as i32);
}

/// Remove the charge; the custom data disappears once nothing else is in it.
pub fn clear_paint(stack: &mut ItemStack) {
    stack.remove(PAINT_COLOR);
    stack.remove(PAINT_USES);
}

/// Add `add` uses of `color`, capped at `capacity`.
///
/// Loading a different color replaces the old paint; the same color (or an
/// empty brush) tops it up.
pub fn charge_brush(stack: &mut ItemStack, color: DyeColor, add: u32, capacity: u32) {
    let current = paint_color(stack);
    let uses = match current {
        Some(c) if c != color => add.min(capacity),
        _ => paint_uses(stack).saturating_add(add).min(capacity),
    };
    set_paint(stack, color, uses);
}

/// Spend one use. The charge is cleared when the last use is gone.
pub fn consume_use(stack: &mut ItemStack) {
    let left = paint_uses(stack).saturating_sub(1);
    if left == 0 {
        clear_paint(stack);
    } else {
        stack.put_int(PAINT_USES, left as i32);
    }
}

/// Charged brushes render with the enchantment glint.
pub fn is_foil(stack: &ItemStack) -> bool {
    paint_uses(stack) > 0
}

pub fn tooltip(stack: &ItemStack, capacity: u32) -> Vec<String> {
    let mut lines = Vec::new();
    match charge(stack) {
        Some((color, uses)) => {
            lines.push(format!("Paint: {}", color.title()));
            lines.push(format!("Uses: {}/{}", uses, capacity));
        }
        None if paint_uses(stack) > 0 => {}
        None => {
            lines.push("No paint loaded".to_string());
            lines.push("Combine with paint bucket to charge".to_string());
        }
    }
    lines.push("Left-click or Shift+Left-click to paint blocks".to_string());
    lines
}
