//! Paint buckets: 32 paints each, tracked in the item's custom data.

use chisel_engine::world::item::ItemStack;

use crate::interaction::Actor;

use super::empty_paint_bucket;

const PAINTS_REMAINING: &str = "paints_remaining";

pub const MAX_PAINTS: u32 = 32;

/// Paints left. A bucket that never recorded a count is full.
pub fn remaining(stack: &ItemStack) -> u32 {
    stack
        .get_int(PAINTS_REMAINING)
        .map_or(MAX_PAINTS, |n| n.clamp(0, MAX_PAINTS as i32) as u32)
}

pub fn set_remaining(stack: &mut ItemStack, value: u32) {
    stack.put_int(PAINTS_REMAINING, value.min(MAX_PAINTS) as i32);
}

/// Use one paint from the bucket stack in `actor`'s hand.
///
/// On the last paint one bucket leaves the stack and an empty bucket goes to
/// the actor (or is dropped when the inventory is full). Creative actors
/// never use anything up.
pub fn consume_one(stack: &mut ItemStack, actor: &mut Actor) {
    if actor.creative {
        return;
    }
    let left = remaining(stack).saturating_sub(1);
    if left > 0 {
        set_remaining(stack, left);
        return;
    }
    stack.shrink(1);
    // The next bucket in the stack starts full.
    stack.remove(PAINTS_REMAINING);
    actor.give_or_drop(empty_paint_bucket());
}

pub fn tooltip(stack: &ItemStack) -> Vec<String> {
    vec![
        format!("Contains {} paints", MAX_PAINTS),
        format!("Remaining: {} / {}", remaining(stack), MAX_PAINTS),
    ]
}
