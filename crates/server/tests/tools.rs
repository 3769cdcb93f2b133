//! Tool items on their own: ids, brush charge, buckets, the charging recipe
//! and paxel stats.

use chisel_engine::paint::DyeColor;
use chisel_engine::world::item::ItemStack;
use chisel_server::interaction::{Actor, INVENTORY_SLOTS};
use chisel_server::tools::paxel::{BlockTag, Paxel, Tier, ToolAbility};
use chisel_server::tools::recipe::BrushChargeRecipe;
use chisel_server::tools::{self, ToolKind, brush, bucket, hammer};

// ---------------------------------------------------------------------------
// Item ids
// ---------------------------------------------------------------------------

#[test]
fn tool_kinds_from_item_ids() {
    assert_eq!(ToolKind::of(&tools::construction_hammer()), Some(ToolKind::Hammer));
    assert_eq!(ToolKind::of(&tools::paint_brush()), Some(ToolKind::Brush));
    assert_eq!(
        ToolKind::of(&tools::paint_bucket(DyeColor::LightBlue)),
        Some(ToolKind::PaintBucket(DyeColor::LightBlue))
    );
    assert_eq!(
        ToolKind::of(&tools::empty_paint_bucket()),
        Some(ToolKind::EmptyPaintBucket)
    );
    assert_eq!(
        ToolKind::of(&tools::paxel(Tier::Netherite)),
        Some(ToolKind::Paxel(Tier::Netherite))
    );

    assert_eq!(tools::paint_bucket(DyeColor::LightBlue).id(), "chisel:light_blue_paint_bucket");
    assert_eq!(ToolKind::of(&ItemStack::new("chisel:mauve_paint_bucket", 1)), None);
    assert_eq!(ToolKind::of(&ItemStack::new("chisel:gold_paxel", 1)), None);
    assert_eq!(ToolKind::of(&ItemStack::new("minecraft:stone", 1)), None);
    assert_eq!(ToolKind::of(&ItemStack::empty()), None);
}

#[test]
fn only_buckets_stack() {
    assert_eq!(ToolKind::Hammer.max_stack(), 1);
    assert_eq!(ToolKind::Brush.max_stack(), 1);
    assert_eq!(ToolKind::Paxel(Tier::Iron).max_stack(), 1);
    assert_eq!(ToolKind::PaintBucket(DyeColor::Red).max_stack(), 64);
    assert_eq!(ToolKind::EmptyPaintBucket.max_stack(), 64);
}

#[test]
fn hammer_tooltip_mentions_both_directions() {
    assert!(hammer::TOOLTIP.iter().any(|l| l.contains("Shift")));
}

// ---------------------------------------------------------------------------
// Brush
// ---------------------------------------------------------------------------

#[test]
fn new_brush_is_uncharged() {
    let b = tools::paint_brush();
    assert_eq!(brush::paint_uses(&b), 0);
    assert_eq!(brush::paint_color(&b), None);
    assert_eq!(brush::charge(&b), None);
    assert!(!brush::is_foil(&b));
    assert!(b.custom_data().is_none());
}

#[test]
fn charging_tops_up_same_color_and_caps() {
    let mut b = tools::paint_brush();
    brush::charge_brush(&mut b, DyeColor::Red, 32, 128);
    assert_eq!(brush::charge(&b), Some((DyeColor::Red, 32)));
    assert!(brush::is_foil(&b));

    for _ in 0..4 {
        brush::charge_brush(&mut b, DyeColor::Red, 32, 128);
    }
    assert_eq!(brush::paint_uses(&b), 128);
}

#[test]
fn charging_another_color_replaces_paint() {
    let mut b = tools::paint_brush();
    brush::charge_brush(&mut b, DyeColor::Red, 100, 128);
    brush::charge_brush(&mut b, DyeColor::Blue, 32, 128);
    assert_eq!(brush::charge(&b), Some((DyeColor::Blue, 32)));
}

#[test]
fn last_use_clears_the_charge() {
    let mut b = tools::paint_brush();
    brush::charge_brush(&mut b, DyeColor::Green, 2, 128);
    brush::consume_use(&mut b);
    assert_eq!(brush::charge(&b), Some((DyeColor::Green, 1)));
    brush::consume_use(&mut b);
    assert_eq!(brush::paint_uses(&b), 0);
    assert_eq!(brush::paint_color(&b), None);
    assert!(b.custom_data().is_none());
}

#[test]
fn legacy_upper_case_color_is_read() {
    let mut b = tools::paint_brush();
    b.put_string("PaintColor", "LIGHT_GRAY");
    b.put_int("PaintUses", 5);
    assert_eq!(brush::charge(&b), Some((DyeColor::LightGray, 5)));
}

#[test]
fn brush_tooltip() {
    let mut b = tools::paint_brush();
    let empty = brush::tooltip(&b, 128);
    assert!(empty.contains(&"No paint loaded".to_string()));

    brush::charge_brush(&mut b, DyeColor::LightGray, 40, 128);
    let lines = brush::tooltip(&b, 128);
    assert_eq!(lines[0], "Paint: Light Gray");
    assert_eq!(lines[1], "Uses: 40/128");
    assert!(lines.last().unwrap().contains("paint blocks"));
}

// ---------------------------------------------------------------------------
// Paint bucket
// ---------------------------------------------------------------------------

#[test]
fn bucket_counts_down() {
    let mut actor = Actor::new("Painter");
    let mut stack = tools::paint_bucket(DyeColor::Cyan);
    assert_eq!(bucket::remaining(&stack), bucket::MAX_PAINTS);

    bucket::consume_one(&mut stack, &mut actor);
    assert_eq!(bucket::remaining(&stack), bucket::MAX_PAINTS - 1);
    assert_eq!(stack.count(), 1);
    assert!(bucket::tooltip(&stack)[1].contains("31"));
}

#[test]
fn creative_bucket_never_empties() {
    let mut actor = Actor::new("Painter");
    actor.creative = true;
    let mut stack = tools::paint_bucket(DyeColor::Cyan);
    bucket::set_remaining(&mut stack, 1);
    bucket::consume_one(&mut stack, &mut actor);
    assert_eq!(bucket::remaining(&stack), 1);
    assert_eq!(stack.count(), 1);
}

#[test]
fn last_paint_returns_an_empty_bucket() {
    let mut actor = Actor::new("Painter");
    let mut stack = tools::paint_bucket(DyeColor::Cyan).copy_with_count(3);
    bucket::set_remaining(&mut stack, 1);

    bucket::consume_one(&mut stack, &mut actor);
    assert_eq!(stack.count(), 2);
    assert_eq!(bucket::remaining(&stack), bucket::MAX_PAINTS);
    assert!(actor.inventory.iter().any(|s| s.is(tools::EMPTY_PAINT_BUCKET)));
    assert!(actor.dropped.is_empty());
}

#[test]
fn empty_bucket_is_dropped_when_inventory_is_full() {
    let mut actor = Actor::new("Painter");
    actor.inventory = vec![ItemStack::new("minecraft:stone", 64); INVENTORY_SLOTS];
    let mut stack = tools::paint_bucket(DyeColor::Cyan);
    bucket::set_remaining(&mut stack, 1);

    bucket::consume_one(&mut stack, &mut actor);
    assert!(stack.is_empty());
    assert_eq!(actor.dropped.len(), 1);
    assert!(actor.dropped[0].is(tools::EMPTY_PAINT_BUCKET));
}

#[test]
fn empty_buckets_merge_in_inventory() {
    let mut actor = Actor::new("Painter");
    actor.give_or_drop(tools::empty_paint_bucket());
    actor.give_or_drop(tools::empty_paint_bucket());
    let buckets: Vec<_> = actor
        .inventory
        .iter()
        .filter(|s| s.is(tools::EMPTY_PAINT_BUCKET))
        .collect();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].count(), 2);
}

// ---------------------------------------------------------------------------
// Brush charging recipe
// ---------------------------------------------------------------------------

#[test]
fn recipe_needs_one_brush_and_one_bucket() {
    let recipe = BrushChargeRecipe::default();
    let b = tools::paint_brush();
    let red = tools::paint_bucket(DyeColor::Red);

    assert!(recipe.matches(&[b.clone(), ItemStack::empty(), red.clone()]));
    assert!(!recipe.matches(&[b.clone()]));
    assert!(!recipe.matches(&[red.clone()]));
    assert!(!recipe.matches(&[b.clone(), red.clone(), red.clone()]));
    assert!(!recipe.matches(&[b.clone(), tools::empty_paint_bucket()]));
    assert!(!recipe.matches(&[b, red, ItemStack::new("minecraft:stick", 1)]));
}

#[test]
fn recipe_charges_the_brush() {
    let recipe = BrushChargeRecipe::default();
    let mut charged = tools::paint_brush();
    brush::charge_brush(&mut charged, DyeColor::Red, 110, 128);
    let grid = [charged, tools::paint_bucket(DyeColor::Red)];

    let out = recipe.assemble(&grid).unwrap();
    assert_eq!(brush::charge(&out), Some((DyeColor::Red, 128)));
    assert_eq!(out.count(), 1);

    let left = recipe.remaining_items(&grid);
    assert!(left[0].is_empty());
    assert!(left[1].is(tools::EMPTY_PAINT_BUCKET));

    assert!(recipe.assemble(&[tools::paint_brush()]).is_none());
}

#[test]
fn recipe_follows_paint_config() {
    let config = chisel_server::config::PaintConfig {
        bucket_charge: 10,
        brush_capacity: 15,
    };
    let recipe = BrushChargeRecipe::from(&config);
    let grid = [tools::paint_brush(), tools::paint_bucket(DyeColor::Pink)];
    let once = recipe.assemble(&grid).unwrap();
    assert_eq!(brush::paint_uses(&once), 10);
    let twice = recipe
        .assemble(&[once, tools::paint_bucket(DyeColor::Pink)])
        .unwrap();
    assert_eq!(brush::paint_uses(&twice), 15);
}

// ---------------------------------------------------------------------------
// Paxel
// ---------------------------------------------------------------------------

#[test]
fn paxel_stats_per_tier() {
    let iron = Paxel::new(Tier::Iron);
    let diamond = Paxel::new(Tier::Diamond);
    let netherite = Paxel::new(Tier::Netherite);

    assert_eq!(iron.max_damage(), 1500);
    assert_eq!(diamond.max_damage(), 9366);
    assert_eq!(netherite.max_damage(), 12186);

    assert_eq!(iron.attack_damage(), 6.0);
    assert_eq!(netherite.attack_damage(), 8.0);
    assert!(Tier::Netherite.fire_resistant());
    assert!(!Tier::Diamond.fire_resistant());
    assert_eq!(Tier::Diamond.repair_item(), "minecraft:diamond");
}

#[test]
fn paxel_mining() {
    let iron = Paxel::new(Tier::Iron);
    let diamond = Paxel::new(Tier::Diamond);

    assert!((diamond.destroy_speed(&[BlockTag::MineableWithAxe]) - 8.8).abs() < 1e-4);
    assert!((diamond.destroy_speed(&[BlockTag::Wool]) - 8.8).abs() < 1e-4);
    assert_eq!(diamond.destroy_speed(&[]), 1.0);

    let obsidian = [BlockTag::MineableWithPickaxe, BlockTag::NeedsDiamondTool];
    assert!(diamond.is_correct_tool_for_drops(&obsidian));
    assert!(!iron.is_correct_tool_for_drops(&obsidian));
    assert!(iron.is_correct_tool_for_drops(&[BlockTag::MineableWithShovel]));
    assert!(!diamond.is_correct_tool_for_drops(&[BlockTag::Leaves]));
}

#[test]
fn paxel_wears_out_and_breaks() {
    let paxel = Paxel::new(Tier::Iron);
    let mut stack = tools::paxel(Tier::Iron);
    assert!(ToolAbility::ALL.iter().all(|a| paxel.can_perform(&stack, *a)));

    paxel.hurt(&mut stack);
    assert_eq!(Paxel::damage(&stack), 1);

    stack.put_int("Damage", paxel.max_damage() as i32 - 1);
    paxel.hurt(&mut stack);
    assert!(stack.is_empty());

    let mut worn = tools::paxel(Tier::Iron);
    worn.put_int("Damage", paxel.max_damage() as i32);
    assert!(paxel.is_broken(&worn));
    assert!(!paxel.can_perform(&worn, ToolAbility::AxeStrip));
}
