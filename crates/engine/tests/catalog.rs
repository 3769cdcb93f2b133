//! Catalog layout and the in-memory world.

mod common;

use chisel_engine::error::ConfigError;
use chisel_engine::world::UpdateFlags;
use chisel_engine::world::block::{BlockDef, BlockState, BlockType};
use chisel_engine::world::catalog::BlockCatalog;
use chisel_engine::world::item::ItemStack;
use chisel_engine::world::position::{BlockPos, Direction};

use common::{block, state};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn air_is_zero() {
    let catalog = common::catalog();
    assert_eq!(catalog.by_name("air"), Some(BlockType::AIR));
    assert_eq!(catalog.default_state(BlockType::AIR), BlockState::AIR);
    assert!(catalog.is_air(BlockState::AIR));
    assert!(catalog.is_replaceable(BlockState::AIR));
}

#[test]
fn defaults_are_applied() {
    let catalog = common::catalog();
    let door = catalog.default_state(block(&catalog, "oak_door"));
    assert_eq!(catalog.value(door, "facing"), Some("north"));
    assert_eq!(catalog.value(door, "half"), Some("lower"));
    assert_eq!(catalog.value(door, "open"), Some("false"));
    assert_eq!(catalog.value(door, "color"), None);
}

#[test]
fn with_value_changes_one_property() {
    let catalog = common::catalog();
    let stairs = state(&catalog, "oak_stairs", &[("facing", "east"), ("half", "top")]);
    assert_eq!(catalog.block_of(stairs), block(&catalog, "oak_stairs"));
    assert_eq!(catalog.value(stairs, "facing"), Some("east"));
    assert_eq!(catalog.value(stairs, "half"), Some("top"));
    assert_eq!(catalog.value(stairs, "shape"), Some("straight"));
    assert_eq!(catalog.value(stairs, "waterlogged"), Some("false"));

    assert_eq!(catalog.with_value(stairs, "facing", "up"), None);
    assert_eq!(catalog.with_value(stairs, "hinge", "left"), None);
}

#[test]
fn every_state_of_a_type_is_distinct() {
    let catalog = common::catalog();
    let mut seen = std::collections::HashSet::new();
    for facing in ["north", "south", "west", "east"] {
        for half in ["upper", "lower"] {
            for hinge in ["left", "right"] {
                let s = state(&catalog, "oak_door", &[("facing", facing), ("half", half), ("hinge", hinge)]);
                assert!(seen.insert(s), "state collision for {}", catalog.describe(s));
            }
        }
    }
}

#[test]
fn describe_lists_properties() {
    let catalog = common::catalog();
    let slab = state(&catalog, "stone_slab", &[("type", "top")]);
    assert_eq!(catalog.describe(slab), "stone_slab[type=top,waterlogged=false]");
    let stone = catalog.default_state(block(&catalog, "stone"));
    assert_eq!(catalog.describe(stone), "stone");
}

#[test]
fn catalog_rejects_bad_tables() {
    let mut b = BlockCatalog::builder();
    b.add(BlockDef::new("stone"));
    assert_eq!(b.build().err(), Some(ConfigError::MissingAir));

    let mut b = BlockCatalog::builder();
    b.add(BlockDef::new("air").air()).add(BlockDef::new("stone")).add(BlockDef::new("stone"));
    assert_eq!(b.build().err(), Some(ConfigError::DuplicateBlock("stone".into())));

    let mut b = BlockCatalog::builder();
    b.add(BlockDef::new("air").air())
        .add(BlockDef::new("lamp").with_property("lit", ["true", "false"]).with_default("lit", "maybe"));
    assert_eq!(
        b.build().err(),
        Some(ConfigError::InvalidDefault {
            block: "lamp".into(),
            property: "lit".into(),
            value: "maybe".into(),
        })
    );
}

#[test]
fn catalog_rejects_state_overflow() {
    let mut b = BlockCatalog::builder();
    b.add(BlockDef::new("air").air());
    for i in 0..5 {
        b.add(BlockDef::new(format!("big_{i}")).with_property("level", (0..16_000).map(|n| n.to_string())));
    }
    assert_eq!(b.build().err(), Some(ConfigError::TooManyStates));
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

#[test]
fn directions_round_trip_by_name() {
    for dir in Direction::ALL {
        assert_eq!(Direction::from_name(dir.name()), Some(dir));
        assert_eq!(dir.opposite().opposite(), dir);
    }
    let p = BlockPos::new(0, 64, 0);
    assert_eq!(p.relative(Direction::North), BlockPos::new(0, 64, -1));
    assert_eq!(p.relative(Direction::East), BlockPos::new(1, 64, 0));
    assert_eq!(p.above().below(), p);
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

#[test]
fn untouched_world_reads_air() {
    let world = common::world();
    assert_eq!(world.get_block(BlockPos::new(5, 5, 5)), BlockState::AIR);
    assert_eq!(world.block_count(), 0);
}

#[test]
fn writes_are_journaled() {
    let world = common::world();
    let catalog = world.catalog();
    let stone = catalog.default_state(block(catalog, "stone"));
    let pos = BlockPos::new(1, 2, 3);

    world.set_block(pos, stone, UpdateFlags::DEFAULT);
    world.set_block(pos, stone, UpdateFlags::DEFAULT);
    world.set_block(pos, BlockState::AIR, UpdateFlags::REPAINT);

    let changes = world.take_changes();
    assert_eq!(changes.len(), 2, "rewriting the same state is not a change");
    assert_eq!(changes[0].new, stone);
    assert_eq!(changes[1].old, stone);
    assert!(changes[1].flags.contains(UpdateFlags::IMMEDIATE));
    assert!(world.take_changes().is_empty());
    assert_eq!(world.block_count(), 0);
}

#[test]
fn replacing_a_container_drops_its_items() {
    let world = common::world();
    let catalog = world.catalog();
    let pos = BlockPos::new(0, 0, 0);
    let chest = catalog.default_state(block(catalog, "chest"));
    world.set_block(pos, chest, UpdateFlags::DEFAULT);
    world.with_block_entity(pos, |e| e.set_item(3, ItemStack::new("minecraft:apple", 5)));

    // Same type, different state keeps the container.
    let left = catalog.with_value(chest, "type", "left").unwrap();
    world.set_block(pos, left, UpdateFlags::DEFAULT);
    assert_eq!(world.block_entity(pos).unwrap().items()[3].count(), 5);
    assert!(world.take_drops().is_empty());

    world.set_block(pos, catalog.default_state(block(catalog, "stone")), UpdateFlags::DEFAULT);
    assert!(world.block_entity(pos).is_none());
    let drops = world.take_drops();
    assert_eq!(drops, vec![(pos, ItemStack::new("minecraft:apple", 5))]);
}

#[test]
fn block_entity_save_and_load() {
    let world = common::world();
    let catalog = world.catalog();
    let pos = BlockPos::new(0, 0, 0);
    world.set_block(pos, catalog.default_state(block(catalog, "shulker_box")), UpdateFlags::DEFAULT);
    world.with_block_entity(pos, |e| {
        e.set_custom_name(Some("Tools".into()));
        e.set_item(0, ItemStack::new("minecraft:torch", 64));
        e.set_item(26, ItemStack::new("minecraft:stick", 1));
    });

    let saved = world.block_entity(pos).unwrap();
    let tag = saved.save();

    let mut restored = chisel_engine::world::entity::BlockEntity::new(27);
    restored.load(&tag);
    assert_eq!(restored, saved);

    // Loading a name-only tag keeps the name and empties the slots.
    restored.load(&chisel_engine::world::entity::BlockEntity::name_tag("Renamed"));
    assert_eq!(restored.custom_name(), Some("Renamed"));
    assert!(restored.is_empty());
}

#[test]
fn item_custom_data_is_dropped_when_empty() {
    let mut stack = ItemStack::new("chisel:paint_brush", 1);
    stack.put_string("PaintColor", "red");
    stack.put_int("PaintUses", 12);
    assert_eq!(stack.get_string("PaintColor"), Some("red"));
    assert_eq!(stack.get_int("PaintUses"), Some(12));
    assert_eq!(stack.get_int("PaintColor"), None);

    stack.remove("PaintColor");
    assert!(stack.custom_data().is_some());
    stack.remove("PaintUses");
    assert!(stack.custom_data().is_none());
}
