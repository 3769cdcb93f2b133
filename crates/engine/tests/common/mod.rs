//! Small hand-written catalog shared by the engine integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chisel_engine::paint::{DyeColor, PaintCategory, PaintClassifier};
use chisel_engine::variant::{VariantRegistry, VariantRing};
use chisel_engine::world::World;
use chisel_engine::world::block::{BlockDef, BlockState, BlockType};
use chisel_engine::world::catalog::BlockCatalog;

const HORIZONTAL: [&str; 4] = ["north", "south", "west", "east"];
const BOOL: [&str; 2] = ["true", "false"];

fn stairs(name: &str) -> BlockDef {
    BlockDef::new(name)
        .with_property("facing", HORIZONTAL)
        .with_property("half", ["top", "bottom"])
        .with_property("shape", ["straight", "inner_left", "inner_right", "outer_left", "outer_right"])
        .with_property("waterlogged", BOOL)
        .with_default("half", "bottom")
        .with_default("waterlogged", "false")
}

fn slab(name: &str) -> BlockDef {
    BlockDef::new(name)
        .with_property("type", ["top", "bottom", "double"])
        .with_property("waterlogged", BOOL)
        .with_default("type", "bottom")
        .with_default("waterlogged", "false")
}

fn door(name: &str) -> BlockDef {
    BlockDef::new(name)
        .with_property("facing", HORIZONTAL)
        .with_property("half", ["upper", "lower"])
        .with_property("hinge", ["left", "right"])
        .with_property("open", BOOL)
        .with_property("powered", BOOL)
        .with_default("half", "lower")
        .with_default("open", "false")
        .with_default("powered", "false")
}

fn trapdoor(name: &str) -> BlockDef {
    BlockDef::new(name)
        .with_property("facing", HORIZONTAL)
        .with_property("half", ["top", "bottom"])
        .with_property("open", BOOL)
        .with_property("powered", BOOL)
        .with_property("waterlogged", BOOL)
        .with_default("half", "bottom")
        .with_default("open", "false")
        .with_default("powered", "false")
        .with_default("waterlogged", "false")
}

fn candle(name: &str) -> BlockDef {
    BlockDef::new(name)
        .with_property("candles", ["1", "2", "3", "4"])
        .with_property("lit", BOOL)
        .with_property("waterlogged", BOOL)
        .with_default("lit", "false")
        .with_default("waterlogged", "false")
}

fn shulker(name: &str) -> BlockDef {
    BlockDef::new(name)
        .with_property("facing", ["down", "up", "north", "south", "west", "east"])
        .with_default("facing", "up")
        .container(27)
}

pub fn catalog() -> Arc<BlockCatalog> {
    let mut b = BlockCatalog::builder();
    b.add(BlockDef::new("air").air())
        .add(BlockDef::new("short_grass").replaceable())
        .add(BlockDef::new("stone"))
        .add(stairs("stone_stairs"))
        .add(slab("stone_slab"))
        .add(BlockDef::new("stone_bricks"))
        .add(BlockDef::new("oak_planks"))
        .add(stairs("oak_stairs"))
        .add(slab("oak_slab"))
        .add(door("oak_door"))
        .add(trapdoor("oak_trapdoor"))
        .add(
            BlockDef::new("oak_fence")
                .with_property("north", BOOL)
                .with_property("east", BOOL)
                .with_property("south", BOOL)
                .with_property("west", BOOL)
                .with_property("waterlogged", BOOL)
                .with_default("north", "false")
                .with_default("east", "false")
                .with_default("south", "false")
                .with_default("west", "false")
                .with_default("waterlogged", "false"),
        )
        .add(BlockDef::new("diamond_block"))
        .add(BlockDef::new("dirt"))
        .add(BlockDef::new("terracotta"))
        .add(BlockDef::new("chest").with_property("type", ["single", "left", "right"]).container(27))
        .add(candle("candle"))
        .add(shulker("shulker_box"));

    for color in DyeColor::ALL {
        let c = color.name();
        b.add(BlockDef::new(format!("{c}_wool")))
            .add(
                BlockDef::new(format!("{c}_bed"))
                    .with_property("facing", HORIZONTAL)
                    .with_property("occupied", BOOL)
                    .with_property("part", ["head", "foot"])
                    .with_default("occupied", "false")
                    .with_default("part", "foot"),
            )
            .add(candle(&format!("{c}_candle")))
            .add(shulker(&format!("{c}_shulker_box")))
            .add(BlockDef::new(format!("{c}_banner")).with_property(
                "rotation",
                (0..16).map(|r| r.to_string()),
            ))
            .add(BlockDef::new(format!("{c}_wall_banner")).with_property("facing", HORIZONTAL));
    }

    Arc::new(b.build().expect("fixture catalog is valid"))
}

pub fn block(catalog: &BlockCatalog, name: &str) -> BlockType {
    catalog
        .by_name(name)
        .unwrap_or_else(|| panic!("fixture has no block {name}"))
}

/// Default state of `name` with `props` applied.
pub fn state(catalog: &BlockCatalog, name: &str, props: &[(&str, &str)]) -> BlockState {
    props.iter().fold(
        catalog.default_state(block(catalog, name)),
        |s, (k, v)| {
            catalog
                .with_value(s, k, v)
                .unwrap_or_else(|| panic!("{name} rejects {k}={v}"))
        },
    )
}

pub fn ring(catalog: &BlockCatalog, family: &str, names: &[&str]) -> VariantRing {
    names
        .iter()
        .fold(VariantRing::builder(family), |b, n| b.add_named(catalog, n))
        .build()
        .expect("fixture ring is valid")
}

pub fn registry(catalog: &BlockCatalog) -> VariantRegistry {
    let mut registry = VariantRegistry::new();
    registry
        .rebuild([
            ring(catalog, "stone", &["stone", "stone_stairs", "stone_slab", "stone_bricks"]),
            ring(
                catalog,
                "oak",
                &["oak_planks", "oak_stairs", "oak_slab", "oak_door", "oak_trapdoor", "oak_fence"],
            ),
            ring(catalog, "diamond", &["diamond_block"]),
        ])
        .expect("fixture rings are disjoint");
    registry
}

pub fn palette(catalog: &BlockCatalog) -> PaintClassifier {
    PaintClassifier::builder()
        .colored_by_name(catalog, PaintCategory::Wool, |c| format!("{}_wool", c.name()))
        .colored_by_name(catalog, PaintCategory::Bed, |c| format!("{}_bed", c.name()))
        .colored_by_name(catalog, PaintCategory::Candle, |c| format!("{}_candle", c.name()))
        .uncolored_by_name(catalog, PaintCategory::Candle, "candle")
        .colored_by_name(catalog, PaintCategory::ShulkerBox, |c| {
            format!("{}_shulker_box", c.name())
        })
        .uncolored_by_name(catalog, PaintCategory::ShulkerBox, "shulker_box")
        .colored_by_name(catalog, PaintCategory::Banner, |c| format!("{}_banner", c.name()))
        .colored_by_name(catalog, PaintCategory::WallBanner, |c| {
            format!("{}_wall_banner", c.name())
        })
        .build()
        .expect("fixture palette is valid")
}

pub fn world() -> World {
    World::new(catalog())
}
