//! Minecraft block catalog.
//!
//! Every block and property domain comes straight from azalea-block's state
//! table for MC 1.21.11, so the tools see exactly the vanilla block set. The
//! host flags the engine needs (air, replaceable, container slots) are
//! assigned here by block name.

use std::collections::HashMap;
use std::sync::LazyLock;

use azalea_block::{BlockState as McState, BlockTrait};
use azalea_registry::builtin::BlockKind;
use indexmap::IndexMap;

use chisel_engine::error::ConfigError;
use chisel_engine::world::block::{BlockDef, BlockState};
use chisel_engine::world::catalog::BlockCatalog;

// ── Host flags ──────────────────────────────────────────────────────────────

const AIR_BLOCKS: &[&str] = &["air", "cave_air", "void_air"];

/// Members of the vanilla `#replaceable` block tag (besides air).
const REPLACEABLE: &[&str] = &[
    "water",
    "lava",
    "short_grass",
    "fern",
    "dead_bush",
    "bush",
    "seagrass",
    "tall_seagrass",
    "fire",
    "soul_fire",
    "snow",
    "vine",
    "glow_lichen",
    "resin_clump",
    "light",
    "tall_grass",
    "large_fern",
    "structure_void",
    "crimson_roots",
    "warped_roots",
    "nether_sprouts",
    "hanging_roots",
    "leaf_litter",
];

/// Container slot count for block-entity bearing blocks the tools can touch.
fn container_slots(name: &str) -> usize {
    match name {
        n if n == "shulker_box" || n.ends_with("_shulker_box") => 27,
        "chest" | "trapped_chest" | "barrel" => 27,
        "dispenser" | "dropper" => 9,
        "hopper" | "brewing_stand" => 5,
        "furnace" | "smoker" | "blast_furnace" => 3,
        _ => 0,
    }
}

// ── azalea state table ──────────────────────────────────────────────────────

/// One vanilla block: property domains in first-seen order, plus the states
/// it owns.
#[derive(Default)]
struct McBlock {
    properties: IndexMap<String, Vec<String>>,
    states: Vec<(u32, Vec<(String, String)>)>,
}

/// Vanilla blocks grouped by name, in protocol id order. Air comes first.
static MC_BLOCKS: LazyLock<IndexMap<String, McBlock>> = LazyLock::new(|| {
    let mut blocks: IndexMap<String, McBlock> = IndexMap::new();
    for id in 0..=McState::MAX_STATE {
        let Ok(state) = McState::try_from(id as u32) else {
            continue;
        };
        let block: Box<dyn BlockTrait> = Box::<dyn BlockTrait>::from(state);
        let entry = blocks.entry(block.id().to_string()).or_default();
        let mut props: Vec<(String, String)> = block
            .property_map()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        props.sort();
        for (k, v) in &props {
            let domain = entry.properties.entry(k.clone()).or_default();
            if !domain.contains(v) {
                domain.push(v.clone());
            }
        }
        entry.states.push((id as u32, props));
    }
    blocks
});

/// Vanilla default property values of `name`.
fn default_properties(name: &str) -> Vec<(String, String)> {
    let Ok(kind) = name.parse::<BlockKind>() else {
        return Vec::new();
    };
    let block: Box<dyn BlockTrait> = Box::<dyn BlockTrait>::from(McState::from(kind));
    block
        .property_map()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn block_def(name: &str, mc: &McBlock) -> BlockDef {
    let mut def = BlockDef::new(name);
    for (prop, domain) in &mc.properties {
        def = def.with_property(prop.clone(), domain.iter().cloned());
    }
    for (prop, value) in default_properties(name) {
        def = def.with_default(&prop, value);
    }
    if AIR_BLOCKS.contains(&name) {
        def = def.air();
    } else if REPLACEABLE.contains(&name) {
        def = def.replaceable();
    }
    match container_slots(name) {
        0 => def,
        slots => def.container(slots),
    }
}

/// Build the engine catalog for every vanilla block.
pub fn minecraft_catalog() -> Result<BlockCatalog, ConfigError> {
    let mut builder = BlockCatalog::builder();
    for (name, mc) in MC_BLOCKS.iter() {
        builder.add(block_def(name, mc));
    }
    let catalog = builder.build()?;
    tracing::info!(
        "Minecraft catalog: {} blocks, {} states",
        catalog.block_count(),
        catalog.state_count()
    );
    Ok(catalog)
}

// ── Protocol ids ────────────────────────────────────────────────────────────

/// Reverse lookup: `(name, sorted properties)` → vanilla protocol state id.
static PROTOCOL_IDS: LazyLock<HashMap<(String, Vec<(String, String)>), u32>> =
    LazyLock::new(|| {
        MC_BLOCKS
            .iter()
            .flat_map(|(name, mc)| {
                mc.states
                    .iter()
                    .map(move |(id, props)| ((name.clone(), props.clone()), *id))
            })
            .collect()
    });

/// Vanilla protocol state id of an engine state from [`minecraft_catalog`].
pub fn protocol_id(catalog: &BlockCatalog, state: BlockState) -> Option<u32> {
    let name = catalog.name(catalog.block_of(state)).to_string();
    let mut props: Vec<(String, String)> = catalog
        .values(state)
        .map(|(p, v)| (p.name().to_string(), v.to_string()))
        .collect();
    props.sort();
    PROTOCOL_IDS.get(&(name, props)).copied()
}

/// Engine state for a vanilla protocol state id. Unknown ids map to air.
pub fn from_protocol_id(catalog: &BlockCatalog, id: u32) -> BlockState {
    let Ok(state) = McState::try_from(id) else {
        return BlockState::AIR;
    };
    let block: Box<dyn BlockTrait> = Box::<dyn BlockTrait>::from(state);
    let Some(ty) = catalog.by_name(block.id()) else {
        tracing::warn!("Unknown vanilla block {}, defaulting to air", block.id());
        return BlockState::AIR;
    };
    block
        .property_map()
        .into_iter()
        .fold(catalog.default_state(ty), |s, (k, v)| {
            catalog
                .with_value(s, &k.to_string(), &v.to_string())
                .unwrap_or(s)
        })
}
