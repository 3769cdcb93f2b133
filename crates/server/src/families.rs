//! The fixed table of Minecraft block families cycled by the construction
//! hammer.

use chisel_engine::error::ConfigError;
use chisel_engine::variant::{VariantRegistry, VariantRing};
use chisel_engine::world::catalog::BlockCatalog;

/// Number of families in [`FAMILY_TABLE`].
pub const FAMILY_COUNT: usize = 73;
/// Number of blocks across all families in [`FAMILY_TABLE`].
pub const MEMBER_COUNT: usize = 416;

/// `(family, members in cycle order)`.
pub static FAMILY_TABLE: &[(&str, &[&str])] = &[
    // ── Wood ──────────────────────────────────────────────────────────────────
    (
        "oak",
        &[
            "oak_log",
            "stripped_oak_log",
            "oak_wood",
            "stripped_oak_wood",
            "oak_planks",
            "oak_stairs",
            "oak_slab",
            "oak_fence",
            "oak_fence_gate",
            "oak_door",
            "oak_trapdoor",
            "oak_button",
            "oak_pressure_plate",
        ],
    ),
    (
        "spruce",
        &[
            "spruce_log",
            "stripped_spruce_log",
            "spruce_wood",
            "stripped_spruce_wood",
            "spruce_planks",
            "spruce_stairs",
            "spruce_slab",
            "spruce_fence",
            "spruce_fence_gate",
            "spruce_door",
            "spruce_trapdoor",
            "spruce_button",
            "spruce_pressure_plate",
        ],
    ),
    (
        "birch",
        &[
            "birch_log",
            "stripped_birch_log",
            "birch_wood",
            "stripped_birch_wood",
            "birch_planks",
            "birch_stairs",
            "birch_slab",
            "birch_fence",
            "birch_fence_gate",
            "birch_door",
            "birch_trapdoor",
            "birch_button",
            "birch_pressure_plate",
        ],
    ),
    (
        "jungle",
        &[
            "jungle_log",
            "stripped_jungle_log",
            "jungle_wood",
            "stripped_jungle_wood",
            "jungle_planks",
            "jungle_stairs",
            "jungle_slab",
            "jungle_fence",
            "jungle_fence_gate",
            "jungle_door",
            "jungle_trapdoor",
            "jungle_button",
            "jungle_pressure_plate",
        ],
    ),
    (
        "acacia",
        &[
            "acacia_log",
            "stripped_acacia_log",
            "acacia_wood",
            "stripped_acacia_wood",
            "acacia_planks",
            "acacia_stairs",
            "acacia_slab",
            "acacia_fence",
            "acacia_fence_gate",
            "acacia_door",
            "acacia_trapdoor",
            "acacia_button",
            "acacia_pressure_plate",
        ],
    ),
    (
        "dark_oak",
        &[
            "dark_oak_log",
            "stripped_dark_oak_log",
            "dark_oak_wood",
            "stripped_dark_oak_wood",
            "dark_oak_planks",
            "dark_oak_stairs",
            "dark_oak_slab",
            "dark_oak_fence",
            "dark_oak_fence_gate",
            "dark_oak_door",
            "dark_oak_trapdoor",
            "dark_oak_button",
            "dark_oak_pressure_plate",
        ],
    ),
    (
        "mangrove",
        &[
            "mangrove_log",
            "stripped_mangrove_log",
            "mangrove_wood",
            "stripped_mangrove_wood",
            "mangrove_planks",
            "mangrove_stairs",
            "mangrove_slab",
            "mangrove_fence",
            "mangrove_fence_gate",
            "mangrove_door",
            "mangrove_trapdoor",
            "mangrove_button",
            "mangrove_pressure_plate",
        ],
    ),
    (
        "cherry",
        &[
            "cherry_log",
            "stripped_cherry_log",
            "cherry_wood",
            "stripped_cherry_wood",
            "cherry_planks",
            "cherry_stairs",
            "cherry_slab",
            "cherry_fence",
            "cherry_fence_gate",
            "cherry_door",
            "cherry_trapdoor",
            "cherry_button",
            "cherry_pressure_plate",
        ],
    ),
    (
        "bamboo",
        &[
            "bamboo_block",
            "stripped_bamboo_block",
            "bamboo_planks",
            "bamboo_stairs",
            "bamboo_slab",
            "bamboo_fence",
            "bamboo_fence_gate",
            "bamboo_door",
            "bamboo_trapdoor",
            "bamboo_button",
            "bamboo_pressure_plate",
            "bamboo_mosaic",
            "bamboo_mosaic_stairs",
            "bamboo_mosaic_slab",
        ],
    ),
    (
        "crimson",
        &[
            "crimson_stem",
            "stripped_crimson_stem",
            "crimson_hyphae",
            "stripped_crimson_hyphae",
            "crimson_planks",
            "crimson_stairs",
            "crimson_slab",
            "crimson_fence",
            "crimson_fence_gate",
            "crimson_door",
            "crimson_trapdoor",
            "crimson_button",
            "crimson_pressure_plate",
        ],
    ),
    (
        "warped",
        &[
            "warped_stem",
            "stripped_warped_stem",
            "warped_hyphae",
            "stripped_warped_hyphae",
            "warped_planks",
            "warped_stairs",
            "warped_slab",
            "warped_fence",
            "warped_fence_gate",
            "warped_door",
            "warped_trapdoor",
            "warped_button",
            "warped_pressure_plate",
        ],
    ),

    // ── Stone and minerals ────────────────────────────────────────────────────
    (
        "stone",
        &[
            "stone",
            "stone_stairs",
            "stone_slab",
            "stone_button",
            "stone_pressure_plate",
            "stone_bricks",
            "stone_brick_stairs",
            "stone_brick_slab",
            "stone_brick_wall",
            "chiseled_stone_bricks",
            "cracked_stone_bricks",
            "smooth_stone",
            "smooth_stone_slab",
        ],
    ),
    (
        "cobblestone",
        &[
            "cobblestone",
            "cobblestone_stairs",
            "cobblestone_slab",
            "cobblestone_wall",
            "mossy_cobblestone",
            "mossy_cobblestone_stairs",
            "mossy_cobblestone_slab",
            "mossy_cobblestone_wall",
        ],
    ),
    (
        "deepslate",
        &[
            "deepslate",
            "cobbled_deepslate",
            "cobbled_deepslate_stairs",
            "cobbled_deepslate_slab",
            "cobbled_deepslate_wall",
            "polished_deepslate",
            "polished_deepslate_stairs",
            "polished_deepslate_slab",
            "polished_deepslate_wall",
            "deepslate_bricks",
            "deepslate_brick_stairs",
            "deepslate_brick_slab",
            "deepslate_brick_wall",
            "deepslate_tiles",
            "deepslate_tile_stairs",
            "deepslate_tile_slab",
            "deepslate_tile_wall",
            "chiseled_deepslate",
            "cracked_deepslate_bricks",
            "cracked_deepslate_tiles",
        ],
    ),
    (
        "granite",
        &[
            "granite",
            "granite_stairs",
            "granite_slab",
            "granite_wall",
            "polished_granite",
            "polished_granite_stairs",
            "polished_granite_slab",
        ],
    ),
    (
        "diorite",
        &[
            "diorite",
            "diorite_stairs",
            "diorite_slab",
            "diorite_wall",
            "polished_diorite",
            "polished_diorite_stairs",
            "polished_diorite_slab",
        ],
    ),
    (
        "andesite",
        &[
            "andesite",
            "andesite_stairs",
            "andesite_slab",
            "andesite_wall",
            "polished_andesite",
            "polished_andesite_stairs",
            "polished_andesite_slab",
        ],
    ),
    (
        "tuff",
        &[
            "tuff",
            "tuff_stairs",
            "tuff_slab",
            "tuff_wall",
            "polished_tuff",
            "polished_tuff_stairs",
            "polished_tuff_slab",
            "polished_tuff_wall",
            "tuff_bricks",
            "tuff_brick_stairs",
            "tuff_brick_slab",
            "tuff_brick_wall",
            "chiseled_tuff",
            "chiseled_tuff_bricks",
        ],
    ),
    (
        "sandstone",
        &[
            "sandstone",
            "sandstone_stairs",
            "sandstone_slab",
            "sandstone_wall",
            "smooth_sandstone",
            "smooth_sandstone_stairs",
            "smooth_sandstone_slab",
            "cut_sandstone",
            "cut_sandstone_slab",
            "chiseled_sandstone",
        ],
    ),
    (
        "red_sandstone",
        &[
            "red_sandstone",
            "red_sandstone_stairs",
            "red_sandstone_slab",
            "red_sandstone_wall",
            "smooth_red_sandstone",
            "smooth_red_sandstone_stairs",
            "smooth_red_sandstone_slab",
            "cut_red_sandstone",
            "cut_red_sandstone_slab",
            "chiseled_red_sandstone",
        ],
    ),
    (
        "brick",
        &[
            "bricks",
            "brick_stairs",
            "brick_slab",
            "brick_wall",
        ],
    ),
    (
        "prismarine",
        &[
            "prismarine",
            "prismarine_stairs",
            "prismarine_slab",
            "prismarine_wall",
            "prismarine_bricks",
            "prismarine_brick_stairs",
            "prismarine_brick_slab",
            "dark_prismarine",
            "dark_prismarine_stairs",
            "dark_prismarine_slab",
        ],
    ),
    (
        "nether_brick",
        &[
            "nether_bricks",
            "nether_brick_stairs",
            "nether_brick_slab",
            "nether_brick_wall",
            "nether_brick_fence",
            "chiseled_nether_bricks",
            "cracked_nether_bricks",
            "red_nether_bricks",
            "red_nether_brick_stairs",
            "red_nether_brick_slab",
            "red_nether_brick_wall",
        ],
    ),
    (
        "quartz",
        &[
            "quartz_block",
            "quartz_stairs",
            "quartz_slab",
            "quartz_pillar",
            "chiseled_quartz_block",
            "smooth_quartz",
            "smooth_quartz_stairs",
            "smooth_quartz_slab",
            "quartz_bricks",
        ],
    ),
    (
        "purpur",
        &[
            "purpur_block",
            "purpur_stairs",
            "purpur_slab",
            "purpur_pillar",
        ],
    ),
    (
        "end_stone",
        &[
            "end_stone",
            "end_stone_bricks",
            "end_stone_brick_stairs",
            "end_stone_brick_slab",
            "end_stone_brick_wall",
        ],
    ),
    (
        "blackstone",
        &[
            "blackstone",
            "blackstone_stairs",
            "blackstone_slab",
            "blackstone_wall",
            "polished_blackstone",
            "polished_blackstone_stairs",
            "polished_blackstone_slab",
            "polished_blackstone_wall",
            "polished_blackstone_button",
            "polished_blackstone_pressure_plate",
            "chiseled_polished_blackstone",
            "polished_blackstone_bricks",
            "polished_blackstone_brick_stairs",
            "polished_blackstone_brick_slab",
            "polished_blackstone_brick_wall",
            "cracked_polished_blackstone_bricks",
        ],
    ),

    // ── Copper ────────────────────────────────────────────────────────────────
    (
        "copper",
        &[
            "copper_block",
            "cut_copper",
            "cut_copper_stairs",
            "cut_copper_slab",
        ],
    ),
    (
        "exposed_copper",
        &[
            "exposed_copper",
            "exposed_cut_copper",
            "exposed_cut_copper_stairs",
            "exposed_cut_copper_slab",
        ],
    ),
    (
        "weathered_copper",
        &[
            "weathered_copper",
            "weathered_cut_copper",
            "weathered_cut_copper_stairs",
            "weathered_cut_copper_slab",
        ],
    ),
    (
        "oxidized_copper",
        &[
            "oxidized_copper",
            "oxidized_cut_copper",
            "oxidized_cut_copper_stairs",
            "oxidized_cut_copper_slab",
        ],
    ),

    // ── Natural ───────────────────────────────────────────────────────────────
    (
        "mud",
        &[
            "mud",
            "packed_mud",
            "mud_bricks",
            "mud_brick_stairs",
            "mud_brick_slab",
            "mud_brick_wall",
        ],
    ),
    (
        "basalt",
        &[
            "basalt",
            "polished_basalt",
            "smooth_basalt",
        ],
    ),
    ("calcite", &["calcite"]),
    (
        "amethyst",
        &[
            "amethyst_block",
            "budding_amethyst",
        ],
    ),
    ("dripstone", &["dripstone_block"]),
    (
        "obsidian",
        &[
            "obsidian",
            "crying_obsidian",
        ],
    ),
    (
        "ice",
        &[
            "ice",
            "packed_ice",
            "blue_ice",
        ],
    ),
    (
        "snow",
        &[
            "snow_block",
            "powder_snow",
        ],
    ),
    (
        "netherrack",
        &[
            "netherrack",
            "nether_wart_block",
            "warped_wart_block",
        ],
    ),
    (
        "soul",
        &[
            "soul_sand",
            "soul_soil",
        ],
    ),
    (
        "sculk",
        &[
            "sculk",
            "sculk_catalyst",
            "sculk_sensor",
            "sculk_shrieker",
            "calibrated_sculk_sensor",
        ],
    ),
    (
        "moss",
        &[
            "moss_block",
            "moss_carpet",
        ],
    ),

    // ── Utility ───────────────────────────────────────────────────────────────
    (
        "torches",
        &[
            "torch",
            "soul_torch",
            "redstone_torch",
            "lantern",
            "soul_lantern",
        ],
    ),
    (
        "froglights",
        &[
            "ochre_froglight",
            "verdant_froglight",
            "pearlescent_froglight",
        ],
    ),
    (
        "workstations",
        &[
            "crafting_table",
            "stonecutter",
            "cartography_table",
            "fletching_table",
            "smithing_table",
            "grindstone",
            "loom",
            "furnace",
            "smoker",
            "blast_furnace",
            "campfire",
            "soul_campfire",
            "anvil",
            "composter",
            "cauldron",
            "brewing_stand",
        ],
    ),
    (
        "rails",
        &[
            "rail",
            "powered_rail",
            "detector_rail",
            "activator_rail",
        ],
    ),
    (
        "dispensers",
        &[
            "dispenser",
            "dropper",
            "hopper",
        ],
    ),
    (
        "pistons",
        &[
            "piston",
            "sticky_piston",
        ],
    ),
    (
        "redstone_components",
        &[
            "repeater",
            "comparator",
        ],
    ),
    (
        "iron",
        &[
            "iron_block",
            "iron_bars",
            "iron_door",
            "iron_trapdoor",
        ],
    ),

    // ── Storage blocks ────────────────────────────────────────────────────────
    ("gold", &["gold_block"]),
    ("diamond", &["diamond_block"]),
    ("emerald", &["emerald_block"]),
    ("lapis", &["lapis_block"]),
    ("redstone", &["redstone_block"]),
    ("netherite", &["netherite_block"]),
    ("coal", &["coal_block"]),
    ("hay", &["hay_block"]),
    ("honeycomb", &["honeycomb_block"]),
    ("slime", &["slime_block"]),
    ("honey", &["honey_block"]),
    ("dried_kelp", &["dried_kelp_block"]),
    ("bone", &["bone_block"]),
    ("glowstone", &["glowstone"]),
    ("sea_lantern", &["sea_lantern"]),
    ("shroomlight", &["shroomlight"]),
    ("magma", &["magma_block"]),

    // ── Ground ────────────────────────────────────────────────────────────────
    (
        "dirt",
        &[
            "dirt",
            "coarse_dirt",
            "rooted_dirt",
            "dirt_path",
            "grass_block",
            "podzol",
            "mycelium",
        ],
    ),
    (
        "sand",
        &[
            "sand",
            "red_sand",
        ],
    ),
    ("gravel", &["gravel"]),
    (
        "bookshelf",
        &[
            "bookshelf",
            "chiseled_bookshelf",
        ],
    ),
    ("terracotta", &["terracotta"]),
];

/// Resolve every family against `catalog`.
pub fn standard_rings(catalog: &BlockCatalog) -> Result<Vec<VariantRing>, ConfigError> {
    FAMILY_TABLE
        .iter()
        .map(|(family, members)| {
            members
                .iter()
                .fold(VariantRing::builder(*family), |b, name| b.add_named(catalog, name))
                .build()
        })
        .collect()
}

/// The startup variant registry.
pub fn standard_registry(catalog: &BlockCatalog) -> Result<VariantRegistry, ConfigError> {
    let mut registry = VariantRegistry::new();
    registry.rebuild(standard_rings(catalog)?)?;
    if registry.ring_count() != FAMILY_COUNT || registry.registered_block_count() != MEMBER_COUNT {
        tracing::warn!(
            "Family table drifted: {} rings / {} blocks registered, expected {} / {}",
            registry.ring_count(),
            registry.registered_block_count(),
            FAMILY_COUNT,
            MEMBER_COUNT
        );
    }
    tracing::info!(
        "Registered {} block families covering {} blocks",
        registry.ring_count(),
        registry.registered_block_count()
    );
    Ok(registry)
}
