//! Paxel: pickaxe, axe, shovel, hoe, sword and shears in one tool.

use chisel_engine::transform::carry_over;
use chisel_engine::world::UpdateFlags;
use chisel_engine::world::access::BlockWorld;
use chisel_engine::world::block::BlockState;
use chisel_engine::world::catalog::BlockCatalog;
use chisel_engine::world::item::ItemStack;
use chisel_engine::world::position::BlockPos;

const DURABILITY_MULT: u32 = 6;
const SPEED_MULT: f32 = 1.1;
const BASE_ATTACK_DAMAGE: f32 = 4.0;
/// Between a sword (-2.4) and an axe (-3.1).
pub const ATTACK_SPEED: f32 = -2.6;

const DAMAGE: &str = "Damage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Iron,
    Diamond,
    Netherite,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Iron, Tier::Diamond, Tier::Netherite];

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Iron => "iron",
            Tier::Diamond => "diamond",
            Tier::Netherite => "netherite",
        }
    }

    pub const fn uses(self) -> u32 {
        match self {
            Tier::Iron => 250,
            Tier::Diamond => 1561,
            Tier::Netherite => 2031,
        }
    }

    pub const fn speed(self) -> f32 {
        match self {
            Tier::Iron => 6.0,
            Tier::Diamond => 8.0,
            Tier::Netherite => 9.0,
        }
    }

    pub const fn attack_damage_bonus(self) -> f32 {
        match self {
            Tier::Iron => 2.0,
            Tier::Diamond => 3.0,
            Tier::Netherite => 4.0,
        }
    }

    pub const fn enchantment_value(self) -> u32 {
        match self {
            Tier::Iron => 14,
            Tier::Diamond => 10,
            Tier::Netherite => 15,
        }
    }

    pub const fn repair_item(self) -> &'static str {
        match self {
            Tier::Iron => "minecraft:iron_ingot",
            Tier::Diamond => "minecraft:diamond",
            Tier::Netherite => "minecraft:netherite_ingot",
        }
    }

    /// Only iron is too weak for anything (the `needs_diamond_tool` blocks).
    fn too_weak_for(self, tags: &[BlockTag]) -> bool {
        self == Tier::Iron && tags.contains(&BlockTag::NeedsDiamondTool)
    }

    /// Netherite survives fire and lava as a dropped item.
    pub const fn fire_resistant(self) -> bool {
        matches!(self, Tier::Netherite)
    }
}

/// Block tags the paxel cares about. The host supplies them per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    MineableWithPickaxe,
    MineableWithAxe,
    MineableWithShovel,
    MineableWithHoe,
    Leaves,
    Wool,
    SwordEfficient,
    NeedsDiamondTool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolAbility {
    PickaxeDig,
    AxeDig,
    AxeStrip,
    AxeScrape,
    AxeWaxOff,
    ShovelDig,
    ShovelFlatten,
    HoeTill,
    SwordDig,
    SwordSweep,
    ShearsDig,
    ShearsCarve,
    ShearsDisarm,
    ShearsHarvest,
}

impl ToolAbility {
    pub const ALL: [ToolAbility; 14] = [
        ToolAbility::PickaxeDig,
        ToolAbility::AxeDig,
        ToolAbility::AxeStrip,
        ToolAbility::AxeScrape,
        ToolAbility::AxeWaxOff,
        ToolAbility::ShovelDig,
        ToolAbility::ShovelFlatten,
        ToolAbility::HoeTill,
        ToolAbility::SwordDig,
        ToolAbility::SwordSweep,
        ToolAbility::ShearsDig,
        ToolAbility::ShearsCarve,
        ToolAbility::ShearsDisarm,
        ToolAbility::ShearsHarvest,
    ];
}

/// Right-click block modifications, in the order they are tried.
const USE_ON_ORDER: [ToolAbility; 6] = [
    ToolAbility::AxeStrip,
    ToolAbility::AxeScrape,
    ToolAbility::AxeWaxOff,
    ToolAbility::ShovelFlatten,
    ToolAbility::HoeTill,
    ToolAbility::ShearsCarve,
];

const MINEABLE: [BlockTag; 4] = [
    BlockTag::MineableWithPickaxe,
    BlockTag::MineableWithAxe,
    BlockTag::MineableWithShovel,
    BlockTag::MineableWithHoe,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paxel {
    pub tier: Tier,
}

impl Paxel {
    pub fn new(tier: Tier) -> Self {
        Self { tier }
    }

    pub fn max_damage(&self) -> u32 {
        (self.tier.uses() * DURABILITY_MULT).max(1)
    }

    pub fn attack_damage(&self) -> f32 {
        BASE_ATTACK_DAMAGE + self.tier.attack_damage_bonus()
    }

    pub fn destroy_speed(&self, tags: &[BlockTag]) -> f32 {
        let fast = MINEABLE.iter().any(|t| tags.contains(t))
            || tags.contains(&BlockTag::Leaves)
            || tags.contains(&BlockTag::Wool)
            || tags.contains(&BlockTag::SwordEfficient);
        if fast {
            self.tier.speed() * SPEED_MULT
        } else {
            1.0
        }
    }

    pub fn is_correct_tool_for_drops(&self, tags: &[BlockTag]) -> bool {
        !self.tier.too_weak_for(tags) && MINEABLE.iter().any(|t| tags.contains(t))
    }

    pub fn damage(stack: &ItemStack) -> u32 {
        stack.get_int(DAMAGE).map_or(0, |d| d.max(0) as u32)
    }

    pub fn is_broken(&self, stack: &ItemStack) -> bool {
        Self::damage(stack) >= self.max_damage()
    }

    /// Every ability, until the tool is worn out.
    pub fn can_perform(&self, stack: &ItemStack, ability: ToolAbility) -> bool {
        !self.is_broken(stack) && ToolAbility::ALL.contains(&ability)
    }

    /// Wear the tool by one point. A tool reaching its limit breaks and the
    /// stack empties.
    pub fn hurt(&self, stack: &mut ItemStack) {
        let damage = Self::damage(stack) + 1;
        if damage >= self.max_damage() {
            tracing::debug!("{} paxel broke", self.tier.name());
            stack.shrink(1);
            stack.remove(DAMAGE);
        } else {
            stack.put_int(DAMAGE, damage as i32);
        }
    }

    /// Right-click on a block: strip, scrape, unwax, flatten, till or carve,
    /// whichever applies first.
    pub fn use_on<W: BlockWorld + ?Sized>(
        &self,
        world: &W,
        pos: BlockPos,
        stack: &mut ItemStack,
    ) -> Option<ToolAbility> {
        let catalog = world.catalog();
        let current = world.block_state(pos);
        for ability in USE_ON_ORDER {
            if !self.can_perform(stack, ability) {
                continue;
            }
            let Some(modified) = tool_modified_state(catalog, current, ability) else {
                continue;
            };
            if ability == ToolAbility::ShovelFlatten && !catalog.is_air(world.block_state(pos.above())) {
                continue;
            }
            world.set_block_state(pos, modified, UpdateFlags::REPAINT);
            self.hurt(stack);
            tracing::debug!("Paxel {:?} at {:?}: {}", ability, pos, catalog.describe(modified));
            return Some(ability);
        }
        None
    }
}

const OXIDATION: [&str; 4] = ["", "exposed_", "weathered_", "oxidized_"];

/// The state `ability` turns `state` into, if any.
pub fn tool_modified_state(
    catalog: &BlockCatalog,
    state: BlockState,
    ability: ToolAbility,
) -> Option<BlockState> {
    let name = catalog.name(catalog.block_of(state));
    let target = match ability {
        ToolAbility::AxeStrip => strip_target(name)?,
        ToolAbility::AxeScrape => scrape_target(name)?,
        ToolAbility::AxeWaxOff => name.strip_prefix("waxed_")?.to_string(),
        ToolAbility::ShovelFlatten => match name {
            "grass_block" | "dirt" | "podzol" | "coarse_dirt" | "mycelium" | "rooted_dirt" => {
                "dirt_path".to_string()
            }
            _ => return None,
        },
        ToolAbility::HoeTill => match name {
            "grass_block" | "dirt_path" | "dirt" => "farmland".to_string(),
            "coarse_dirt" | "rooted_dirt" => "dirt".to_string(),
            _ => return None,
        },
        ToolAbility::ShearsCarve => match name {
            "pumpkin" => "carved_pumpkin".to_string(),
            _ => return None,
        },
        _ => return None,
    };
    let ty = catalog.by_name(&target)?;
    Some(carry_over(catalog, state, catalog.default_state(ty), |_| false))
}

fn strip_target(name: &str) -> Option<String> {
    if name.starts_with("stripped_") {
        return None;
    }
    let strippable = name == "bamboo_block"
        || ["_log", "_wood", "_stem", "_hyphae"]
            .iter()
            .any(|suffix| name.ends_with(suffix));
    strippable.then(|| format!("stripped_{}", name))
}

/// One oxidation stage back, e.g. `weathered_cut_copper` -> `exposed_cut_copper`.
fn scrape_target(name: &str) -> Option<String> {
    if name.starts_with("waxed_") {
        return None;
    }
    let (stage, rest) = OXIDATION
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, prefix)| name.strip_prefix(prefix).map(|rest| (i, rest)))?;
    if !rest.contains("copper") {
        return None;
    }
    let base = format!("{}{}", OXIDATION[stage - 1], rest);
    // Unprefixed solid copper is `copper_block`, not `copper`.
    Some(if base == "copper" { "copper_block".to_string() } else { base })
}
