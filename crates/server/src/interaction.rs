//! Tool interaction dispatch.
//!
//! The host forwards block clicks here together with the acting player.
//! Left-clicks drive the hammer and the brush, right-clicks the paxel.

use chisel_engine::error::ConfigError;
use chisel_engine::paint::PaintClassifier;
use chisel_engine::transform::{RepaintOutcome, repaint_block};
use chisel_engine::variant::VariantRegistry;
use chisel_engine::world::access::BlockWorld;
use chisel_engine::world::catalog::BlockCatalog;
use chisel_engine::world::item::ItemStack;
use chisel_engine::world::position::BlockPos;
use uuid::Uuid;

use crate::config::PaintConfig;
use crate::families::standard_registry;
use crate::paint_table::standard_palette;
use crate::tools::paxel::{Paxel, ToolAbility};
use crate::tools::recipe::BrushChargeRecipe;
use crate::tools::{ToolKind, brush, hammer};

/// Main inventory size (hotbar included).
pub const INVENTORY_SLOTS: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Main,
    Off,
}

/// The player performing an interaction.
#[derive(Debug, Clone)]
pub struct Actor {
    pub uuid: Uuid,
    pub name: String,
    /// Instant-build mode: tools never use anything up.
    pub creative: bool,
    /// Shift held.
    pub sneaking: bool,
    pub main_hand: ItemStack,
    pub off_hand: ItemStack,
    pub inventory: Vec<ItemStack>,
    /// Items that did not fit and were dropped at the actor's feet.
    pub dropped: Vec<ItemStack>,
}

impl Actor {
    /// An offline-mode player; the UUID is derived from the name.
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v3(&Uuid::NAMESPACE_URL, format!("OfflinePlayer:{}", name).as_bytes()),
            name: name.to_string(),
            creative: false,
            sneaking: false,
            main_hand: ItemStack::empty(),
            off_hand: ItemStack::empty(),
            inventory: vec![ItemStack::empty(); INVENTORY_SLOTS],
            dropped: Vec::new(),
        }
    }

    pub fn hand(&self, hand: Hand) -> &ItemStack {
        match hand {
            Hand::Main => &self.main_hand,
            Hand::Off => &self.off_hand,
        }
    }

    pub fn hand_mut(&mut self, hand: Hand) -> &mut ItemStack {
        match hand {
            Hand::Main => &mut self.main_hand,
            Hand::Off => &mut self.off_hand,
        }
    }

    /// Merge into a matching stack, else the first free slot. Returns false
    /// when the inventory is full.
    pub fn add_item(&mut self, stack: ItemStack) -> bool {
        let max = ToolKind::of(&stack).map_or(64, ToolKind::max_stack);
        let mergeable = self.inventory.iter_mut().find(|s| {
            s.id() == stack.id() && s.custom_data() == stack.custom_data() && s.count() + stack.count() <= max
        });
        if let Some(slot) = mergeable {
            slot.set_count(slot.count() + stack.count());
            return true;
        }
        match self.inventory.iter_mut().find(|s| s.is_empty()) {
            Some(slot) => {
                *slot = stack;
                true
            }
            None => false,
        }
    }

    pub fn give_or_drop(&mut self, stack: ItemStack) {
        if !self.add_item(stack.clone()) {
            tracing::debug!("Inventory of {} full, dropping {}", self.name, stack.id());
            self.dropped.push(stack);
        }
    }

    /// The hand holding a paint brush, main hand first.
    fn brush_hand(&self) -> Option<Hand> {
        [Hand::Main, Hand::Off]
            .into_iter()
            .find(|h| ToolKind::of(self.hand(*h)) == Some(ToolKind::Brush))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Notice,
}

/// Action-bar message shown to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: &'static str,
}

pub const NO_PAINT: StatusMessage = StatusMessage {
    kind: MessageKind::Error,
    text: "Brush has no paint!",
};
pub const NOT_PAINTABLE: StatusMessage = StatusMessage {
    kind: MessageKind::Error,
    text: "This block cannot be painted",
};
pub const ALREADY_THIS_COLOR: StatusMessage = StatusMessage {
    kind: MessageKind::Notice,
    text: "Block is already this color",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// Not ours; the host continues normally.
    Pass,
    /// Handled. For left-clicks this cancels block breaking.
    Consumed(Option<StatusMessage>),
}

/// Everything the tools consult, built once at startup.
pub struct ToolContext {
    pub variants: VariantRegistry,
    pub palette: PaintClassifier,
    pub recipe: BrushChargeRecipe,
}

impl ToolContext {
    pub fn standard(catalog: &BlockCatalog, paint: &PaintConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            variants: standard_registry(catalog)?,
            palette: standard_palette(catalog)?,
            recipe: BrushChargeRecipe::from(paint),
        })
    }
}

/// Left-click on the block at `pos`.
///
/// A hammer in the main hand cycles the block; a brush in either hand paints
/// it. Both cancel block breaking whatever the outcome.
pub fn on_left_click_block<W: BlockWorld + ?Sized>(
    ctx: &ToolContext,
    world: &W,
    actor: &mut Actor,
    pos: BlockPos,
) -> InteractionResult {
    if ToolKind::of(&actor.main_hand) == Some(ToolKind::Hammer) {
        hammer::strike(world, &ctx.variants, pos, actor.sneaking);
        return InteractionResult::Consumed(None);
    }

    let Some(hand) = actor.brush_hand() else {
        return InteractionResult::Pass;
    };
    InteractionResult::Consumed(paint_with_brush(ctx, world, actor, hand, pos))
}

fn paint_with_brush<W: BlockWorld + ?Sized>(
    ctx: &ToolContext,
    world: &W,
    actor: &mut Actor,
    hand: Hand,
    pos: BlockPos,
) -> Option<StatusMessage> {
    if brush::paint_uses(actor.hand(hand)) == 0 {
        return Some(NO_PAINT);
    }
    let (color, _) = brush::charge(actor.hand(hand))?;

    match repaint_block(world, &ctx.palette, pos, color) {
        RepaintOutcome::NotPaintable => Some(NOT_PAINTABLE),
        RepaintOutcome::AlreadyThisColor => Some(ALREADY_THIS_COLOR),
        RepaintOutcome::Painted { to, .. } | RepaintOutcome::PaintedSingleHalf { to, .. } => {
            if !actor.creative {
                brush::consume_use(actor.hand_mut(hand));
            }
            tracing::info!(
                "{} painted {} at ({}, {}, {}), {} uses left",
                actor.name,
                world.catalog().name(to),
                pos.x,
                pos.y,
                pos.z,
                brush::paint_uses(actor.hand(hand))
            );
            None
        }
    }
}

/// Right-click on the block at `pos` with the item in `hand`.
pub fn on_use_block<W: BlockWorld + ?Sized>(
    world: &W,
    actor: &mut Actor,
    hand: Hand,
    pos: BlockPos,
) -> InteractionResult {
    let Some(ToolKind::Paxel(tier)) = ToolKind::of(actor.hand(hand)) else {
        return InteractionResult::Pass;
    };
    let paxel = Paxel::new(tier);
    let creative = actor.creative;
    let stack = actor.hand_mut(hand);
    let before = stack.clone();
    match paxel.use_on(world, pos, stack) {
        Some(ability) => {
            if creative {
                *stack = before;
            }
            tracing::debug!("{} used {:?} at {:?}", actor.name, ability, pos);
            InteractionResult::Consumed(None)
        }
        None => InteractionResult::Pass,
    }
}

/// Abilities a paxel stack can currently perform.
pub fn paxel_abilities(stack: &ItemStack) -> Vec<ToolAbility> {
    match ToolKind::of(stack) {
        Some(ToolKind::Paxel(tier)) => ToolAbility::ALL
            .into_iter()
            .filter(|a| Paxel::new(tier).can_perform(stack, *a))
            .collect(),
        _ => Vec::new(),
    }
}
