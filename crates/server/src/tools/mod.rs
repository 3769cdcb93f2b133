//! Tool items: ids, constructors, and per-tool behavior.

pub mod brush;
pub mod bucket;
pub mod hammer;
pub mod paxel;
pub mod recipe;

use chisel_engine::paint::DyeColor;
use chisel_engine::world::item::ItemStack;

use paxel::Tier;

pub const NAMESPACE: &str = "chisel";

pub const CONSTRUCTION_HAMMER: &str = "chisel:construction_hammer";
pub const PAINT_BRUSH: &str = "chisel:paint_brush";
pub const EMPTY_PAINT_BUCKET: &str = "chisel:empty_paint_bucket";

/// What a held item is, as far as the tools are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Hammer,
    Brush,
    PaintBucket(DyeColor),
    EmptyPaintBucket,
    Paxel(Tier),
}

impl ToolKind {
    pub fn of(stack: &ItemStack) -> Option<ToolKind> {
        if stack.is_empty() {
            return None;
        }
        match stack.id() {
            CONSTRUCTION_HAMMER => Some(ToolKind::Hammer),
            PAINT_BRUSH => Some(ToolKind::Brush),
            EMPTY_PAINT_BUCKET => Some(ToolKind::EmptyPaintBucket),
            id => {
                let path = id.strip_prefix(NAMESPACE)?.strip_prefix(':')?;
                if let Some(color) = path.strip_suffix("_paint_bucket") {
                    return DyeColor::from_name(color).map(ToolKind::PaintBucket);
                }
                let tier = path.strip_suffix("_paxel")?;
                Tier::ALL
                    .into_iter()
                    .find(|t| t.name() == tier)
                    .map(ToolKind::Paxel)
            }
        }
    }

    /// Maximum stack size of the item.
    pub fn max_stack(self) -> u32 {
        match self {
            ToolKind::PaintBucket(_) | ToolKind::EmptyPaintBucket => 64,
            _ => 1,
        }
    }
}

pub fn paint_bucket_id(color: DyeColor) -> String {
    format!("{}:{}_paint_bucket", NAMESPACE, color.name())
}

pub fn paxel_id(tier: Tier) -> String {
    format!("{}:{}_paxel", NAMESPACE, tier.name())
}

pub fn construction_hammer() -> ItemStack {
    ItemStack::new(CONSTRUCTION_HAMMER, 1)
}

pub fn paint_brush() -> ItemStack {
    ItemStack::new(PAINT_BRUSH, 1)
}

pub fn paint_bucket(color: DyeColor) -> ItemStack {
    ItemStack::new(paint_bucket_id(color), 1)
}

pub fn empty_paint_bucket() -> ItemStack {
    ItemStack::new(EMPTY_PAINT_BUCKET, 1)
}

pub fn paxel(tier: Tier) -> ItemStack {
    ItemStack::new(paxel_id(tier), 1)
}
