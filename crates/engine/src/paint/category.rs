/// A family of color-customizable blocks with exactly one block per dye
/// color (plus, for some categories, an uncolored base block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaintCategory {
    Wool,
    Carpet,
    Terracotta,
    GlazedTerracotta,
    StainedGlass,
    StainedGlassPane,
    Concrete,
    ConcretePowder,
    ShulkerBox,
    Bed,
    Candle,
    CandleCake,
    Banner,
    WallBanner,
}

impl PaintCategory {
    pub const ALL: [PaintCategory; 14] = [
        PaintCategory::Wool,
        PaintCategory::Carpet,
        PaintCategory::Terracotta,
        PaintCategory::GlazedTerracotta,
        PaintCategory::StainedGlass,
        PaintCategory::StainedGlassPane,
        PaintCategory::Concrete,
        PaintCategory::ConcretePowder,
        PaintCategory::ShulkerBox,
        PaintCategory::Bed,
        PaintCategory::Candle,
        PaintCategory::CandleCake,
        PaintCategory::Banner,
        PaintCategory::WallBanner,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PaintCategory::Wool => "wool",
            PaintCategory::Carpet => "carpet",
            PaintCategory::Terracotta => "terracotta",
            PaintCategory::GlazedTerracotta => "glazed_terracotta",
            PaintCategory::StainedGlass => "stained_glass",
            PaintCategory::StainedGlassPane => "stained_glass_pane",
            PaintCategory::Concrete => "concrete",
            PaintCategory::ConcretePowder => "concrete_powder",
            PaintCategory::ShulkerBox => "shulker_box",
            PaintCategory::Bed => "bed",
            PaintCategory::Candle => "candle",
            PaintCategory::CandleCake => "candle_cake",
            PaintCategory::Banner => "banner",
            PaintCategory::WallBanner => "wall_banner",
        }
    }

    /// Attributes explicitly carried from the old block to the repainted one.
    pub const fn preserved_attributes(self) -> &'static [&'static str] {
        match self {
            PaintCategory::GlazedTerracotta
            | PaintCategory::ShulkerBox
            | PaintCategory::WallBanner => &["facing"],
            PaintCategory::Bed => &["facing", "part"],
            PaintCategory::Candle => &["candles", "lit"],
            PaintCategory::CandleCake => &["lit"],
            PaintCategory::Banner => &["rotation"],
            _ => &[],
        }
    }
}
