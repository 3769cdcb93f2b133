//! Minecraft paint categories: which vanilla block names make up each
//! category's sixteen colors.

use chisel_engine::error::ConfigError;
use chisel_engine::paint::{PaintCategory, PaintClassifier};
use chisel_engine::world::catalog::BlockCatalog;

/// Undyed blocks that can still be painted. Plain terracotta is not one of
/// them: it has no place in the terracotta color table.
const UNCOLORED: &[(PaintCategory, &str)] = &[
    (PaintCategory::ShulkerBox, "shulker_box"),
    (PaintCategory::Candle, "candle"),
    (PaintCategory::CandleCake, "candle_cake"),
];

/// Build the paint classifier for every category.
pub fn standard_palette(catalog: &BlockCatalog) -> Result<PaintClassifier, ConfigError> {
    let mut builder = PaintClassifier::builder();
    for category in PaintCategory::ALL {
        builder = builder.colored_by_name(catalog, category, |c| {
            format!("{}_{}", c.name(), category.name())
        });
    }
    for (category, name) in UNCOLORED {
        builder = builder.uncolored_by_name(catalog, *category, name);
    }
    let palette = builder.build()?;
    tracing::info!(
        "Paint tables: {} categories, {} paintable blocks",
        palette.category_count(),
        palette.paintable_count()
    );
    Ok(palette)
}
