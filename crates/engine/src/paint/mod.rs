//! Paint classification: which blocks can be repainted, and what they turn
//! into for a given dye color.

pub mod category;
pub mod color;

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::world::block::BlockType;
use crate::world::catalog::BlockCatalog;

pub use category::PaintCategory;
pub use color::DyeColor;

/// How a block participates in painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paintable {
    pub category: PaintCategory,
    /// `None` for a category's uncolored base block (plain shulker box,
    /// plain candle).
    pub color: Option<DyeColor>,
}

/// Precomputed paint tables.
///
/// Each category maps every dye color to exactly one block and no two
/// colors to the same block. The reverse index is built once, so
/// classification is a single hash lookup.
#[derive(Debug, Default)]
pub struct PaintClassifier {
    tables: HashMap<PaintCategory, [BlockType; 16]>,
    lookup: HashMap<BlockType, Paintable>,
}

impl PaintClassifier {
    pub fn builder() -> PaintClassifierBuilder {
        PaintClassifierBuilder::default()
    }

    pub fn classify(&self, block: BlockType) -> Option<Paintable> {
        self.lookup.get(&block).copied()
    }

    pub fn is_paintable(&self, block: BlockType) -> bool {
        self.lookup.contains_key(&block)
    }

    /// The block of `category` dyed `color`.
    pub fn block_for(&self, category: PaintCategory, color: DyeColor) -> Option<BlockType> {
        self.tables.get(&category).map(|t| t[color.index()])
    }

    pub fn category_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of blocks that can be painted, colored or not.
    pub fn paintable_count(&self) -> usize {
        self.lookup.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = PaintCategory> + '_ {
        self.tables.keys().copied()
    }
}

#[derive(Debug, Default)]
struct CategoryTable {
    colored: [Option<BlockType>; 16],
    collision: Option<(DyeColor, DyeColor, BlockType)>,
    uncolored: Vec<BlockType>,
}

/// Collects paint tables and validates them on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct PaintClassifierBuilder {
    categories: Vec<(PaintCategory, CategoryTable)>,
    unresolved: Option<(PaintCategory, String)>,
}

impl PaintClassifierBuilder {
    fn table(&mut self, category: PaintCategory) -> &mut CategoryTable {
        let i = match self.categories.iter().position(|(c, _)| *c == category) {
            Some(i) => i,
            None => {
                self.categories.push((category, CategoryTable::default()));
                self.categories.len() - 1
            }
        };
        &mut self.categories[i].1
    }

    /// Map `color` to `block` within `category`.
    pub fn colored(mut self, category: PaintCategory, color: DyeColor, block: BlockType) -> Self {
        let table = self.table(category);
        if table.collision.is_none() {
            let other = DyeColor::ALL
                .into_iter()
                .find(|c| *c != color && table.colored[c.index()] == Some(block));
            if let Some(other) = other {
                table.collision = Some((other, color, block));
            }
        }
        table.colored[color.index()] = Some(block);
        self
    }

    /// Add an uncolored base block to `category`: paintable, but never a
    /// paint destination.
    pub fn uncolored(mut self, category: PaintCategory, block: BlockType) -> Self {
        self.table(category).uncolored.push(block);
        self
    }

    /// Fill `category` by formatting each color's name into a block name.
    pub fn colored_by_name(
        mut self,
        catalog: &BlockCatalog,
        category: PaintCategory,
        name_of: impl Fn(DyeColor) -> String,
    ) -> Self {
        for color in DyeColor::ALL {
            let name = name_of(color);
            match catalog.by_name(&name) {
                Some(block) => self = self.colored(category, color, block),
                None => self.note_unresolved(category, name),
            }
        }
        self
    }

    pub fn uncolored_by_name(mut self, catalog: &BlockCatalog, category: PaintCategory, name: &str) -> Self {
        match catalog.by_name(name) {
            Some(block) => self = self.uncolored(category, block),
            None => self.note_unresolved(category, name.to_string()),
        }
        self
    }

    fn note_unresolved(&mut self, category: PaintCategory, name: String) {
        if self.unresolved.is_none() {
            self.unresolved = Some((category, name));
        }
    }

    /// # Errors
    ///
    /// [`ConfigError::UnknownPaintBlock`] for an unresolved name,
    /// [`ConfigError::ColorCollision`] when two colors share a block,
    /// [`ConfigError::MissingColor`] for a gap in a table, and
    /// [`ConfigError::OverlappingCategory`] when a block appears twice.
    pub fn build(self) -> Result<PaintClassifier, ConfigError> {
        if let Some((category, name)) = self.unresolved {
            return Err(ConfigError::UnknownPaintBlock { category, name });
        }

        let mut classifier = PaintClassifier::default();
        for (category, table) in self.categories {
            if let Some((first, second, block)) = table.collision {
                return Err(ConfigError::ColorCollision {
                    category,
                    first,
                    second,
                    block,
                });
            }

            let mut row = [BlockType::AIR; 16];
            for color in DyeColor::ALL {
                row[color.index()] = table.colored[color.index()]
                    .ok_or(ConfigError::MissingColor { category, color })?;
            }

            let entries = DyeColor::ALL
                .into_iter()
                .map(|c| (row[c.index()], Some(c)))
                .chain(table.uncolored.iter().map(|b| (*b, None)));
            for (block, color) in entries {
                if let Some(existing) = classifier.lookup.get(&block) {
                    return Err(ConfigError::OverlappingCategory {
                        block,
                        first: existing.category,
                        second: category,
                    });
                }
                classifier.lookup.insert(block, Paintable { category, color });
            }
            classifier.tables.insert(category, row);
        }

        tracing::debug!(
            "Paint classifier built: {} categories, {} paintable blocks",
            classifier.category_count(),
            classifier.paintable_count()
        );
        Ok(classifier)
    }
}
