use std::fmt;

use indexmap::IndexSet;

use crate::error::ConfigError;
use crate::world::block::BlockType;
use crate::world::catalog::BlockCatalog;

/// An ordered, closed cycle of block types belonging to one family.
///
/// Stepping past the last member wraps to the first and vice versa. Members
/// are unique and the ring is never empty. Lookups go through the
/// `IndexSet`'s hash index, so `next`/`previous` are O(1).
#[derive(Debug, Clone)]
pub struct VariantRing {
    family: String,
    members: IndexSet<BlockType>,
}

impl VariantRing {
    /// Build a ring from an ordered member list.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyRing`] for an empty list and
    /// [`ConfigError::DuplicateMember`] if a type is listed twice.
    pub fn new(
        family: impl Into<String>,
        members: impl IntoIterator<Item = BlockType>,
    ) -> Result<Self, ConfigError> {
        let family = family.into();
        let mut set = IndexSet::new();
        for block in members {
            if !set.insert(block) {
                return Err(ConfigError::DuplicateMember { family, block });
            }
        }
        if set.is_empty() {
            return Err(ConfigError::EmptyRing(family));
        }
        Ok(Self {
            family,
            members: set,
        })
    }

    pub fn builder(family: impl Into<String>) -> RingBuilder {
        RingBuilder::new(family)
    }

    /// The member after `current`, wrapping around. `None` if `current` is
    /// not in this ring.
    pub fn next(&self, current: BlockType) -> Option<BlockType> {
        let i = self.members.get_index_of(&current)?;
        self.members.get_index((i + 1) % self.members.len()).copied()
    }

    /// The member before `current`, wrapping around. `None` if `current` is
    /// not in this ring.
    pub fn previous(&self, current: BlockType) -> Option<BlockType> {
        let i = self.members.get_index_of(&current)?;
        let len = self.members.len();
        self.members.get_index((i + len - 1) % len).copied()
    }

    pub fn contains(&self, block: BlockType) -> bool {
        self.members.contains(&block)
    }

    /// Members in cycle order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = BlockType> + '_ {
        self.members.iter().copied()
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

impl fmt::Display for VariantRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariantRing{{family='{}', size={}}}", self.family, self.size())
    }
}

/// Incremental ring construction, optionally resolving members by name.
///
/// A name the catalog does not know is remembered and reported by
/// [`build`](Self::build), so one typo in a table fails startup instead of
/// silently shrinking the ring.
#[derive(Debug)]
pub struct RingBuilder {
    family: String,
    members: Vec<BlockType>,
    unresolved: Option<String>,
}

impl RingBuilder {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            members: Vec::new(),
            unresolved: None,
        }
    }

    pub fn add(mut self, block: BlockType) -> Self {
        self.members.push(block);
        self
    }

    pub fn add_all(mut self, blocks: impl IntoIterator<Item = BlockType>) -> Self {
        self.members.extend(blocks);
        self
    }

    /// Resolve `name` through `catalog` and append it.
    pub fn add_named(mut self, catalog: &BlockCatalog, name: &str) -> Self {
        match catalog.by_name(name) {
            Some(block) => self.members.push(block),
            None => {
                if self.unresolved.is_none() {
                    self.unresolved = Some(name.to_string());
                }
            }
        }
        self
    }

    /// # Errors
    ///
    /// [`ConfigError::UnknownBlock`] for the first unresolved name, otherwise
    /// whatever [`VariantRing::new`] reports.
    pub fn build(self) -> Result<VariantRing, ConfigError> {
        if let Some(name) = self.unresolved {
            return Err(ConfigError::UnknownBlock {
                family: self.family,
                name,
            });
        }
        VariantRing::new(self.family, self.members)
    }
}
