use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::error::ConfigError;
use crate::world::block::BlockType;

use super::ring::VariantRing;

new_key_type! {
    /// Handle to a ring owned by a [`VariantRegistry`].
    pub struct RingId;
}

/// Owns every variant ring and indexes block types to their ring.
///
/// Populated once at startup and then only read. A block type belongs to at
/// most one ring.
#[derive(Debug, Default)]
pub struct VariantRegistry {
    rings: SlotMap<RingId, VariantRing>,
    owner: HashMap<BlockType, RingId>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ring and index all of its members.
    ///
    /// # Errors
    ///
    /// [`ConfigError::AlreadyRegistered`] if any member already belongs to
    /// a ring. Nothing is registered in that case.
    pub fn register_ring(&mut self, ring: VariantRing) -> Result<RingId, ConfigError> {
        for block in ring.members() {
            if let Some(&existing) = self.owner.get(&block) {
                return Err(ConfigError::AlreadyRegistered {
                    block,
                    family: ring.family().to_string(),
                    existing: self.rings[existing].family().to_string(),
                });
            }
        }

        let members: Vec<BlockType> = ring.members().collect();
        tracing::debug!("Registered {}", ring);
        let id = self.rings.insert(ring);
        for block in members {
            self.owner.insert(block, id);
        }
        Ok(id)
    }

    /// The ring owning `block`, if any.
    pub fn ring_for(&self, block: BlockType) -> Option<&VariantRing> {
        self.owner.get(&block).map(|id| &self.rings[*id])
    }

    pub fn ring(&self, id: RingId) -> Option<&VariantRing> {
        self.rings.get(id)
    }

    pub fn rings(&self) -> impl Iterator<Item = &VariantRing> {
        self.rings.values()
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Number of block types indexed across all rings.
    pub fn registered_block_count(&self) -> usize {
        self.owner.len()
    }

    pub fn clear(&mut self) {
        self.rings.clear();
        self.owner.clear();
    }

    /// Replace the contents with `rings`.
    ///
    /// On error the registry is left empty: a partially rebuilt registry
    /// would disagree with its table.
    pub fn rebuild(
        &mut self,
        rings: impl IntoIterator<Item = VariantRing>,
    ) -> Result<(), ConfigError> {
        self.clear();
        for ring in rings {
            if let Err(e) = self.register_ring(ring) {
                self.clear();
                return Err(e);
            }
        }
        tracing::debug!(
            "Variant registry rebuilt: {} rings, {} blocks",
            self.ring_count(),
            self.registered_block_count()
        );
        Ok(())
    }
}
