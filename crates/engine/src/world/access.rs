//! The world surface the tool transforms are written against.
//!
//! Transforms only ever go through [`BlockWorld`], so a host can put its own
//! storage behind it. [`World`] is the in-memory implementation.

use thiserror::Error;

use super::block::BlockState;
use super::catalog::BlockCatalog;
use super::entity::BlockEntity;
use super::item::{Compound, ItemStack};
use super::position::BlockPos;
use super::{UpdateFlags, World};

/// Returned by hosts that cannot rename a block entity in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("host cannot set a block entity's display name directly")]
pub struct NamingUnsupported;

pub trait BlockWorld {
    fn catalog(&self) -> &BlockCatalog;

    fn block_state(&self, pos: BlockPos) -> BlockState;

    fn set_block_state(&self, pos: BlockPos, state: BlockState, flags: UpdateFlags);

    /// Copy of the container at `pos` (items and name), if the block has one.
    fn container(&self, pos: BlockPos) -> Option<BlockEntity>;

    /// Empty the container at `pos` so replacing the block spills nothing.
    fn clear_container(&self, pos: BlockPos);

    /// Direct display-name setter.
    fn set_custom_name(&self, pos: BlockPos, name: &str) -> Result<(), NamingUnsupported>;

    /// Generic persisted-data channel: load the block entity at `pos` from a
    /// tag. Loading rebuilds the inventory from the tag.
    fn load_block_entity(&self, pos: BlockPos, tag: &Compound);

    /// Put `items` back slot by slot; extra items beyond the slot count are
    /// discarded.
    fn set_container_items(&self, pos: BlockPos, items: &[ItemStack]);
}

impl BlockWorld for World {
    fn catalog(&self) -> &BlockCatalog {
        World::catalog(self)
    }

    fn block_state(&self, pos: BlockPos) -> BlockState {
        self.get_block(pos)
    }

    fn set_block_state(&self, pos: BlockPos, state: BlockState, flags: UpdateFlags) {
        self.set_block(pos, state, flags);
    }

    fn container(&self, pos: BlockPos) -> Option<BlockEntity> {
        self.block_entity(pos)
    }

    fn clear_container(&self, pos: BlockPos) {
        self.with_block_entity(pos, |e| {
            e.clear_content();
        });
    }

    fn set_custom_name(&self, pos: BlockPos, name: &str) -> Result<(), NamingUnsupported> {
        self.with_block_entity(pos, |e| e.set_custom_name(Some(name.to_string())));
        Ok(())
    }

    fn load_block_entity(&self, pos: BlockPos, tag: &Compound) {
        self.with_block_entity(pos, |e| e.load(tag));
    }

    fn set_container_items(&self, pos: BlockPos, items: &[ItemStack]) {
        self.with_block_entity(pos, |e| {
            for (slot, stack) in items.iter().enumerate().take(e.slot_count()) {
                e.set_item(slot, stack.clone());
            }
        });
    }
}
