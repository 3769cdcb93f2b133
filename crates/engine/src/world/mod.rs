pub mod access;
pub mod block;
pub mod catalog;
pub mod entity;
pub mod item;
pub mod position;

use std::sync::{Arc, Mutex};

use block::BlockState;
use catalog::BlockCatalog;
use dashmap::DashMap;
use entity::BlockEntity;
use item::ItemStack;
use position::BlockPos;

/// Opaque write flags forwarded with every block write (neighbor
/// notification, client sync, ...). The world records them but does not act
/// on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpdateFlags(pub u8);

impl UpdateFlags {
    pub const NOTIFY_NEIGHBORS: UpdateFlags = UpdateFlags(1);
    pub const SEND_TO_CLIENTS: UpdateFlags = UpdateFlags(2);
    pub const IMMEDIATE: UpdateFlags = UpdateFlags(8);

    /// Notify neighbors and clients.
    pub const DEFAULT: UpdateFlags = UpdateFlags(3);
    /// Default plus immediate re-render.
    pub const REPAINT: UpdateFlags = UpdateFlags(11);

    pub const fn contains(self, other: UpdateFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// One applied block write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChange {
    pub pos: BlockPos,
    pub old: BlockState,
    pub new: BlockState,
    pub flags: UpdateFlags,
}

/// The block world: states, container block entities, and a journal of
/// applied writes. Thread-safe, lock-sharded by position.
///
/// Every method takes `&self`; `DashMap` provides interior mutability.
pub struct World {
    catalog: Arc<BlockCatalog>,
    /// Non-air states only. Missing positions read as air.
    blocks: DashMap<BlockPos, BlockState>,
    entities: DashMap<BlockPos, BlockEntity>,
    changes: Mutex<Vec<BlockChange>>,
    drops: Mutex<Vec<(BlockPos, ItemStack)>>,
}

impl World {
    pub fn new(catalog: Arc<BlockCatalog>) -> Self {
        Self {
            catalog,
            blocks: DashMap::new(),
            entities: DashMap::new(),
            changes: Mutex::new(Vec::new()),
            drops: Mutex::new(Vec::new()),
        }
    }

    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    /// Read the state at a position. Untouched positions are air.
    pub fn get_block(&self, pos: BlockPos) -> BlockState {
        self.blocks
            .get(&pos)
            .map(|s| *s)
            .unwrap_or(BlockState::AIR)
    }

    /// Write a state.
    ///
    /// Changing the block *type* at a position replaces its block entity: the
    /// old container's remaining items are dropped (see
    /// [`take_drops`](Self::take_drops)) and a fresh, empty one is created if
    /// the new type carries a container. Writing the current state again is
    /// a no-op.
    pub fn set_block(&self, pos: BlockPos, state: BlockState, flags: UpdateFlags) {
        let old = self.get_block(pos);
        if old == state {
            return;
        }

        let old_type = self.catalog.block_of(old);
        let new_type = self.catalog.block_of(state);
        if old_type != new_type {
            if let Some((_, mut entity)) = self.entities.remove(&pos) {
                let dropped = entity.clear_content();
                if !dropped.is_empty() {
                    tracing::debug!("Dropping {} stacks at {:?}", dropped.len(), pos);
                    self.drops
                        .lock()
                        .expect("world drop list poisoned")
                        .extend(dropped.into_iter().map(|s| (pos, s)));
                }
            }
            let slots = self.catalog.def(new_type).container_slots();
            if slots > 0 {
                self.entities.insert(pos, BlockEntity::new(slots));
            }
        }

        if state == BlockState::AIR {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }

        tracing::trace!(
            "set_block {:?}: {} -> {}",
            pos,
            self.catalog.describe(old),
            self.catalog.describe(state)
        );
        self.changes
            .lock()
            .expect("world change journal poisoned")
            .push(BlockChange {
                pos,
                old,
                new: state,
                flags,
            });
    }

    /// Snapshot of the block entity at `pos`.
    pub fn block_entity(&self, pos: BlockPos) -> Option<BlockEntity> {
        self.entities.get(&pos).map(|e| e.clone())
    }

    /// Run `f` against the block entity at `pos`, if there is one.
    pub fn with_block_entity<R>(&self, pos: BlockPos, f: impl FnOnce(&mut BlockEntity) -> R) -> Option<R> {
        self.entities.get_mut(&pos).map(|mut e| f(&mut e))
    }

    /// Number of non-air positions.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Drain and return every write applied since the last call.
    pub fn take_changes(&self) -> Vec<BlockChange> {
        std::mem::take(&mut *self.changes.lock().expect("world change journal poisoned"))
    }

    /// Drain and return items spilled by replaced containers.
    pub fn take_drops(&self) -> Vec<(BlockPos, ItemStack)> {
        std::mem::take(&mut *self.drops.lock().expect("world drop list poisoned"))
    }
}
