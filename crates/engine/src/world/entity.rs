//! Container block entities: the per-position payload attached to blocks
//! such as shulker boxes and chests.

use fastnbt::Value;

use super::item::{Compound, ItemStack};

const TAG_CUSTOM_NAME: &str = "CustomName";
const TAG_ITEMS: &str = "Items";

/// Slot inventory plus an optional display name.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockEntity {
    custom_name: Option<String>,
    items: Vec<ItemStack>,
}

impl BlockEntity {
    pub fn new(slots: usize) -> Self {
        Self {
            custom_name: None,
            items: vec![ItemStack::empty(); slots],
        }
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.custom_name.as_deref()
    }

    pub fn set_custom_name(&mut self, name: Option<String>) {
        self.custom_name = name;
    }

    pub fn slot_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    /// Writes outside the slot range are ignored.
    pub fn set_item(&mut self, slot: usize, stack: ItemStack) {
        if let Some(entry) = self.items.get_mut(slot) {
            *entry = stack;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(ItemStack::is_empty)
    }

    /// Empty every slot, returning the non-empty stacks that were removed.
    pub fn clear_content(&mut self) -> Vec<ItemStack> {
        self.items
            .iter_mut()
            .map(std::mem::take)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Persisted form: `{CustomName?, Items: [{Slot, id, count}, ...]}`.
    pub fn save(&self) -> Compound {
        let mut tag = Compound::new();
        if let Some(name) = &self.custom_name {
            tag.insert(TAG_CUSTOM_NAME.into(), Value::String(name.clone()));
        }
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(i, s)| s.to_slot_nbt(i as u8))
            .collect();
        tag.insert(TAG_ITEMS.into(), Value::List(items));
        tag
    }

    /// A persisted-form tag carrying only a display name.
    pub fn name_tag(name: &str) -> Compound {
        let mut tag = Compound::new();
        tag.insert(TAG_CUSTOM_NAME.into(), Value::String(name.to_string()));
        tag
    }

    /// Load from persisted form.
    ///
    /// Like the host game's loader, this always rebuilds the inventory from
    /// the tag: slots absent from `Items` (or a missing `Items` list) end up
    /// empty. The name is only replaced when the tag carries one.
    pub fn load(&mut self, tag: &Compound) {
        let slots = self.items.len();
        self.items = vec![ItemStack::empty(); slots];
        if let Some(Value::List(entries)) = tag.get(TAG_ITEMS) {
            for (slot, stack) in entries.iter().filter_map(ItemStack::from_slot_nbt) {
                self.set_item(slot as usize, stack);
            }
        }
        if let Some(Value::String(name)) = tag.get(TAG_CUSTOM_NAME) {
            self.custom_name = Some(name.clone());
        }
    }
}
