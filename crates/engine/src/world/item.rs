//! Item stacks with free-form NBT custom data.
//!
//! Tools keep their per-instance state (paint color, remaining uses) in the
//! custom-data compound, and containers persist their slots as NBT lists, so
//! both sides share this one representation.

use std::collections::HashMap;

use fastnbt::Value;

/// An NBT compound tag.
pub type Compound = HashMap<String, Value>;

const TAG_SLOT: &str = "Slot";
const TAG_ID: &str = "id";
const TAG_COUNT: &str = "count";
const TAG_CUSTOM_DATA: &str = "custom_data";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemStack {
    id: String,
    count: u32,
    custom_data: Option<Compound>,
}

impl ItemStack {
    pub fn new(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            count,
            custom_data: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.id.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// True for a non-empty stack of `id`.
    pub fn is(&self, id: &str) -> bool {
        !self.is_empty() && self.id == id
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Remove up to `n` items. A stack shrunk to zero is empty.
    pub fn shrink(&mut self, n: u32) {
        self.count = self.count.saturating_sub(n);
    }

    /// A copy of this stack holding `count` items.
    pub fn copy_with_count(&self, count: u32) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    // ── Custom data ─────────────────────────────────────────────────────

    pub fn custom_data(&self) -> Option<&Compound> {
        self.custom_data.as_ref()
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.custom_data.as_ref()?.get(key)? {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.custom_data.as_ref()?.get(key)? {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.custom_data
            .get_or_insert_with(Compound::new)
            .insert(key.to_string(), Value::Int(value));
    }

    pub fn put_string(&mut self, key: &str, value: impl Into<String>) {
        self.custom_data
            .get_or_insert_with(Compound::new)
            .insert(key.to_string(), Value::String(value.into()));
    }

    /// Remove `key`; drops the custom-data compound entirely once it is empty.
    pub fn remove(&mut self, key: &str) {
        if let Some(data) = self.custom_data.as_mut() {
            data.remove(key);
            if data.is_empty() {
                self.custom_data = None;
            }
        }
    }

    // ── NBT ─────────────────────────────────────────────────────────────

    /// Container slot entry: `{Slot, id, count, custom_data?}`.
    pub fn to_slot_nbt(&self, slot: u8) -> Value {
        let mut tag = Compound::new();
        tag.insert(TAG_SLOT.into(), Value::Byte(slot as i8));
        tag.insert(TAG_ID.into(), Value::String(self.id.clone()));
        tag.insert(TAG_COUNT.into(), Value::Int(self.count as i32));
        if let Some(data) = &self.custom_data {
            tag.insert(TAG_CUSTOM_DATA.into(), Value::Compound(data.clone()));
        }
        Value::Compound(tag)
    }

    /// Inverse of [`to_slot_nbt`](Self::to_slot_nbt). Malformed entries yield `None`.
    pub fn from_slot_nbt(value: &Value) -> Option<(u8, ItemStack)> {
        let Value::Compound(tag) = value else {
            return None;
        };
        let slot = match tag.get(TAG_SLOT)? {
            Value::Byte(b) => *b as u8,
            Value::Int(i) => u8::try_from(*i).ok()?,
            _ => return None,
        };
        let id = match tag.get(TAG_ID)? {
            Value::String(s) => s.clone(),
            _ => return None,
        };
        let count = match tag.get(TAG_COUNT) {
            Some(Value::Int(c)) => u32::try_from(*c).ok()?,
            Some(Value::Byte(c)) => u32::try_from(*c).ok()?,
            None => 1,
            _ => return None,
        };
        let custom_data = match tag.get(TAG_CUSTOM_DATA) {
            Some(Value::Compound(data)) => Some(data.clone()),
            _ => None,
        };
        Some((
            slot,
            ItemStack {
                id,
                count,
                custom_data,
            },
        ))
    }
}
