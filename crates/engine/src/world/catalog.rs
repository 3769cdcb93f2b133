//! Block catalog: maps compact [`BlockType`] / [`BlockState`] ids to their
//! definitions.
//!
//! The catalog is built once at startup. Air is always type 0 and state 0, so
//! a zeroed id means empty space. The states of each type are laid out as the
//! cartesian product of its property domains with the last property varying
//! fastest, which makes reading and replacing a property plain arithmetic.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::error::ConfigError;

use super::block::{BlockDef, BlockState, BlockType, PropertyDef};

/// Upper bound on the number of state ids (`BlockState` is a `u16`).
const MAX_STATES: usize = u16::MAX as usize + 1;

struct TypeEntry {
    def: BlockDef,
    /// First state id of this type.
    base: u16,
    /// Per-property multiplier, parallel to `def.properties()`.
    strides: Vec<u32>,
    default: BlockState,
}

/// Immutable block registry shared by the world and every transform.
pub struct BlockCatalog {
    types: Vec<TypeEntry>,
    /// Dense array where `index == BlockState.0`.
    owners: Vec<BlockType>,
    by_name: HashMap<String, BlockType>,
}

impl BlockCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn block_count(&self) -> usize {
        self.types.len()
    }

    pub fn state_count(&self) -> usize {
        self.owners.len()
    }

    pub fn by_name(&self, name: &str) -> Option<BlockType> {
        self.by_name.get(name).copied()
    }

    /// Definition of a block type.
    ///
    /// # Panics
    ///
    /// Panics if `ty` did not come from this catalog.
    pub fn def(&self, ty: BlockType) -> &BlockDef {
        &self.types[ty.0 as usize].def
    }

    pub fn name(&self, ty: BlockType) -> &str {
        self.def(ty).name()
    }

    pub fn block_of(&self, state: BlockState) -> BlockType {
        self.owners
            .get(state.0 as usize)
            .copied()
            .unwrap_or(BlockType::AIR)
    }

    pub fn default_state(&self, ty: BlockType) -> BlockState {
        self.types[ty.0 as usize].default
    }

    pub fn is_air(&self, state: BlockState) -> bool {
        self.def(self.block_of(state)).is_air()
    }

    pub fn is_replaceable(&self, state: BlockState) -> bool {
        self.def(self.block_of(state)).is_replaceable()
    }

    /// True if the type of `state` declares a property with this name.
    pub fn declares(&self, state: BlockState, property: &str) -> bool {
        self.def(self.block_of(state)).property(property).is_some()
    }

    /// Current value of `property` on `state`, or `None` if the type does not
    /// declare it.
    pub fn value(&self, state: BlockState, property: &str) -> Option<&str> {
        let entry = &self.types[self.block_of(state).0 as usize];
        let (i, prop) = entry
            .def
            .properties()
            .iter()
            .enumerate()
            .find(|(_, p)| p.name() == property)?;
        let idx = Self::value_index(entry, state, i);
        prop.values().get(idx).map(String::as_str)
    }

    /// `state` with `property` set to `value`. `None` if the type does not
    /// declare the property or `value` is outside its domain.
    pub fn with_value(&self, state: BlockState, property: &str, value: &str) -> Option<BlockState> {
        let entry = &self.types[self.block_of(state).0 as usize];
        let (i, prop) = entry
            .def
            .properties()
            .iter()
            .enumerate()
            .find(|(_, p)| p.name() == property)?;
        let new_idx = prop.index_of(value)?;
        let old_idx = Self::value_index(entry, state, i);
        let stride = entry.strides[i] as i32;
        let id = state.0 as i32 + (new_idx as i32 - old_idx as i32) * stride;
        Some(BlockState(id as u16))
    }

    /// Every `(property, value)` pair of `state`, in declaration order.
    pub fn values(&self, state: BlockState) -> impl Iterator<Item = (&PropertyDef, &str)> + '_ {
        let entry = &self.types[self.block_of(state).0 as usize];
        entry
            .def
            .properties()
            .iter()
            .enumerate()
            .map(move |(i, prop)| {
                let idx = Self::value_index(entry, state, i);
                (prop, prop.values()[idx].as_str())
            })
    }

    /// Human-readable form, e.g. `oak_stairs[facing=north,half=bottom]`.
    pub fn describe(&self, state: BlockState) -> String {
        let mut out = self.name(self.block_of(state)).to_string();
        let mut first = true;
        for (prop, value) in self.values(state) {
            out.push(if first { '[' } else { ',' });
            first = false;
            let _ = write!(out, "{}={}", prop.name(), value);
        }
        if !first {
            out.push(']');
        }
        out
    }

    fn value_index(entry: &TypeEntry, state: BlockState, i: usize) -> usize {
        let offset = (state.0 - entry.base) as usize;
        (offset / entry.strides[i] as usize) % entry.def.properties()[i].len()
    }
}

/// Collects block definitions and lays out the state id space.
#[derive(Default)]
pub struct CatalogBuilder {
    defs: Vec<BlockDef>,
}

impl CatalogBuilder {
    pub fn add(&mut self, def: BlockDef) -> &mut Self {
        self.defs.push(def);
        self
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Validate every definition and assign ids.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingAir`] if the first definition is not air, and the
    /// per-definition errors for duplicate names, duplicate or empty
    /// properties, out-of-domain defaults, or an exhausted state id space.
    pub fn build(self) -> Result<BlockCatalog, ConfigError> {
        if !self.defs.first().is_some_and(BlockDef::is_air) {
            return Err(ConfigError::MissingAir);
        }

        let mut types = Vec::with_capacity(self.defs.len());
        let mut owners = Vec::new();
        let mut by_name = HashMap::with_capacity(self.defs.len());

        for def in self.defs {
            if by_name.contains_key(def.name()) {
                return Err(ConfigError::DuplicateBlock(def.name().to_string()));
            }
            let ty = BlockType(types.len() as u16);
            let entry = layout(def, owners.len())?;

            let state_count = entry
                .strides
                .first()
                .map_or(1, |s| *s as usize * entry.def.properties()[0].len());
            if owners.len() + state_count > MAX_STATES {
                return Err(ConfigError::TooManyStates);
            }
            owners.extend(std::iter::repeat_n(ty, state_count));
            by_name.insert(entry.def.name().to_string(), ty);
            types.push(entry);
        }

        tracing::debug!(
            "Block catalog built: {} types, {} states",
            types.len(),
            owners.len()
        );

        Ok(BlockCatalog {
            types,
            owners,
            by_name,
        })
    }
}

fn layout(def: BlockDef, base: usize) -> Result<TypeEntry, ConfigError> {
    let props = def.properties();
    for (i, prop) in props.iter().enumerate() {
        if prop.is_empty() {
            return Err(ConfigError::EmptyDomain {
                block: def.name().to_string(),
                property: prop.name().to_string(),
            });
        }
        if props[..i].iter().any(|p| p.name() == prop.name()) {
            return Err(ConfigError::DuplicateProperty {
                block: def.name().to_string(),
                property: prop.name().to_string(),
            });
        }
    }

    let mut strides = vec![1u32; props.len()];
    for i in (0..props.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * props[i + 1].len() as u32;
        if strides[i] as usize > MAX_STATES {
            return Err(ConfigError::TooManyStates);
        }
    }
    if base > u16::MAX as usize {
        return Err(ConfigError::TooManyStates);
    }

    let mut default = base as u32;
    for (i, (prop, value)) in props.iter().zip(def.defaults()).enumerate() {
        let idx = match value {
            Some(v) => prop.index_of(v).ok_or_else(|| ConfigError::InvalidDefault {
                block: def.name().to_string(),
                property: prop.name().to_string(),
                value: v.clone(),
            })?,
            None => 0,
        };
        default += idx as u32 * strides[i];
    }

    Ok(TypeEntry {
        base: base as u16,
        strides,
        default: BlockState(default as u16),
        def,
    })
}
