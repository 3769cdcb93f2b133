/// Opaque block type identifier ("oak planks", "stone stairs").
///
/// The engine never interprets these beyond identity. They are handed out by
/// the [`BlockCatalog`](super::catalog::BlockCatalog) in registration order,
/// and `BlockType::AIR` (0) is always the empty block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockType(pub u16);

impl BlockType {
    pub const AIR: BlockType = BlockType(0);
}

/// Compact block state identifier: one (block type, property assignment)
/// pair.
///
/// States of a single type are contiguous. Reading or changing a property is
/// arithmetic on the id, done through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockState(pub u16);

impl BlockState {
    /// The universal "empty" state.
    pub const AIR: BlockState = BlockState(0);
}

/// A named block attribute with an ordered, enumerable domain.
///
/// Values are kept in their textual form (`"north"`, `"true"`, `"3"`), which
/// is how the host game names them as well. Two attributes of different
/// block types are considered the same when their names match; whether a
/// value can move between them is decided by domain membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    name: String,
    values: Vec<String>,
}

impl PropertyDef {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position of `value` in the domain, if it belongs to it.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    /// True if the domain contains every one of `values`.
    pub fn accepts_all(&self, values: &[&str]) -> bool {
        values.iter().all(|v| self.accepts(v))
    }
}

/// Everything the catalog needs to know about one block type.
///
/// Built with a small fluent API:
///
/// ```
/// use chisel_engine::world::block::BlockDef;
///
/// let door = BlockDef::new("oak_door")
///     .with_property("facing", ["north", "south", "west", "east"])
///     .with_property("half", ["upper", "lower"])
///     .with_default("half", "lower");
/// assert_eq!(door.properties().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BlockDef {
    name: String,
    properties: Vec<PropertyDef>,
    /// Default value per property; `None` means "first in domain".
    defaults: Vec<Option<String>>,
    air: bool,
    replaceable: bool,
    container_slots: usize,
}

impl BlockDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            defaults: Vec::new(),
            air: false,
            replaceable: false,
            container_slots: 0,
        }
    }

    pub fn with_property<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.push(PropertyDef::new(name, values));
        self.defaults.push(None);
        self
    }

    /// Override the default value of an already-declared property. Unknown
    /// property names are kept and rejected when the catalog is built.
    pub fn with_default(mut self, property: &str, value: impl Into<String>) -> Self {
        match self.properties.iter().position(|p| p.name() == property) {
            Some(i) => self.defaults[i] = Some(value.into()),
            None => {
                self.properties.push(PropertyDef::new(property, Vec::<String>::new()));
                self.defaults.push(Some(value.into()));
            }
        }
        self
    }

    /// Air implies replaceable.
    pub fn air(mut self) -> Self {
        self.air = true;
        self.replaceable = true;
        self
    }

    pub fn replaceable(mut self) -> Self {
        self.replaceable = true;
        self
    }

    /// Mark this block as carrying a container block entity with `slots` item slots.
    pub fn container(mut self, slots: usize) -> Self {
        self.container_slots = slots;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub(crate) fn defaults(&self) -> &[Option<String>] {
        &self.defaults
    }

    pub fn is_air(&self) -> bool {
        self.air
    }

    pub fn is_replaceable(&self) -> bool {
        self.replaceable
    }

    pub fn container_slots(&self) -> usize {
        self.container_slots
    }

    pub fn has_container(&self) -> bool {
        self.container_slots > 0
    }
}
