//! The resolved default-value map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strata_types::{FieldId, reserved};

/// Field defaults resolved for one (template, database, language) triple.
///
/// Keys are unique; merge order determines which template's contribution
/// wins, iteration order carries no meaning. Alongside the field entries the
/// map carries one synthetic entry under
/// [`reserved::STANDARD_VALUE_HOLDER`]: the string form of the prototype
/// item that supplied the chain's root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardValues {
    values: HashMap<FieldId, String>,
}

impl StandardValues {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a value (or the synthetic holder entry) exists for `id`.
    pub fn contains(&self, id: FieldId) -> bool {
        self.values.contains_key(&id)
    }

    /// The resolved default for `id`, if any.
    pub fn value(&self, id: FieldId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    /// Inserts a value, replacing any existing entry. The resolver checks
    /// [`StandardValues::contains`] first to get first-write-wins merging.
    pub fn insert(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    /// The prototype item that supplied this map's root, in string form.
    pub fn holder_id(&self) -> Option<&str> {
        self.value(reserved::STANDARD_VALUE_HOLDER)
    }

    /// Number of entries, synthetic holder entry included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(id, v)| (*id, v.as_str()))
    }
}
