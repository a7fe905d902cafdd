use serde::{Deserialize, Serialize};
use strata_types::{DatabaseId, FieldId, ItemId, Language, TemplateId, Version};

/// A content node.
///
/// Carries the raw field values stored for one (language, version) variant.
/// Field reads through [`Item::raw_value`] are never standard-values aware;
/// resolving effective defaults is the resolver's job, not the item's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// `None` for malformed/templateless items, which have no standard values.
    pub template_id: Option<TemplateId>,
    pub database: DatabaseId,
    pub language: Language,
    pub version: Version,
    fields: Vec<Field>,
}

impl Item {
    /// Creates an item with no fields at `Version::Number(1)`.
    pub fn new(
        id: ItemId,
        template_id: Option<TemplateId>,
        database: DatabaseId,
        language: Language,
    ) -> Self {
        Self {
            id,
            template_id,
            database,
            language,
            version: Version::Number(1),
            fields: Vec::new(),
        }
    }

    /// Adds a field slot, replacing any existing slot with the same ID.
    pub fn set_field(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.id == field.id) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Builder-style variant of [`Item::set_field`].
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.set_field(field);
        self
    }

    /// Builder-style version override.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// All field slots on this variant, in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The field slot with the given ID, if present.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The raw stored value of a field. `None` when the slot is absent or
    /// holds no value. Never consults standard values.
    pub fn raw_value(&self, id: FieldId) -> Option<&str> {
        self.field(id)?.value()
    }
}

/// One raw field slot on an item.
///
/// A slot can exist without a value (`value: None`) — distinct from an
/// absent slot for storage purposes, identical for reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    value: Option<String>,
}

impl Field {
    /// Creates a field slot holding a value.
    pub fn new(id: FieldId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: Some(value.into()),
        }
    }

    /// Creates a field slot with no stored value.
    pub fn empty(id: FieldId) -> Self {
        Self { id, value: None }
    }

    /// The raw stored value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item::new(
            ItemId::new(),
            Some(TemplateId::new()),
            "master".into(),
            Language::new("en").unwrap(),
        )
    }

    #[test]
    fn raw_value_reads_stored_value() {
        let f = FieldId::new();
        let item = item().with_field(Field::new(f, "hello"));
        assert_eq!(item.raw_value(f), Some("hello"));
    }

    #[test]
    fn empty_slot_reads_as_none() {
        let f = FieldId::new();
        let item = item().with_field(Field::empty(f));
        assert!(item.field(f).is_some());
        assert_eq!(item.raw_value(f), None);
    }

    #[test]
    fn set_field_replaces_same_id() {
        let f = FieldId::new();
        let mut item = item().with_field(Field::new(f, "a"));
        item.set_field(Field::new(f, "b"));
        assert_eq!(item.raw_value(f), Some("b"));
        assert_eq!(item.fields().len(), 1);
    }
}
