use serde::{Deserialize, Serialize};
use strata_types::{ItemId, TemplateId};

/// A schema definition.
///
/// Templates form a DAG through `base_ids` (multiple inheritance, declared
/// order significant). A template may designate a prototype item — the
/// "standard-value holder" — whose raw field values supply the defaults for
/// items of this template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    /// Base templates in declared order. May be empty.
    pub base_ids: Vec<TemplateId>,
    /// Prototype item holding this template's default field values, if any.
    pub standard_value_holder: Option<ItemId>,
}

impl Template {
    /// Creates a template with no bases and no standard-value holder.
    pub fn new(id: TemplateId) -> Self {
        Self {
            id,
            base_ids: Vec::new(),
            standard_value_holder: None,
        }
    }

    /// Builder-style base-template list.
    #[must_use]
    pub fn with_bases(mut self, base_ids: Vec<TemplateId>) -> Self {
        self.base_ids = base_ids;
        self
    }

    /// Builder-style standard-value holder.
    #[must_use]
    pub fn with_standard_value_holder(mut self, holder: ItemId) -> Self {
        self.standard_value_holder = Some(holder);
        self
    }

    /// The standard-value holder, filtering out a stored nil ID.
    pub fn standard_value_holder(&self) -> Option<ItemId> {
        self.standard_value_holder.filter(|id| !id.is_nil())
    }
}
