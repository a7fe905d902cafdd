//! Standard-values resolution over the template chain.

use std::sync::Arc;

use strata_model::{ItemStore, Template, TemplateStore};
use strata_types::{DatabaseId, Language, TemplateId, reserved};
use tracing::debug;

use crate::chain::TemplateChainWalker;
use crate::error::ResolveResult;
use crate::prototype::PrototypeItemLookup;
use crate::values::StandardValues;

/// Computes the merged field-default map for a template.
///
/// Walks the template chain most-derived-first and collects each prototype
/// item's raw field values with first-write-wins merging, so the nearest
/// template's contribution always takes precedence. Pure with respect to
/// store contents: identical (template, database, language) inputs against
/// identical stores yield identical maps.
pub struct StandardValuesResolver {
    items: Arc<dyn ItemStore>,
    templates: Arc<dyn TemplateStore>,
}

impl StandardValuesResolver {
    /// Creates a resolver over the given stores.
    pub fn new(items: Arc<dyn ItemStore>, templates: Arc<dyn TemplateStore>) -> Self {
        Self { items, templates }
    }

    /// Resolves the default-value map for `template_id`.
    ///
    /// Never fails on missing data: an unresolvable template or absent
    /// prototypes yield an empty map. Store failures propagate.
    pub fn resolve(
        &self,
        template_id: TemplateId,
        database: &DatabaseId,
        language: &Language,
    ) -> ResolveResult<StandardValues> {
        let mut values = StandardValues::new();
        let walker = TemplateChainWalker::new(self.templates.as_ref());
        for template in walker.chain(template_id, database)? {
            self.add_standard_values(&template, database, language, &mut values)?;
        }
        debug!(
            "resolved {} standard values for template {template_id} in {database} ({language})",
            values.len()
        );
        Ok(values)
    }

    /// Merges one template's prototype fields into `values`.
    ///
    /// Fields are read raw — never standard-values aware — so a prototype
    /// with empty slots cannot re-enter this resolution. After the fields,
    /// the reserved holder key is stamped with the prototype ID once,
    /// by the first (most derived) template that has a prototype.
    fn add_standard_values(
        &self,
        template: &Template,
        database: &DatabaseId,
        language: &Language,
        values: &mut StandardValues,
    ) -> ResolveResult<()> {
        let Some(holder_id) = template.standard_value_holder() else {
            return Ok(());
        };

        let lookup = PrototypeItemLookup::new(self.items.as_ref());
        let Some(prototype) = lookup.lookup(holder_id, language, database)? else {
            return Ok(());
        };

        for field in prototype.fields() {
            if values.contains(field.id) {
                continue;
            }
            if let Some(value) = field.value() {
                values.insert(field.id, value);
            }
        }

        if !values.contains(reserved::STANDARD_VALUE_HOLDER) {
            values.insert(reserved::STANDARD_VALUE_HOLDER, holder_id.to_string());
        }
        Ok(())
    }
}
