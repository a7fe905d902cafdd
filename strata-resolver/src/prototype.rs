//! Prototype item lookup.

use strata_model::{Item, ItemFallbackSwitch, ItemStore, SecurityCheck};
use strata_types::{DatabaseId, ItemId, Language, Version};
use tracing::debug;

use crate::error::ResolveResult;

/// Fetches a template's standard-value holder item.
///
/// Prototype items are template-designated, so the fetch always bypasses
/// security checks regardless of what the original caller may read.
pub struct PrototypeItemLookup<'a> {
    items: &'a dyn ItemStore,
}

impl<'a> PrototypeItemLookup<'a> {
    /// Creates a lookup over the given item store.
    pub fn new(items: &'a dyn ItemStore) -> Self {
        Self { items }
    }

    /// Fetches the prototype item in `language` at the latest version.
    ///
    /// When the ambient fallback switch holds `Some(false)`, the lookup
    /// runs inside a scope that clears the switch so the prototype itself
    /// may resolve through language fallback; the `Some(false)` state is
    /// restored on every exit path, store failures included. `Ok(None)`
    /// means "no standard values from this template".
    pub fn lookup(
        &self,
        prototype_id: ItemId,
        language: &Language,
        database: &DatabaseId,
    ) -> ResolveResult<Option<Item>> {
        debug_assert!(
            !prototype_id.is_nil(),
            "callers must reject nil prototype ids"
        );

        let item = if ItemFallbackSwitch::current() == Some(false) {
            let _scope = ItemFallbackSwitch::enter(None);
            self.items.item(
                prototype_id,
                language,
                Version::Latest,
                database,
                SecurityCheck::Disable,
            )?
        } else {
            self.items.item(
                prototype_id,
                language,
                Version::Latest,
                database,
                SecurityCheck::Disable,
            )?
        };

        if item.is_none() {
            debug!("prototype item {prototype_id} not found in {database} ({language})");
        }
        Ok(item)
    }
}
