//! The public standard-values entry point.

use std::sync::Arc;

use strata_model::{Item, ItemStore, TemplateStore};
use strata_types::{FieldId, reserved};

use crate::cache::StandardValuesCache;
use crate::context::ResolutionContext;
use crate::error::ResolveResult;
use crate::resolver::StandardValuesResolver;

/// Resolves the standard value of a single field on an item.
///
/// Return values distinguish three cases:
/// - `Ok(Some(""))` — the field is defined to have no standard value
///   (the reserved source fields)
/// - `Ok(None)` — no default exists: the item is templateless or no
///   template in the chain contributes this field
/// - `Ok(Some(value))` — the resolved default
pub struct StandardValuesProvider {
    resolver: StandardValuesResolver,
    cache: StandardValuesCache,
}

impl StandardValuesProvider {
    /// Creates a provider over the given stores with an empty cache.
    pub fn new(items: Arc<dyn ItemStore>, templates: Arc<dyn TemplateStore>) -> Self {
        Self {
            resolver: StandardValuesResolver::new(items, templates),
            cache: StandardValuesCache::new(),
        }
    }

    /// The standard value of `field_id` on `item`.
    pub fn standard_value(
        &self,
        item: &Item,
        field_id: FieldId,
        ctx: &ResolutionContext,
    ) -> ResolveResult<Option<String>> {
        if field_id == reserved::SOURCE || field_id == reserved::SOURCE_ITEM {
            return Ok(Some(String::new()));
        }

        match self.cache.get_or_compute(item, &self.resolver, ctx)? {
            None => Ok(None),
            Some(values) => Ok(values.value(field_id).map(str::to_owned)),
        }
    }

    /// The effective value of `field_id` on `item`: the item's own raw
    /// value when present, otherwise its standard value.
    pub fn effective_value(
        &self,
        item: &Item,
        field_id: FieldId,
        ctx: &ResolutionContext,
    ) -> ResolveResult<Option<String>> {
        if let Some(own) = item.raw_value(field_id) {
            return Ok(Some(own.to_owned()));
        }
        self.standard_value(item, field_id, ctx)
    }

    /// The cache, for eviction when items or templates change.
    pub fn cache(&self) -> &StandardValuesCache {
        &self.cache
    }
}
