//! Per-item memoization of resolved default-value maps.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use strata_model::{Item, ItemFallbackSwitch};
use strata_types::{DatabaseId, ItemId, Language, Version};
use tracing::debug;

use crate::context::ResolutionContext;
use crate::error::ResolveResult;
use crate::resolver::StandardValuesResolver;
use crate::values::StandardValues;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    database: DatabaseId,
    item: ItemId,
    language: Language,
    version: Version,
}

impl CacheKey {
    fn for_item(item: &Item) -> Self {
        Self {
            database: item.database.clone(),
            item: item.id,
            language: item.language.clone(),
            version: item.version,
        }
    }
}

/// Memoizes [`StandardValuesResolver`] output per item variant.
///
/// Concurrent lookups for the same item may race and compute redundantly;
/// the maps are pure functions of (template, database, language), so the
/// last writer wins and the cache converges. No mutual exclusion is held
/// across a compute.
#[derive(Default)]
pub struct StandardValuesCache {
    entries: RwLock<HashMap<CacheKey, Arc<StandardValues>>>,
}

impl StandardValuesCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item's default-value map, computing it on a miss.
    ///
    /// `Ok(None)` for templateless items: nothing is computed or cached.
    /// A computed map is stored unless the ambient fallback switch is unset
    /// *and* the call runs under a role that is not cache-eligible (no site,
    /// publish pass or scheduler pass) — bulk passes must not pin
    /// context-dependent maps for later requests. The computed map is
    /// returned either way.
    pub fn get_or_compute(
        &self,
        item: &Item,
        resolver: &StandardValuesResolver,
        ctx: &ResolutionContext,
    ) -> ResolveResult<Option<Arc<StandardValues>>> {
        let Some(template_id) = item.template_id.filter(|id| !id.is_nil()) else {
            return Ok(None);
        };

        let key = CacheKey::for_item(item);
        if let Some(hit) = self.entries.read().unwrap().get(&key) {
            debug!("standard-values cache hit for item {}", item.id);
            return Ok(Some(Arc::clone(hit)));
        }

        let values = Arc::new(resolver.resolve(template_id, &item.database, &item.language)?);

        if ItemFallbackSwitch::current().is_none() && !ctx.role.caching_eligible() {
            debug!(
                "standard-values cache bypass for item {} (role {:?})",
                item.id, ctx.role
            );
            return Ok(Some(values));
        }

        self.entries
            .write()
            .unwrap()
            .insert(key, Arc::clone(&values));
        Ok(Some(values))
    }

    /// Evicts every cached map for an item, across languages and versions.
    /// Called when the item or its template changes.
    pub fn remove_item(&self, database: &DatabaseId, item_id: ItemId) {
        self.entries
            .write()
            .unwrap()
            .retain(|key, _| !(key.database == *database && key.item == item_id));
    }

    /// Evicts every cached map for a database.
    pub fn clear_database(&self, database: &DatabaseId) {
        self.entries
            .write()
            .unwrap()
            .retain(|key, _| key.database != *database);
    }

    /// Number of cached maps.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}
