//! In-memory store implementations.
//!
//! Back the store seams with plain maps. Used by tests and by embedders
//! that load their content model up front; production backends live behind
//! the same traits elsewhere.

use std::collections::HashMap;
use std::sync::RwLock;

use strata_types::{DatabaseId, ItemId, Language, TemplateId, Version};

use crate::{
    Item, ItemFallbackSwitch, ItemStore, SecurityCheck, StoreResult, Template, TemplateStore,
};

/// In-memory [`ItemStore`] with per-language version lists, optional
/// language-fallback configuration and per-item read restrictions.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<(DatabaseId, ItemId, Language), Vec<Item>>>,
    /// Language fallback edges, e.g. "da" -> "en".
    fallback: RwLock<HashMap<Language, Language>>,
    /// Items unreadable under `SecurityCheck::Enable`.
    restricted: RwLock<Vec<ItemId>>,
}

impl MemoryItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item variant, keeping version lists sorted by number.
    pub fn insert(&self, item: Item) {
        let key = (item.database.clone(), item.id, item.language.clone());
        let mut items = self.items.write().unwrap();
        let versions = items.entry(key).or_default();
        versions.retain(|v| v.version != item.version);
        versions.push(item);
        versions.sort_by_key(|v| v.version.number().unwrap_or(0));
    }

    /// Configures language fallback: misses in `from` retry in `to`.
    pub fn set_fallback(&self, from: Language, to: Language) {
        self.fallback.write().unwrap().insert(from, to);
    }

    /// Marks an item unreadable under `SecurityCheck::Enable`.
    pub fn restrict(&self, id: ItemId) {
        self.restricted.write().unwrap().push(id);
    }

    fn exact(
        &self,
        id: ItemId,
        language: &Language,
        version: Version,
        database: &DatabaseId,
    ) -> Option<Item> {
        let items = self.items.read().unwrap();
        let versions = items.get(&(database.clone(), id, language.clone()))?;
        match version {
            Version::Latest => versions.last().cloned(),
            Version::Number(_) => versions.iter().find(|v| v.version == version).cloned(),
        }
    }
}

impl ItemStore for MemoryItemStore {
    fn item(
        &self,
        id: ItemId,
        language: &Language,
        version: Version,
        database: &DatabaseId,
        security: SecurityCheck,
    ) -> StoreResult<Option<Item>> {
        if security == SecurityCheck::Enable && self.restricted.read().unwrap().contains(&id) {
            return Ok(None);
        }

        if let Some(item) = self.exact(id, language, version, database) {
            return Ok(Some(item));
        }

        // Exact-language miss: walk the fallback chain unless the ambient
        // switch forces fallback off.
        if ItemFallbackSwitch::current() == Some(false) {
            return Ok(None);
        }
        let mut lang = language.clone();
        let mut visited = vec![lang.clone()];
        loop {
            let next = match self.fallback.read().unwrap().get(&lang) {
                Some(next) => next.clone(),
                None => return Ok(None),
            };
            if visited.contains(&next) {
                // Cyclic fallback configuration; treat as exhausted.
                return Ok(None);
            }
            if let Some(item) = self.exact(id, &next, version, database) {
                return Ok(Some(item));
            }
            visited.push(next.clone());
            lang = next;
        }
    }
}

/// In-memory [`TemplateStore`].
#[derive(Default)]
pub struct MemoryTemplateStore {
    templates: RwLock<HashMap<(DatabaseId, TemplateId), Template>>,
}

impl MemoryTemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a template record into a database.
    pub fn insert(&self, database: DatabaseId, template: Template) {
        self.templates
            .write()
            .unwrap()
            .insert((database, template.id), template);
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn template(&self, id: TemplateId, database: &DatabaseId) -> StoreResult<Option<Template>> {
        Ok(self
            .templates
            .read()
            .unwrap()
            .get(&(database.clone(), id))
            .cloned())
    }
}
