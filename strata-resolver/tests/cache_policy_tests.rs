//! Caching policy: reuse under normal site roles, bypass during publish
//! and scheduler passes, the nested-override exception, and eviction.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use strata_model::{
    Field, Item, ItemFallbackSwitch, MemoryItemStore, MemoryTemplateStore, StoreResult, Template,
    TemplateStore,
};
use strata_resolver::{ResolutionContext, StandardValuesProvider};
use strata_types::{DatabaseId, FieldId, ItemId, Language, TemplateId};

/// Counts lookups into the wrapped template store. The resolver hits the
/// template store once per chain walk, so a steady counter across repeated
/// provider calls proves the cache answered.
struct CountingTemplateStore {
    inner: MemoryTemplateStore,
    lookups: AtomicUsize,
}

impl CountingTemplateStore {
    fn new(inner: MemoryTemplateStore) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TemplateStore for CountingTemplateStore {
    fn template(&self, id: TemplateId, database: &DatabaseId) -> StoreResult<Option<Template>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.template(id, database)
    }
}

struct Fixture {
    provider: StandardValuesProvider,
    templates: Arc<CountingTemplateStore>,
    item: Item,
    field: FieldId,
}

/// One template with one prototype field, and an item instantiating it.
fn fixture() -> Fixture {
    let db: DatabaseId = "master".into();
    let en = Language::new("en").unwrap();

    let items = Arc::new(MemoryItemStore::new());
    let field = FieldId::new();
    let proto_id = ItemId::new();
    items.insert(
        Item::new(proto_id, None, db.clone(), en.clone()).with_field(Field::new(field, "default")),
    );

    let template_id = TemplateId::new();
    let inner = MemoryTemplateStore::new();
    inner.insert(
        db.clone(),
        Template::new(template_id).with_standard_value_holder(proto_id),
    );
    let templates = Arc::new(CountingTemplateStore::new(inner));

    Fixture {
        provider: StandardValuesProvider::new(items, Arc::clone(&templates) as Arc<dyn TemplateStore>),
        templates,
        item: Item::new(ItemId::new(), Some(template_id), db, en),
        field,
    }
}

// ── Reuse ────────────────────────────────────────────────────────

#[test]
fn named_site_reuses_cached_map() {
    let fx = fixture();
    let ctx = ResolutionContext::site("website");

    let first = fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    let after_first = fx.templates.lookups();
    let second = fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();

    assert_eq!(first.as_deref(), Some("default"));
    assert_eq!(second.as_deref(), Some("default"));
    // No second chain walk.
    assert_eq!(fx.templates.lookups(), after_first);
    assert_eq!(fx.provider.cache().len(), 1);
}

// ── Bypass ───────────────────────────────────────────────────────

#[test]
fn scheduler_site_resolves_fresh_every_time() {
    let fx = fixture();
    let ctx = ResolutionContext::site("scheduler");

    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    let after_first = fx.templates.lookups();
    let second = fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();

    assert_eq!(second.as_deref(), Some("default"));
    // A full second chain walk, and nothing retained.
    assert_eq!(fx.templates.lookups(), after_first * 2);
    assert!(fx.provider.cache().is_empty());
}

#[test]
fn publisher_site_bypasses_cache() {
    let fx = fixture();
    let ctx = ResolutionContext::site("publisher");

    let value = fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    assert_eq!(value.as_deref(), Some("default"));
    assert!(fx.provider.cache().is_empty());
}

#[test]
fn missing_site_context_bypasses_cache() {
    let fx = fixture();

    let value = fx
        .provider
        .standard_value(&fx.item, fx.field, &ResolutionContext::none())
        .unwrap();
    assert_eq!(value.as_deref(), Some("default"));
    assert!(fx.provider.cache().is_empty());
}

#[test]
fn bypass_still_returns_the_computed_map() {
    let fx = fixture();
    let ctx = ResolutionContext::site("scheduler");

    let value = fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    assert_eq!(value.as_deref(), Some("default"));
}

// ── Nested-override exception ────────────────────────────────────

#[test]
fn active_fallback_override_forces_caching() {
    let fx = fixture();
    let ctx = ResolutionContext::site("scheduler");

    // Inside an explicit fallback override the bypass does not apply, even
    // for a scheduler pass.
    let _scope = ItemFallbackSwitch::enter(Some(true));
    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    let after_first = fx.templates.lookups();
    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();

    assert_eq!(fx.templates.lookups(), after_first);
    assert_eq!(fx.provider.cache().len(), 1);
}

#[test]
fn override_holding_unset_does_not_force_caching() {
    let fx = fixture();
    let ctx = ResolutionContext::site("scheduler");

    // A scope that explicitly holds "unset" counts as unset for the policy.
    let _scope = ItemFallbackSwitch::enter(None);
    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    assert!(fx.provider.cache().is_empty());
}

// ── Eviction ─────────────────────────────────────────────────────

#[test]
fn remove_item_forces_recompute() {
    let fx = fixture();
    let ctx = ResolutionContext::site("website");
    let db: DatabaseId = "master".into();

    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    assert_eq!(fx.provider.cache().len(), 1);

    fx.provider.cache().remove_item(&db, fx.item.id);
    assert!(fx.provider.cache().is_empty());

    let before = fx.templates.lookups();
    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    assert!(fx.templates.lookups() > before);
}

#[test]
fn clear_database_only_evicts_that_database() {
    let fx = fixture();
    let ctx = ResolutionContext::site("website");

    fx.provider.standard_value(&fx.item, fx.field, &ctx).unwrap();
    assert_eq!(fx.provider.cache().len(), 1);

    fx.provider.cache().clear_database(&"web".into());
    assert_eq!(fx.provider.cache().len(), 1);

    fx.provider.cache().clear_database(&"master".into());
    assert!(fx.provider.cache().is_empty());
}
