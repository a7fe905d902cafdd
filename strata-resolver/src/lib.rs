//! Standard-values resolution engine for Strata.
//!
//! A field on a content item that has no explicit value of its own shows
//! its *standard value*: the default contributed by the item's template,
//! or by the nearest base template that defines one. This crate resolves
//! those defaults and memoizes the result per item.
//!
//! # Architecture
//!
//! - **Chain**: walks a template and its transitive base templates in
//!   inheritance order
//! - **Prototype lookup**: fetches a template's standard-value holder item,
//!   security checks disabled, under a controlled language-fallback mode
//! - **Resolver**: merges prototype field values most-derived-first, first
//!   write wins
//! - **Cache**: per-(database, item, language, version) memoization with a
//!   role-sensitive bypass for publish and scheduler passes
//! - **Provider**: the public entry point mapping one field to its default
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strata_model::{Field, Item, MemoryItemStore, MemoryTemplateStore, Template};
//! use strata_resolver::{ResolutionContext, StandardValuesProvider};
//! use strata_types::{DatabaseId, FieldId, ItemId, Language, TemplateId};
//!
//! let items = Arc::new(MemoryItemStore::new());
//! let templates = Arc::new(MemoryTemplateStore::new());
//! let db = DatabaseId::new("master");
//! let en = Language::new("en").unwrap();
//!
//! // A template whose prototype item supplies a default title.
//! let title = FieldId::new();
//! let proto_id = ItemId::new();
//! let template_id = TemplateId::new();
//! templates.insert(
//!     db.clone(),
//!     Template::new(template_id).with_standard_value_holder(proto_id),
//! );
//! items.insert(
//!     Item::new(proto_id, None, db.clone(), en.clone())
//!         .with_field(Field::new(title, "Untitled")),
//! );
//!
//! let provider = StandardValuesProvider::new(items, templates);
//! let item = Item::new(ItemId::new(), Some(template_id), db, en);
//! let value = provider
//!     .standard_value(&item, title, &ResolutionContext::none())
//!     .unwrap();
//! assert_eq!(value.as_deref(), Some("Untitled"));
//! ```

mod cache;
mod chain;
mod context;
mod error;
mod prototype;
mod provider;
mod resolver;
mod values;

pub use cache::StandardValuesCache;
pub use chain::TemplateChainWalker;
pub use context::{ExecutionRole, ResolutionContext};
pub use error::{ResolveError, ResolveResult};
pub use prototype::PrototypeItemLookup;
pub use provider::StandardValuesProvider;
pub use resolver::StandardValuesResolver;
pub use values::StandardValues;
