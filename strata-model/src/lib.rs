//! Core content model for Strata.
//!
//! Defines the universal types the content engine depends on:
//! - [`Item`] — a content node: identity, template, partition, language,
//!   version and raw field values
//! - [`Field`] — one raw field slot on an item
//! - [`Template`] — a schema definition with ordered base templates and an
//!   optional standard-value holder item
//! - [`ItemStore`] / [`TemplateStore`] — the seams behind which item and
//!   template persistence live
//! - [`ItemFallbackSwitch`] — the ambient, per-thread language-fallback mode
//!   that item lookups honor
//!
//! Items are read-only inputs to the engine's derived-value machinery; this
//! crate never mutates an item's own field storage.

mod fallback;
mod item;
mod memory;
mod store;
mod template;

pub use fallback::{FallbackScope, ItemFallbackSwitch};
pub use item::{Field, Item};
pub use memory::{MemoryItemStore, MemoryTemplateStore};
pub use store::{ItemStore, SecurityCheck, StoreError, StoreResult, TemplateStore};
pub use template::Template;
