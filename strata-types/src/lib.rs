//! Core type definitions for Strata.
//!
//! This crate defines the fundamental, store-agnostic types used throughout
//! the content engine:
//! - Item, Template, Field and Database identifiers (UUID-backed newtypes)
//! - Language tags and item versions
//! - Reserved field identifiers with engine-defined semantics
//!
//! All domain-specific types (items, templates, store traits) belong in
//! `strata-model`, not here.

mod ids;
mod language;
mod version;

pub mod reserved;

pub use ids::{DatabaseId, FieldId, ItemId, TemplateId};
pub use language::Language;
pub use version::Version;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
///
/// Identifier parsing reports `uuid::Error` directly from the `parse` and
/// `FromStr` impls; this enum covers the remaining constructors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),
}
