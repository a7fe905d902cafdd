//! Store seams for item and template persistence.
//!
//! The engine never talks to a backend directly; it goes through these
//! traits. Implementations decide how items and templates are persisted,
//! versioned and secured — the engine only states what it needs from a
//! lookup.

use strata_types::{DatabaseId, ItemId, Language, TemplateId, Version};

use crate::{Item, Template};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed (connection lost, corrupt data, ...).
    #[error("backend error: {0}")]
    Backend(String),

    /// The store returned data the engine cannot use.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Whether an item lookup enforces the caller's read permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityCheck {
    /// Enforce read permissions; unreadable items resolve to `None`.
    Enable,
    /// Bypass permissions entirely. Used where the engine itself is the
    /// authority, e.g. reading template-designated prototype items.
    Disable,
}

/// Item lookup seam.
///
/// Implementations are expected to honor the thread's
/// [`ItemFallbackSwitch`](crate::ItemFallbackSwitch) state: when the switch
/// is `Some(false)`, an exact-language miss must not fall back to another
/// language.
pub trait ItemStore: Send + Sync {
    /// Fetches one item variant. `Ok(None)` when no such item exists (or it
    /// is unreadable under `SecurityCheck::Enable`); errors are reserved for
    /// store failures.
    fn item(
        &self,
        id: ItemId,
        language: &Language,
        version: Version,
        database: &DatabaseId,
        security: SecurityCheck,
    ) -> StoreResult<Option<Item>>;
}

/// Template-metadata lookup seam.
pub trait TemplateStore: Send + Sync {
    /// Fetches a template record. `Ok(None)` for unknown IDs.
    fn template(&self, id: TemplateId, database: &DatabaseId) -> StoreResult<Option<Template>>;
}
