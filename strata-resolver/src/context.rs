//! Execution context for resolution calls.
//!
//! The caching policy depends on the deployment role the lookup runs under:
//! publish and scheduler passes are single-shot bulk operations and must not
//! pin chain-derived maps in the cache. Callers state their role explicitly
//! here instead of the engine reading an ambient site name, which keeps the
//! policy testable.

/// Site name whose lookups bypass cache storage.
pub const PUBLISHER_SITE: &str = "publisher";

/// Site name whose lookups bypass cache storage.
pub const SCHEDULER_SITE: &str = "scheduler";

/// The deployment role a resolution call runs under.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExecutionRole {
    /// No site context is active.
    #[default]
    None,
    /// A named site context ("website", "shell", "publisher", ...).
    Site(String),
}

impl ExecutionRole {
    /// True when computed maps may be stored in the cache under this role:
    /// a named site other than the publisher and scheduler sites.
    pub fn caching_eligible(&self) -> bool {
        match self {
            ExecutionRole::None => false,
            ExecutionRole::Site(name) => name != PUBLISHER_SITE && name != SCHEDULER_SITE,
        }
    }
}

/// Per-call context handed to the provider and cache.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionContext {
    pub role: ExecutionRole,
}

impl ResolutionContext {
    /// No active site context.
    pub fn none() -> Self {
        Self {
            role: ExecutionRole::None,
        }
    }

    /// A named site context.
    pub fn site(name: impl Into<String>) -> Self {
        Self {
            role: ExecutionRole::Site(name.into()),
        }
    }
}
