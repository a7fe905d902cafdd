//! Ambient language-fallback mode for item lookups.
//!
//! A per-thread, nestable tri-state telling item stores whether language
//! fallback is currently forced on (`Some(true)`), forced off
//! (`Some(false)`) or left to the store's own configuration (`None`).
//!
//! The state is a thread-local stack so nested operations can override the
//! mode for exactly their own duration. It must never be widened to a
//! process-global cell: concurrent resolutions on different threads would
//! corrupt each other's mode.

use std::cell::RefCell;

thread_local! {
    static STACK: RefCell<Vec<Option<bool>>> = const { RefCell::new(Vec::new()) };
}

/// Handle to the calling thread's ambient fallback mode.
///
/// All access is scoped: [`ItemFallbackSwitch::enter`] pushes a value and
/// returns a guard whose `Drop` pops it, so the previous mode is restored
/// on every exit path — early `?` returns and unwinds included.
pub struct ItemFallbackSwitch;

impl ItemFallbackSwitch {
    /// The innermost active override, or `None` when no scope is active.
    pub fn current() -> Option<bool> {
        STACK.with(|stack| stack.borrow().last().copied().flatten())
    }

    /// Pushes `value` as the active mode for the lifetime of the returned
    /// guard.
    #[must_use]
    pub fn enter(value: Option<bool>) -> FallbackScope {
        STACK.with(|stack| stack.borrow_mut().push(value));
        FallbackScope { _priv: () }
    }
}

/// Scope guard returned by [`ItemFallbackSwitch::enter`].
pub struct FallbackScope {
    _priv: (),
}

impl Drop for FallbackScope {
    fn drop(&mut self) {
        STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
