use std::cell::RefCell;
use std::marker::PhantomData;

use serde_json::Value;

thread_local! {
    /// Ambient scope stack for the current thread. All loggers on one thread
    /// share it; threads never see each other's entries.
    static SCOPES: RefCell<Vec<Value>> = const { RefCell::new(Vec::new()) };
}

/// Handle for a pushed scope. Dropping it removes the entry exactly once,
/// whether the enclosing block exits normally or unwinds.
#[must_use = "dropping the guard immediately ends the scope"]
#[derive(Debug)]
pub struct ScopeGuard {
    depth: usize,
    // The guard indexes into this thread's stack, so it must stay here.
    _not_send: PhantomData<*const ()>,
}

pub(crate) fn push(value: Value) -> ScopeGuard {
    SCOPES.with(|scopes| {
        let mut stack = scopes.borrow_mut();
        stack.push(value);
        ScopeGuard {
            depth: stack.len() - 1,
            _not_send: PhantomData,
        }
    })
}

/// Snapshot of the active scopes, outermost first.
pub(crate) fn active() -> Vec<Value> {
    SCOPES.with(|scopes| scopes.borrow().clone())
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // try_with: the thread-local may already be gone during thread
        // teardown, and Drop must never panic.
        let _ = SCOPES.try_with(|scopes| {
            let mut stack = scopes.borrow_mut();
            if stack.len() > self.depth {
                stack.truncate(self.depth);
            }
        });
    }
}
