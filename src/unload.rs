//! Leave-page confirmation while a form has unsaved edits.
//!
//! The host environment (a browser `beforeunload` listener, a desktop window
//! close handler, a TUI quit key) implements [`NavigationHook`]. The
//! [`UnloadGuard`] arms it exactly while the form is dirty and releases it
//! when dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// A host-side interception point for navigating away.
pub trait NavigationHook {
    /// Start asking for confirmation before leaving.
    fn arm(&mut self);

    /// Stop intercepting.
    fn disarm(&mut self);
}

/// What the host should do when the user tries to leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveDecision {
    Allow,
    Confirm,
}

/// Keeps a [`NavigationHook`] armed while, and only while, the form is dirty.
#[derive(Debug)]
pub struct UnloadGuard<H: NavigationHook> {
    hook: H,
    armed: bool,
}

impl<H: NavigationHook> UnloadGuard<H> {
    /// Wrap a hook; nothing is armed until the first dirty `sync`.
    pub fn new(hook: H) -> Self {
        Self { hook, armed: false }
    }

    /// Follow the form's dirty flag. Returns `true` if the hook changed.
    pub fn sync(&mut self, dirty: bool) -> bool {
        if dirty == self.armed {
            return false;
        }
        if dirty {
            self.hook.arm();
            debug!("unload guard armed");
        } else {
            self.hook.disarm();
            debug!("unload guard released");
        }
        self.armed = dirty;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn on_before_unload(&self) -> LeaveDecision {
        if self.armed {
            LeaveDecision::Confirm
        } else {
            LeaveDecision::Allow
        }
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }
}

impl<H: NavigationHook> Drop for UnloadGuard<H> {
    fn drop(&mut self) {
        if self.armed {
            self.hook.disarm();
            self.armed = false;
        }
    }
}

/// Hook backed by a shared flag that a host event loop can poll.
#[derive(Clone, Debug, Default)]
pub struct FlagHook(Arc<AtomicBool>);

impl FlagHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl NavigationHook for FlagHook {
    fn arm(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn disarm(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
