//! Process-wide busy indicator
//!
//! A counting signal rather than a flat flag: overlapping operations each
//! raise it and the overlay stays up until the last one releases. [`begin`]
//! pairs the raise with an RAII guard so early returns and `?` still lower
//! the signal.
//!
//! [`begin`]: LoadingSignal::begin

use std::cell::RefCell;
use std::rc::Rc;

/// Messages used by the built-in auth flows.
pub mod messages {
    pub const DEFAULT: &str = "Loading...";
    pub const SIGNING_IN: &str = "Signing in...";
    pub const CREATING_ACCOUNT: &str = "Creating your account...";
    pub const UPDATING_PROFILE: &str = "Updating your profile...";
    pub const VERIFYING_AUTH: &str = "Verifying authentication...";
    pub const REDIRECT_LOGIN: &str = "Redirecting to login...";
    pub const REDIRECT_DASHBOARD: &str = "Redirecting to dashboard...";
}

#[derive(Default)]
struct LoadingInner {
    depth: u32,
    message: String,
    on_change: Option<Rc<dyn Fn()>>,
}

/// Point-in-time view for UI consumption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadingSnapshot {
    pub active: bool,
    /// Message of the most recent `show`, present while active.
    pub message: Option<String>,
}

/// Cheap-to-clone handle to the shared loading state.
///
/// Clones share one counter; handle equality is pointer equality, which is
/// what Yew context comparison needs.
#[derive(Clone, Default)]
pub struct LoadingSignal {
    inner: Rc<RefCell<LoadingInner>>,
}

impl PartialEq for LoadingSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl LoadingSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. The most recent message wins.
    pub fn show(&self, message: impl Into<String>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.depth += 1;
            inner.message = message.into();
        }
        self.notify();
    }

    /// Lower the signal. Saturates at zero so an unbalanced `hide` is
    /// harmless.
    pub fn hide(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.depth = inner.depth.saturating_sub(1);
        }
        self.notify();
    }

    /// Raise the signal and return a guard that lowers it when dropped.
    #[must_use = "dropping the guard lowers the signal immediately"]
    pub fn begin(&self, message: impl Into<String>) -> LoadingGuard {
        self.show(message);
        LoadingGuard {
            signal: self.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().depth > 0
    }

    /// Message of the most recent `show`, if the signal is up.
    pub fn message(&self) -> Option<String> {
        let inner = self.inner.borrow();
        (inner.depth > 0).then(|| inner.message.clone())
    }

    pub fn snapshot(&self) -> LoadingSnapshot {
        let inner = self.inner.borrow();
        LoadingSnapshot {
            active: inner.depth > 0,
            message: (inner.depth > 0).then(|| inner.message.clone()),
        }
    }

    /// Install the single observer. The UI provider owns this slot; a second
    /// call replaces the first.
    pub fn set_on_change(&self, callback: impl Fn() + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(callback));
    }

    pub fn clear_on_change(&self) {
        self.inner.borrow_mut().on_change = None;
    }

    fn notify(&self) {
        // Clone out of the borrow first: the callback reads the signal.
        let callback = self.inner.borrow().on_change.clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

/// Lowers the signal exactly once, when dropped.
pub struct LoadingGuard {
    signal: LoadingSignal,
}

impl LoadingGuard {
    /// Release before end of scope.
    pub fn release(self) {}
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.signal.hide();
    }
}
