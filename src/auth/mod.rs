//! Authentication context with an explicit subscribe/dispose lifecycle.
//!
//! The hosted backend owns real authentication; this module holds the
//! in-process view of the signed-in user and notifies interested components
//! when it changes. It is an explicit context object passed in at
//! construction time rather than an ambient global; components that
//! subscribe receive a [`Subscription`] handle and unsubscribe by disposing
//! or dropping it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

/// The signed-in user, as reported by the backend session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Backend user identifier; entries are scoped to this.
    pub id: String,
    /// Account email, when known.
    pub email: Option<String>,
}

/// A change in authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A user signed in.
    SignedIn(AuthUser),
    /// The current user signed out.
    SignedOut,
}

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct AuthInner {
    user: Option<AuthUser>,
    listeners: HashMap<u64, Listener>,
    next_listener_id: u64,
}

/// Holds the current session and a registry of state-change listeners.
///
/// Cloning is cheap and shares state, so one context can be handed to every
/// component that needs it.
///
/// # Examples
///
/// ```
/// use solace::auth::{AuthContext, AuthUser};
///
/// let auth = AuthContext::new();
/// assert!(!auth.is_authenticated());
///
/// auth.sign_in(AuthUser { id: "u1".to_string(), email: None });
/// assert!(auth.is_authenticated());
/// ```
#[derive(Clone, Default)]
pub struct AuthContext {
    inner: Arc<Mutex<AuthInner>>,
}

impl AuthContext {
    /// Creates a signed-out context.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AuthInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The currently signed-in user, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.lock().user.clone()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.lock().user.is_some()
    }

    /// Records a sign-in and notifies listeners.
    pub fn sign_in(&self, user: AuthUser) {
        debug!(user_id = %user.id, "User signed in");
        {
            let mut inner = self.lock();
            inner.user = Some(user.clone());
        }
        self.notify(&AuthEvent::SignedIn(user));
    }

    /// Clears the session and notifies listeners.
    pub fn sign_out(&self) {
        debug!("User signed out");
        {
            let mut inner = self.lock();
            inner.user = None;
        }
        self.notify(&AuthEvent::SignedOut);
    }

    /// Registers a listener for auth state changes.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// disposed or dropped.
    pub fn subscribe(&self, listener: impl Fn(&AuthEvent) + Send + Sync + 'static) -> Subscription {
        let mut inner = self.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.insert(id, Arc::new(listener));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Invokes listeners outside the lock so they may call back in.
    fn notify(&self, event: &AuthEvent) {
        let listeners: Vec<Listener> = self.lock().listeners.values().cloned().collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Handle tying a registered listener to its [`AuthContext`].
///
/// Dropping the handle unsubscribes; `dispose()` does the same explicitly
/// at teardown points.
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<AuthInner>>,
}

impl Subscription {
    /// Unsubscribes the listener.
    pub fn dispose(self) {
        // Drop impl does the removal
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.listeners.remove(&self.id);
        }
    }
}
