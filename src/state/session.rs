//! Session store: the one piece of shared state in the client.
//!
//! `SessionState` is plain data with pure transitions; [`Session`] wraps it
//! in a single `RwSignal` provided via context at the application root.
//! Views never mutate the state directly — all writes go through the three
//! operations here (`initialize`, `login`, `logout`), which is the only
//! consistency discipline a single-threaded page needs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;
use crate::util::cookies;

/// Session state: the current user identity plus the initial-check flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Fresh page load: nobody yet, session check pending.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Record the outcome of the initial session check.
    ///
    /// The only transition that ever observes `loading == true`; it always
    /// clears the flag, whatever the outcome was.
    pub fn finish_check(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Record a completed login. Valid from any state; logging in while
    /// already authenticated just replaces the identity.
    pub fn authenticate(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop the current identity. Valid from any state and idempotent.
    pub fn clear(&mut self) {
        self.user = None;
    }

    /// Derived view of the state for rendering.
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Checking
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }
}

/// Where the session machine currently is, as far as the UI can tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The startup session check has not completed yet.
    Checking,
    /// A user is logged in.
    Authenticated,
    /// The check completed with no session, or the user logged out.
    Anonymous,
}

/// Handle to the shared session store.
///
/// Created once in `App`, provided via context, and handed to views by
/// [`use_session`]. Cheap to copy into event handlers and async tasks.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Create a fresh store for this page load.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive read of the current state.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Run the startup session check and record its outcome.
    ///
    /// Called once when the app reaches the browser. Re-entry is a no-op:
    /// `loading` is true only until the first completion, and nothing sets
    /// it back. Resolves to `(no user, not loading)` on every failure mode
    /// so the UI never hangs on the loading screen.
    pub async fn initialize(&self) {
        if !self.state.get_untracked().loading {
            return;
        }
        let user = match api::check_session().await {
            Ok(user) => Some(user),
            Err(err) => {
                leptos::logging::warn!("session check failed: {err}");
                None
            }
        };
        self.state.update(|s| s.finish_check(user));
    }

    /// Record a login the form already completed against the server.
    pub fn login(&self, user: User) {
        self.state.update(|s| s.authenticate(user));
    }

    /// Log out: tell the server, then unconditionally drop local state.
    ///
    /// A failed logout call is not recoverable from the client, so the
    /// local identity is cleared whatever the server said — the UI must
    /// never keep looking logged in. Cookie expiry is best-effort only;
    /// an HttpOnly session cookie can only be cleared by the server.
    pub async fn logout(&self) {
        if let Err(err) = api::logout().await {
            leptos::logging::warn!("logout request failed: {err}");
        }
        cookies::expire_session_cookie();
        self.state.update(SessionState::clear);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the session store provided by `App`.
///
/// # Panics
///
/// Panics when called outside the provider scope — that is a wiring bug in
/// the component tree, not a runtime condition to recover from.
pub fn use_session() -> Session {
    use_context::<Session>()
        .expect("use_session called outside the session provider scope")
}
