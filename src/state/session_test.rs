use super::*;
use crate::net::types::User;

fn user(id: i64) -> User {
    User {
        id,
        email: format!("user{id}@example.com"),
        name: format!("User {id}"),
    }
}

// =============================================================
// Defaults — fresh page load
// =============================================================

#[test]
fn default_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
}

#[test]
fn default_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
}

#[test]
fn default_phase_is_checking() {
    assert_eq!(SessionState::default().phase(), SessionPhase::Checking);
}

// =============================================================
// finish_check — the only path out of loading
// =============================================================

#[test]
fn finish_check_with_user_authenticates() {
    let mut state = SessionState::default();
    state.finish_check(Some(user(1)));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    assert!(!state.loading);
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

#[test]
fn finish_check_without_user_is_anonymous() {
    let mut state = SessionState::default();
    state.finish_check(None);
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn finish_check_clears_loading_on_every_outcome() {
    for outcome in [None, Some(user(1))] {
        let mut state = SessionState::default();
        state.finish_check(outcome);
        assert!(!state.loading);
    }
}

// =============================================================
// authenticate / clear — login and logout transitions
// =============================================================

#[test]
fn authenticate_then_clear_ends_anonymous() {
    let mut state = SessionState::default();
    state.finish_check(None);
    state.authenticate(user(1));
    state.clear();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn authenticate_while_authenticated_replaces_identity() {
    let mut state = SessionState::default();
    state.finish_check(Some(user(1)));
    state.authenticate(user(2));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(2));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.finish_check(Some(user(1)));
    state.clear();
    state.clear();
    assert!(state.user.is_none());
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn clear_while_anonymous_is_a_no_op() {
    let mut state = SessionState::default();
    state.finish_check(None);
    state.clear();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

// =============================================================
// Phase mapping
// =============================================================

#[test]
fn loading_wins_over_user_for_phase() {
    // Not reachable through the store's operations, but the derived view
    // must stay consistent if it ever were.
    let state = SessionState {
        user: Some(user(1)),
        loading: true,
    };
    assert_eq!(state.phase(), SessionPhase::Checking);
}
