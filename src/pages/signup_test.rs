use super::*;

// =============================================================
// Password confirmation
// =============================================================

#[test]
fn differing_passwords_are_flagged() {
    assert_eq!(
        mismatch_message("abc123", "abc1234"),
        Some("Passwords do not match.")
    );
}

#[test]
fn matching_passwords_clear_the_message() {
    assert!(mismatch_message("abc123", "abc123").is_none());
}

#[test]
fn empty_confirm_shows_nothing_yet() {
    assert!(mismatch_message("abc123", "").is_none());
}

#[test]
fn empty_password_with_filled_confirm_is_flagged() {
    assert!(mismatch_message("", "abc123").is_some());
}

#[test]
fn both_empty_shows_nothing() {
    assert!(mismatch_message("", "").is_none());
}
