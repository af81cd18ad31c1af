use super::*;

fn parse(json: &str) -> ApiResponse {
    serde_json::from_str(json).expect("envelope should deserialize")
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_from_api_shape() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"email":"a@b.com","name":"A"}"#).expect("user");
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "A");
}

// =============================================================
// Envelope status
// =============================================================

#[test]
fn success_status_is_success() {
    let resp = parse(r#"{"status":"success"}"#);
    assert!(resp.is_success());
}

#[test]
fn fail_status_is_not_success() {
    let resp = parse(r#"{"status":"fail"}"#);
    assert!(!resp.is_success());
}

#[test]
fn missing_status_is_not_success() {
    let resp = parse(r#"{"message":"oops"}"#);
    assert!(!resp.is_success());
}

// =============================================================
// User payload normalization
// =============================================================

#[test]
fn into_user_reads_content_field() {
    let resp = parse(
        r#"{"status":"success","content":{"id":1,"email":"a@b.com","name":"A"}}"#,
    );
    let user = resp.into_user().expect("user from content");
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn into_user_accepts_legacy_user_field() {
    let resp = parse(
        r#"{"status":"success","user":{"id":2,"email":"b@c.com","name":"B"}}"#,
    );
    let user = resp.into_user().expect("user from legacy field");
    assert_eq!(user.id, 2);
}

#[test]
fn into_user_prefers_content_over_legacy() {
    let resp = parse(
        r#"{"status":"success",
            "content":{"id":1,"email":"a@b.com","name":"A"},
            "user":{"id":2,"email":"b@c.com","name":"B"}}"#,
    );
    assert_eq!(resp.into_user().expect("user").id, 1);
}

#[test]
fn into_user_none_when_payload_missing() {
    let resp = parse(r#"{"status":"success"}"#);
    assert!(resp.into_user().is_none());
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn message_or_prefers_server_message() {
    let resp = parse(r#"{"status":"fail","message":"bad creds"}"#);
    assert_eq!(resp.message_or("login failed"), "bad creds");
}

#[test]
fn message_or_falls_back_when_absent() {
    let resp = parse(r#"{"status":"fail"}"#);
    assert_eq!(resp.message_or("login failed"), "login failed");
}
