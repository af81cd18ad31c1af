#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account identity as reported by the users API.
///
/// Opaque to the client: fields are stored and displayed, never validated
/// or mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// Response envelope shared by all `/api/users/*` endpoints.
///
/// `status` is the application-level outcome, distinct from the HTTP status
/// code. User payloads arrive in `content`; older server builds used a
/// `user` field instead, and both are still emitted in the wild. Every
/// field is defaulted so malformed bodies deserialize to a conservative
/// "no session / no message" shape instead of failing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub content: Option<User>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Whether the server reported the operation as completed.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Normalize the primary and legacy user payload fields into one.
    ///
    /// This is the single place the `content` / legacy `user` duality is
    /// resolved; callers never see both fields. `content` wins when the
    /// server sends both.
    pub fn into_user(self) -> Option<User> {
        self.content.or(self.user)
    }

    /// Server-supplied failure message, or the given per-operation fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_owned())
    }
}
