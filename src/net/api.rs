//! HTTP calls against the users API.
//!
//! Client-side (hydrate): real requests via `gloo-net`, with the session
//! cookie attached where the endpoint is session-scoped. Server-side (SSR):
//! stubs returning an error since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The three variants carry the
//! message shown to the user, in decreasing specificity: the server's own
//! failure message, a generic connectivity message when nothing came back,
//! or the raw transport error text. Failed calls are terminal for that
//! attempt; there are no retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ApiResponse;
use super::types::User;

/// Failure modes for calls against the users API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered and reported a non-success outcome.
    #[error("{0}")]
    Rejected(String),
    /// The request went out but no response arrived in time.
    #[error("no response from server (network problem)")]
    NoResponse,
    /// The browser could not complete the request at all.
    #[error("{0}")]
    Transport(String),
}

/// Timeout for login and signup requests. The session check and logout are
/// deliberately unbounded; their callers tolerate a slow answer.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Check the current session via `GET /api/users/session`.
///
/// Success means the server reported `status: "success"` and included a
/// user payload; any other shape (explicit failure, malformed body,
/// transport error) means "no session".
///
/// # Errors
///
/// Returns `ApiError` describing why no session was established.
pub async fn check_session() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users/session")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !body.is_success() {
            return Err(ApiError::Rejected(body.message_or("no active session")));
        }
        body.into_user()
            .ok_or_else(|| ApiError::Rejected("session response missing user".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Log in via `POST /api/users/login` with a 5 second timeout.
///
/// On success the server sets the session cookie and returns the user
/// record, which the caller hands to the session store.
///
/// # Errors
///
/// Returns `ApiError` carrying the message to show on the login form.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post("/api/users/login")
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = send_with_timeout(request).await?;
        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !body.is_success() {
            return Err(ApiError::Rejected(body.message_or("login failed")));
        }
        body.into_user()
            .ok_or_else(|| ApiError::Rejected("login response missing user".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Log out via `POST /api/users/logout`.
///
/// Accepted as successful when the body reports `status: "success"` or the
/// HTTP status is OK; some server builds return an empty 200.
///
/// # Errors
///
/// Returns `ApiError` when the server rejected the request or it never
/// completed. Callers clear local state regardless.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post("/api/users/logout")
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let http_ok = resp.ok();
        let body: ApiResponse = resp.json().await.unwrap_or_default();
        if body.is_success() || http_ok {
            Ok(())
        } else {
            Err(ApiError::Rejected(body.message_or("logout failed")))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Register an account via `POST /api/users/signup` with a 5 second
/// timeout. No credentials are attached; the endpoint is anonymous.
///
/// # Errors
///
/// Returns `ApiError` carrying the message to show on the signup form.
pub async fn signup(email: &str, password: &str, name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "name": name });
        let request = gloo_net::http::Request::post("/api/users/signup")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = send_with_timeout(request).await?;
        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if body.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected(body.message_or("signup failed")))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Race a request against [`REQUEST_TIMEOUT`].
///
/// The browser's fetch keeps running past the deadline, but its outcome is
/// discarded; the caller sees `NoResponse` and the attempt is over.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let send = std::pin::pin!(request.send());
    let deadline = std::pin::pin!(gloo_timers::future::sleep(REQUEST_TIMEOUT));
    match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Transport(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::NoResponse),
    }
}
