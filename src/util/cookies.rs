//! Best-effort expiry of the client-visible session cookie.
//!
//! The server tracks the session through a `JSESSIONID` cookie. When that
//! cookie is HttpOnly the browser hides it from script and this whole
//! module is a no-op — the server has to clear it via `Set-Cookie`. Kept
//! as a fallback for setups where the cookie is script-visible. Requires a
//! browser environment.

#[cfg(feature = "hydrate")]
const EXPIRED: &str = "JSESSIONID=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;";
#[cfg(feature = "hydrate")]
const EXPIRED_LOCALHOST: &str =
    "JSESSIONID=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/; domain=localhost;";

/// Overwrite the session cookie with an already-expired value.
///
/// Written twice, with and without an explicit `domain`, to cover both
/// ways the server may have scoped it during local development.
pub fn expire_session_cookie() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(html) = doc.dyn_into::<web_sys::HtmlDocument>() {
                let _ = html.set_cookie(EXPIRED);
                let _ = html.set_cookie(EXPIRED_LOCALHOST);
            }
        }
    }
}
