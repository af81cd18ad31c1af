use super::*;

// =============================================================
// ApiError display — what the forms show to the user
// =============================================================

#[test]
fn rejected_displays_server_message() {
    let err = ApiError::Rejected("bad creds".to_owned());
    assert_eq!(err.to_string(), "bad creds");
}

#[test]
fn no_response_displays_connectivity_message() {
    assert_eq!(
        ApiError::NoResponse.to_string(),
        "no response from server (network problem)"
    );
}

#[test]
fn transport_displays_raw_error_text() {
    let err = ApiError::Transport("fetch failed".to_owned());
    assert_eq!(err.to_string(), "fetch failed");
}

// =============================================================
// SSR stubs — calls off the browser never pretend to succeed
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn check_session_errors_off_browser() {
    let result = poll_ready(check_session());
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_errors_off_browser() {
    let result = poll_ready(login("a@b.com", "pw"));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

/// The SSR stubs resolve immediately; poll once without a runtime.
#[cfg(not(feature = "hydrate"))]
fn poll_ready<F: Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => unreachable!("stub futures resolve immediately"),
    }
}
