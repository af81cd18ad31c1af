//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;

/// Login form.
///
/// Posts the credentials with a 5 second timeout; on success the returned
/// user is recorded in the session store and the app navigates home. On
/// any failure the derived message is shown and session state is left
/// untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_msg = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            if submitting.get_untracked() {
                return;
            }
            error_msg.set(String::new());
            submitting.set(true);

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
                match result {
                    Ok(user) => {
                        session.login(user);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => error_msg.set(err.to_string()),
                }
                submitting.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
            let _ = &navigate;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Log in"</h2>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <Show when=move || !error_msg.get().is_empty()>
                        <p class="auth-form__error">{move || error_msg.get()}</p>
                    </Show>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Log in" }}
                    </button>
                </form>

                <div class="auth-card__links">
                    <a href="/signup">"Sign up"</a>
                    <span class="auth-card__divider">"|"</span>
                    <a href="/">"\u{2190} Home"</a>
                </div>
            </div>
        </div>
    }
}
