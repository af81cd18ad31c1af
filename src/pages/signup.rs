//! Signup page with reactive password confirmation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

/// Mismatch message shown while the two password fields differ.
///
/// An empty confirm field shows nothing — no point nagging before the
/// user has reached it. Checked again at submit time, where an empty
/// confirm does count as a mismatch.
fn mismatch_message(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() || password == confirm {
        None
    } else {
        Some("Passwords do not match.")
    }
}

/// Signup form.
///
/// Password and confirmation are compared on every keystroke of either
/// field and once more defensively at submit; a mismatch never reaches
/// the network. Successful registration swaps in a confirmation view.
#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let error_msg = RwSignal::new(String::new());
    let signed_up = RwSignal::new(false);

    // Re-evaluated whenever either password field changes.
    let mismatch = Memo::new(move |_| mismatch_message(&password.get(), &confirm.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Defensive re-check; the reactive message already covers the
        // interactive path.
        if password.get_untracked() != confirm.get_untracked() {
            error_msg.set("Passwords do not match.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            error_msg.set(String::new());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::signup(
                    &email.get_untracked(),
                    &password.get_untracked(),
                    &name.get_untracked(),
                )
                .await;
                match result {
                    Ok(()) => signed_up.set(true),
                    Err(err) => error_msg.set(err.to_string()),
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || signed_up.get()
                fallback=move || {
                    view! {
                        <div class="auth-card">
                            <h2 class="auth-card__title">"Sign up"</h2>

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
                                <input
                                    class="auth-form__input"
                                    class:auth-form__input--invalid=move || mismatch.get().is_some()
                                    type="password"
                                    placeholder="Confirm password"
                                    prop:value=move || confirm.get()
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                />

                                <Show when=move || mismatch.get().is_some()>
                                    <p class="auth-form__error">{move || mismatch.get()}</p>
                                </Show>

                                <input
                                    class="auth-form__input"
                                    type="text"
                                    placeholder="Display name"
                                    required=true
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />

                                <Show when=move || !error_msg.get().is_empty()>
                                    <p class="auth-form__error">{move || error_msg.get()}</p>
                                </Show>

                                <button class="btn btn--primary" type="submit">
                                    "Create account"
                                </button>
                            </form>

                            <div class="auth-card__links">
                                <a href="/">"\u{2190} Home"</a>
                            </div>
                        </div>
                    }
                }
            >
                <div class="auth-card auth-card--center">
                    <h2 class="auth-card__title">"Account created"</h2>
                    <p class="auth-card__note">"You can log in now."</p>
                    <a class="btn btn--primary" href="/">
                        "Go home"
                    </a>
                </div>
            </Show>
        </div>
    }
}
