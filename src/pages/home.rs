//! Session-aware home page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionPhase, use_session};

/// Home page — renders by session phase.
///
/// Shows a loading indicator while the startup session check is running,
/// a welcome card with logout once authenticated, and login/signup
/// navigation otherwise.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            {move || match session.get().phase() {
                SessionPhase::Checking => {
                    view! { <p class="home-page__loading">"Loading..."</p> }.into_any()
                }
                SessionPhase::Authenticated => view! { <WelcomeCard/> }.into_any(),
                SessionPhase::Anonymous => view! { <GuestCard/> }.into_any(),
            }}
        </div>
    }
}

/// Welcome view for a logged-in user, with a logout button.
#[component]
fn WelcomeCard() -> impl IntoView {
    let session = use_session();

    // Some accounts have no display name yet; fall back to the email.
    let display_name = move || {
        session.get().user.map_or_else(String::new, |u| {
            if u.name.is_empty() { u.email } else { u.name }
        })
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                session.logout().await;
            });
        }
    };

    view! {
        <div class="card">
            <h1 class="card__title">"Welcome!"</h1>
            <p class="card__greeting">
                "Good to see you, " <strong>{display_name}</strong> "."
            </p>
            <button class="btn btn--danger" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}

/// Entry view for visitors: navigate to login or signup.
#[component]
fn GuestCard() -> impl IntoView {
    let navigate = use_navigate();
    let nav_login = navigate.clone();
    let nav_signup = navigate;

    view! {
        <div class="card">
            <h1 class="card__title">"Welcome!"</h1>
            <div class="card__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| nav_login("/login", NavigateOptions::default())
                >
                    "Log in"
                </button>
                <button
                    class="btn btn--secondary"
                    on:click=move |_| nav_signup("/signup", NavigateOptions::default())
                >
                    "Sign up"
                </button>
            </div>
        </div>
    }
}
