//! Login page: reports the session lifecycle and offers a retry.

use leptos::prelude::*;

use crate::state::auth::{AuthController, AuthPhase};

fn status_text(phase: AuthPhase) -> &'static str {
    match phase {
        AuthPhase::Loading => "Checking your session...",
        AuthPhase::Redirecting => "Redirecting to sign-in...",
        AuthPhase::ExchangingCode => "Completing sign-in...",
        AuthPhase::Authenticated => "Signed in.",
        AuthPhase::LoggingOut => "Signing out...",
        AuthPhase::Unauthenticated => "You are signed out.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthController>();
    let state = auth.state();

    let on_sign_in = move |_| {
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.sign_in().await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Digital Inventory"</h1>
                <p class="login-message">{move || status_text(state.get().phase)}</p>
                <button class="login-button" on:click=on_sign_in disabled=move || state.get().loading>
                    "Sign in"
                </button>
            </div>
        </div>
    }
}
