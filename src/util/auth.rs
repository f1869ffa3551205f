//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route components apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once auth has settled without a session.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.phase.is_pending() && state.session.is_none()
}

/// Redirect to `login_path` whenever auth has settled and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let redirect = auth.with(should_redirect_unauth);
        if redirect {
            log::debug!("no session, redirecting to {login_path}");
            navigate(&login_path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
