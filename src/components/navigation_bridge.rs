//! Hands in-app navigation requests from state containers to the router.
//!
//! `BrowserNavigator` lives outside the router and cannot call
//! `use_navigate` itself, so it queues a `NavigationRequest` and this
//! component, mounted inside `<Router>`, performs it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::navigation::BrowserNavigator;

#[component]
pub fn NavigationBridge() -> impl IntoView {
    let pending = expect_context::<BrowserNavigator>().pending();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(request) = pending.get() {
            pending.set(None);
            log::debug!("navigating to {} (replace={})", request.path, request.replace);
            navigate(&request.path, NavigateOptions { replace: request.replace, ..NavigateOptions::default() });
        }
    });
}
