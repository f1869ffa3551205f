//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navigation_bridge::NavigationBridge, toast_host::ToastHost};
use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::net::navigation::BrowserNavigator;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::asset_classes::AssetClasses;
use crate::state::auth::AuthController;
use crate::state::toast::Toasts;
use crate::util::timer::BrowserScheduler;

/// Root application component.
///
/// Builds the page-wide singletons in dependency order (config, toasts,
/// backend, navigator, auth, resource containers), provides them as context,
/// then starts session initialization.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = Arc::new(ClientConfig::from_build_env());
    let toasts = Toasts::new(Arc::new(BrowserScheduler), config.toast_lifetime);
    let backend = Arc::new(HttpBackend::new(config.backend_url.clone()));
    let navigator = BrowserNavigator::new();
    let auth = AuthController::new(backend.clone(), Arc::new(navigator), toasts.clone(), config.clone());
    let asset_classes = AssetClasses::new(backend, toasts.clone(), auth.clone());

    provide_context(config);
    provide_context(toasts);
    provide_context(navigator);
    provide_context(auth.clone());
    provide_context(asset_classes);

    leptos::task::spawn_local(async move {
        auth.initialize().await;
    });

    view! {
        <Title text="Digital Inventory"/>

        <Router>
            <NavigationBridge/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
