//! Dashboard page listing asset classes with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the asset-class list once
//! a session exists and redirects to the login page when auth settles without
//! one.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::AssetClass;
use crate::state::asset_classes::{AssetClassOp, AssetClasses};
use crate::state::auth::AuthController;
use crate::state::providers::{self, provider_options};
use crate::state::toast::Toasts;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthController>();
    let classes = expect_context::<AssetClasses>();
    let toasts = expect_context::<Toasts>();
    let config = expect_context::<Arc<ClientConfig>>();
    let state = auth.state();

    install_unauth_redirect(state, config.login_path.clone(), use_navigate());

    let requested_list = RwSignal::new(false);
    let loader = classes.clone();
    Effect::new(move || {
        if requested_list.get_untracked() || state.with(|s| s.session.is_none()) {
            return;
        }
        requested_list.set(true);
        let loader = loader.clone();
        leptos::task::spawn_local(async move {
            // Failures are already reported through toasts.
            let _ = loader.load().await;
        });
    });

    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());
    let new_provider = RwSignal::new(providers::CLOUDFLARE.key.to_owned());

    let creator = classes.clone();
    let create_toasts = toasts.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            create_toasts.warning("Enter a name first.");
            return;
        }
        let class = AssetClass {
            name,
            description: new_description.get_untracked().trim().to_owned(),
            provider: new_provider.get_untracked(),
            ..AssetClass::default()
        };
        let creator = creator.clone();
        let toasts = create_toasts.clone();
        leptos::task::spawn_local(async move {
            if let Ok(created) = creator.create(class).await {
                new_name.set(String::new());
                new_description.set(String::new());
                toasts.success(format!("Created {}.", created.name));
            }
        });
    };

    let logout_auth = auth.clone();
    let on_logout = move |_| {
        let auth = logout_auth.clone();
        leptos::task::spawn_local(async move {
            auth.logout().await;
        });
    };

    let self_identity = move || {
        state.with(|s| {
            s.session
                .as_ref()
                .and_then(|session| session.email.clone().or_else(|| session.subject.clone()))
                .unwrap_or_else(|| "me".to_owned())
        })
    };

    let items = classes.items();
    let list_loading = classes.loading(AssetClassOp::Load);
    let create_loading = classes.loading(AssetClassOp::Create);
    let delete_loading = classes.loading(AssetClassOp::Delete);

    view! {
        <Show
            when=move || state.with(|s| !s.loading && s.session.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if state.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Asset classes"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{self_identity}</span>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </header>

                <form class="asset-class-form" on:submit=on_create.clone()>
                    <input
                        class="asset-class-form__input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                    <input
                        class="asset-class-form__input"
                        type="text"
                        placeholder="Description"
                        prop:value=move || new_description.get()
                        on:input=move |ev| new_description.set(event_target_value(&ev))
                    />
                    <select
                        class="asset-class-form__select"
                        prop:value=move || new_provider.get()
                        on:change=move |ev| new_provider.set(event_target_value(&ev))
                    >
                        {provider_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" type="submit" disabled=move || create_loading.get()>
                        "+ New Asset Class"
                    </button>
                </form>

                <Show
                    when=move || !list_loading.get()
                    fallback=move || view! { <p>"Loading asset classes..."</p> }
                >
                    <ul class="asset-class-list">
                        <For
                            each=move || items.get().items().to_vec()
                            key=|class| (class.id.clone(), class.name.clone())
                            let:class
                        >
                            <AssetClassRow class=class busy=delete_loading/>
                        </For>
                    </ul>
                </Show>
            </div>
        </Show>
    }
}

/// One asset class with its delete action.
#[component]
fn AssetClassRow(class: AssetClass, busy: RwSignal<bool>) -> impl IntoView {
    let classes = expect_context::<AssetClasses>();
    let provider = providers::from_key(Some(class.provider.as_str())).map_or("Unknown provider", |p| p.name);
    let id = class.id.clone();
    let on_delete = move |_| {
        let classes = classes.clone();
        let id = id.clone();
        leptos::task::spawn_local(async move {
            let _ = classes.delete(&id).await;
        });
    };

    view! {
        <li class="asset-class-list__item">
            <span class="asset-class-list__name">{class.name}</span>
            <span class="asset-class-list__provider">{provider}</span>
            <span class="asset-class-list__description">{class.description}</span>
            <button class="btn asset-class-list__delete" on:click=on_delete disabled=move || busy.get()>
                "Delete"
            </button>
        </li>
    }
}
