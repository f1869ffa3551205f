//! Fixed-position stack of active toasts.

use leptos::prelude::*;

use crate::state::toast::Toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let list = toasts.toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || list.get().items key=|toast| toast.id let:toast>
                {
                    let toasts = toasts.clone();
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="btn toast__dismiss"
                                title="Dismiss"
                                on:click=move |_| toasts.remove(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
