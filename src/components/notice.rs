use leptos::prelude::*;

use crate::store::{store_notice, store_set_notice, use_map_store};

/// Dismissable banner for user-facing notices
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_map_store();

    view! {
        <Show when=move || store_notice(&store).is_some()>
            <div class="notice-banner" role="alert">
                <span class="notice-text">{move || store_notice(&store).unwrap_or_default()}</span>
                <button class="notice-dismiss" on:click=move |_| store_set_notice(&store, None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
