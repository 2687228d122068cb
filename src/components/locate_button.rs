use leptos::prelude::*;

use crate::store::{store_locating, store_request_locate, use_map_store};

/// "Near me" button; pulses while the browser looks up the position
#[component]
pub fn LocateButton() -> impl IntoView {
    let store = use_map_store();

    view! {
        <button
            id="locate-me"
            class=move || if store_locating(&store) { "locate-btn animate-pulse" } else { "locate-btn" }
            title="Near me"
            on:click=move |_| store_request_locate(&store)
        >
            "◎"
        </button>
    }
}
