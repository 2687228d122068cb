//! Sidebar Tabs
//!
//! "Places" / "Routes" tab bar and the routes panel.

use leptos::prelude::*;

use crate::store::{store_set_tab, store_tab, use_map_store, SidebarTab};

const TABS: &[(SidebarTab, &str, &str)] = &[
    (SidebarTab::Places, "tab-places", "Places"),
    (SidebarTab::Routes, "tab-routes", "Routes"),
];

#[component]
pub fn SidebarTabs() -> impl IntoView {
    let store = use_map_store();

    view! {
        <div class="sidebar-tabs">
            {TABS.iter().map(|(tab, id, label)| {
                let tab = *tab;
                let is_active = move || store_tab(&store) == tab;
                view! {
                    <button
                        id=*id
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| store_set_tab(&store, tab)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Floating button that jumps to the routes tab
#[component]
pub fn RoutesToggle() -> impl IntoView {
    let store = use_map_store();

    view! {
        <button id="routes-toggle" class="routes-toggle" on:click=move |_| store_set_tab(&store, SidebarTab::Routes)>
            "Routes"
        </button>
    }
}

#[component]
pub fn RoutesPanel() -> impl IntoView {
    view! {
        <div id="routes-content" class="routes-panel">
            <p class="routes-empty">"Suggested routes are coming soon."</p>
        </div>
    }
}
