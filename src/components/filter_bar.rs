//! Filter Bar Component
//!
//! Search box, category buttons and barangay selector. Each input writes
//! one field of the store's `FilterState`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Facet;
use crate::store::{store_barangays, store_categories, store_filter, store_update_filter, use_map_store};
use crate::task::Debounce;

/// Search input; typing restarts a short debounce before the filter changes
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_map_store();
    let debounce_ms = use_app_context().with_config(|c| c.search_debounce_ms);
    let pending = StoredValue::new_local(Debounce::<Timeout>::new());

    let on_input = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        let timeout = Timeout::new(debounce_ms, move || {
            store_update_filter(&store, |f| f.search_term = term);
        });
        pending.update_value(|d| {
            d.schedule(timeout);
        });
    };

    on_cleanup(move || {
        pending.try_update_value(|d| d.cancel());
    });

    view! {
        <input
            id="search-input"
            class="search-input"
            type="search"
            placeholder="Search attractions..."
            autocomplete="off"
            on:input=on_input
        />
    }
}

/// Category buttons: "All" plus each category present in the data
#[component]
pub fn CategoryFilter() -> impl IntoView {
    let store = use_map_store();
    let current = move || store_filter(&store).category;

    let button = move |value: String, label: String| {
        let facet = Facet::from_value(&value);
        let is_active = {
            let facet = facet.clone();
            move || current() == facet
        };
        view! {
            <button
                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                data-category=value
                on:click=move |_| {
                    let facet = facet.clone();
                    store_update_filter(&store, |f| f.category = facet);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="category-filter">
            {button(Facet::ALL.to_string(), "All".to_string())}
            {move || store_categories(&store)
                .into_iter()
                .map(|c| button(c.clone(), c))
                .collect_view()}
        </div>
    }
}

/// Barangay selector built from the barangays present in the data
#[component]
pub fn BarangayFilter() -> impl IntoView {
    let store = use_map_store();

    view! {
        <select
            id="barangay-filter"
            class="barangay-filter"
            on:change=move |ev| {
                let facet = Facet::from_value(&event_target_value(&ev));
                store_update_filter(&store, |f| f.barangay = facet);
            }
        >
            <option value=Facet::ALL>"All Barangays"</option>
            {move || store_barangays(&store)
                .into_iter()
                .map(|b| {
                    let label = b.clone();
                    view! { <option value=b>{label}</option> }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <div class="filter-bar">
            <SearchBox />
            <CategoryFilter />
            <BarangayFilter />
        </div>
    }
}
