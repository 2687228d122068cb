//! Place Card Component
//!
//! Detail card for the selected attraction.

use leptos::prelude::*;

use crate::store::{store_card, store_set_card, use_map_store};

#[component]
pub fn PlaceCard() -> impl IntoView {
    let store = use_map_store();

    view! {
        <Show when=move || store_card(&store).is_some()>
            {move || store_card(&store).map(|card| view! {
                <div id="place-card" class="place-card" data-id=card.id.to_string()>
                    <button
                        class="place-card-close"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_set_card(&store, None);
                        }
                    >
                        "×"
                    </button>
                    <h2 id="card-title" class="place-card-title">{card.name}</h2>
                    <p id="card-address" class="place-card-address">{card.address}</p>
                    <div class="place-card-meta">
                        <span class="place-card-rating">"★ " <span id="card-rating">{card.rating}</span></span>
                    </div>
                    <p id="card-description" class="place-card-description">{card.description}</p>
                </div>
            })}
        </Show>
    }
}
