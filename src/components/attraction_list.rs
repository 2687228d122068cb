use leptos::prelude::*;

use crate::cards::{self, CardModel, ListView, LOADING_TEXT, NO_RESULTS_TEXT};
use crate::context::use_app_context;
use crate::models::Attraction;
use crate::store::{store_load_state, store_request_select, use_map_store, SelectOrigin};

const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.jpg";

#[component]
fn AttractionCard(card: CardModel) -> impl IntoView {
    let store = use_map_store();
    let id = card.id;
    let image = card.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <div
            class="attraction-card group"
            data-id=id.to_string()
            on:click=move |_| store_request_select(&store, id, SelectOrigin::Card)
        >
            <div class="attraction-card-media">
                <img src=image alt=card.name.clone() />
                <div class="category-badge" style=format!("color: {}", card.category_color)>
                    {card.category_label.clone()}
                </div>
            </div>
            <div class="attraction-card-body">
                <div>
                    <h3 class="attraction-card-title">{card.name.clone()}</h3>
                    <p class="attraction-card-description">{card.description.clone()}</p>
                </div>
                <div class="attraction-card-footer">
                    <div class="attraction-card-rating">
                        {card.stars.clone()}
                        " "
                        <span class="review-count">{format!("({})", card.review_count)}</span>
                    </div>
                    <button class="view-on-map-btn">"View on Map ➔"</button>
                </div>
            </div>
        </div>
    }
}

/// Sidebar list of the filtered attractions
#[component]
pub fn AttractionList(filtered: Memo<Vec<Attraction>>) -> impl IntoView {
    let store = use_map_store();
    let config = use_app_context().config();

    let list_view = Memo::new(move |_| cards::project(&store_load_state(&store), &filtered.get(), &config));

    view! {
        <div id="places-content" class="places-list">
            {move || match list_view.get() {
                ListView::Loading => view! {
                    <div class="list-placeholder">{LOADING_TEXT}</div>
                }.into_any(),
                ListView::Unavailable(msg) => view! {
                    <div class="list-placeholder list-error" title=msg>
                        "Attractions are unavailable right now."
                    </div>
                }.into_any(),
                ListView::Empty => view! {
                    <div class="list-placeholder">{NO_RESULTS_TEXT}</div>
                }.into_any(),
                ListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <AttractionCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
