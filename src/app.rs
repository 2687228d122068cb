//! Attraction Map App
//!
//! Sidebar (list + filters) beside the Leaflet map. Both views are driven
//! by one filtered memo so they always show the same attractions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AttractionList, BottomSheet, FilterBar, LocateButton, MapView, NoticeBanner, PlaceCard, RoutesPanel,
    RoutesToggle, SidebarTabs,
};
use crate::config::MapConfig;
use crate::context::AppContext;
use crate::store::{store_filtered, store_finish_load, store_tab, MapState, SidebarTab};
use crate::task::Generation;

#[component]
pub fn App(config: MapConfig) -> impl IntoView {
    let store = Store::new(MapState::default());
    provide_context(store);

    let sheet = leptos_sheet_drag::create_sheet_signals(config.sheet_header_px);
    leptos_sheet_drag::bind_global_touchend(sheet);
    provide_context(AppContext::new(config.clone(), sheet));

    // Load attractions once; a torn-down view drops the response
    let load = StoredValue::new_local(Generation::new());
    let ticket = load.with_value(|g| g.issue());
    let api_url = config.api_url.clone();
    spawn_local(async move {
        log::info!(target: "app", "fetching {}", api_url);
        let result = api::fetch_attractions(&api_url).await;
        if ticket.is_current() {
            store_finish_load(&store, result);
        } else {
            log::debug!(target: "app", "discarding attraction response for a closed view");
        }
    });
    on_cleanup(move || {
        load.try_with_value(|g| g.cancel());
    });

    let filtered = Memo::new(move |_| store_filtered(&store));

    view! {
        <div class="map-layout">
            <BottomSheet>
                <SidebarTabs />
                <div class="tab-panel" class:hidden=move || store_tab(&store) != SidebarTab::Places>
                    <FilterBar />
                    <AttractionList filtered=filtered />
                </div>
                <div class="tab-panel" class:hidden=move || store_tab(&store) != SidebarTab::Routes>
                    <RoutesPanel />
                </div>
            </BottomSheet>

            <main class="map-main">
                <MapView filtered=filtered />
                <LocateButton />
                <RoutesToggle />
                <PlaceCard />
                <NoticeBanner />
            </main>
        </div>
    }
}
