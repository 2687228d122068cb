//! Map View Component
//!
//! Owns the Leaflet map. Keeps markers in step with the filtered list and
//! carries out selection and "near me" requests from the store.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::error::MapError;
use crate::leaflet_map::{LeafletMap, MarkerHandle};
use crate::markers::MarkerRegistry;
use crate::models::Attraction;
use crate::selection::{CardTiming, SelectionPlan, UserFix};
use crate::store::{
    store_locate_seq, store_location_failed, store_location_found, store_plan_selection, store_request_select,
    store_select_request, store_set_card, use_map_store, SelectOrigin,
};
use crate::task::Generation;

/// Leaflet map plus the markers it currently shows
struct MapRuntime {
    map: LeafletMap,
    registry: MarkerRegistry<MarkerHandle>,
}

fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(url) {
            log::error!(target: "selection", "navigation to {} failed: {:?}", url, e);
        }
    }
}

#[component]
pub fn MapView(filtered: Memo<Vec<Attraction>>) -> impl IntoView {
    let store = use_map_store();
    let ctx = use_app_context();
    let config = ctx.config();
    let strategy = config.marker_strategy;

    let map_ref = NodeRef::<leptos::html::Div>::new();
    let runtime = StoredValue::new_local(None::<MapRuntime>);
    let settle = StoredValue::new_local(Generation::new());
    let (mounted, set_mounted) = signal(false);

    // Mount Leaflet once the container exists
    let mount_config = config.clone();
    Effect::new(move |_| {
        let Some(el) = map_ref.get() else { return };
        if mounted.get_untracked() {
            return;
        }
        let on_marker_click = move |id: u32| store_request_select(&store, id, SelectOrigin::Marker);
        match LeafletMap::mount(&el, &mount_config, on_marker_click) {
            Ok(map) => {
                map.on_location(
                    move |fix: UserFix| {
                        store_location_found(&store);
                        runtime.try_update_value(|rt| {
                            if let Some(rt) = rt {
                                rt.map.show_user_position(&fix);
                            }
                        });
                    },
                    move |error: MapError| store_location_failed(&store, &error),
                );
                runtime.set_value(Some(MapRuntime {
                    map,
                    registry: MarkerRegistry::new(),
                }));
                set_mounted.set(true);
                log::info!(target: "map", "map mounted");
            }
            Err(e) => log::error!(target: "map", "map init failed: {}", e),
        }
    });

    // Markers follow the same filtered subset as the list
    Effect::new(move |_| {
        let list = filtered.get();
        if !mounted.get() {
            return;
        }
        runtime.update_value(|rt| {
            if let Some(rt) = rt {
                rt.registry.sync(&mut rt.map.markers, &list, strategy);
            }
        });
    });

    // Carry out selection requests from cards and markers
    let select_config = config.clone();
    Effect::new(move |_| {
        let Some(request) = store_select_request(&store) else { return };
        let Some(plan) = store_plan_selection(&store, request, &select_config) else { return };

        let (camera, card, timing) = match plan {
            SelectionPlan::Navigate(url) => {
                navigate(&url);
                return;
            }
            SelectionPlan::Focus { camera, card, timing } => (camera, card, timing),
        };

        // A newer selection drops any card still waiting for its camera
        let ticket = settle.with_value(|g| g.issue());
        if timing == CardTiming::Immediately {
            store_set_card(&store, Some(card.clone()));
        }

        runtime.with_value(|rt| {
            let Some(rt) = rt else { return };
            if let Err(e) = rt.map.fly_to(&camera) {
                log::error!(target: "selection", "fly to {} failed: {}", request.id, e);
            }
            if timing == CardTiming::AfterSettle {
                let ticket = ticket.clone();
                let card = card.clone();
                rt.map.once_move_end(move || {
                    if ticket.redeem() {
                        store_set_card(&store, Some(card));
                    }
                });
            }
        });

        if timing == CardTiming::AfterSettle {
            // Fallback when no moveend arrives
            Timeout::new(select_config.settle_delay_ms, move || {
                if ticket.redeem() {
                    store_set_card(&store, Some(card));
                }
            })
            .forget();
        }
    });

    // "Near me"
    Effect::new(move |_| {
        if store_locate_seq(&store) == 0 {
            return;
        }
        let requested = runtime.with_value(|rt| match rt {
            Some(rt) => {
                rt.map.locate();
                true
            }
            None => false,
        });
        if !requested {
            store_location_failed(&store, &MapError::Leaflet("map not mounted".to_string()));
        }
    });

    on_cleanup(move || {
        settle.try_with_value(|g| g.cancel());
        if let Some(Some(rt)) = runtime.try_update_value(|rt| rt.take()) {
            rt.map.destroy();
        }
    });

    view! {
        <div id="map" class="map-container" node_ref=map_ref></div>
    }
}
