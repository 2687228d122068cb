//! Attraction Store
//!
//! `AttractionStore` holds the attraction list fetched once per page load.
//! `MapState` is the page-wide reactive store built with `reactive_stores`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::category;
use crate::config::MapConfig;
use crate::error::MapError;
use crate::models::{Attraction, FilterState};
use crate::selection::{self, DetailCard, SelectionPlan, LOCATION_ERROR_NOTICE};

/// Progress of the single attraction fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(Vec<Attraction>),
    Failed(String),
}

/// Attractions for the current page session; immutable once loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttractionStore {
    state: LoadState,
}

impl AttractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Record the outcome of the fetch. Only the first successful load counts.
    pub fn finish_load(&mut self, result: crate::error::Result<Vec<Attraction>>) {
        if self.is_ready() {
            log::warn!(target: "store", "attractions already loaded, ignoring second load");
            return;
        }
        self.state = match result {
            Ok(attractions) => {
                log::info!(target: "store", "loaded {} attractions", attractions.len());
                LoadState::Ready(attractions)
            }
            Err(e) => {
                log::error!(target: "store", "Error fetching attractions: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    /// Loaded attractions, empty until the fetch succeeds
    pub fn get_all(&self) -> &[Attraction] {
        match &self.state {
            LoadState::Ready(list) => list,
            _ => &[],
        }
    }

    pub fn find(&self, id: u32) -> Option<&Attraction> {
        self.get_all().iter().find(|a| a.id == id)
    }

    /// Distinct barangays present in the data, sorted
    pub fn barangays(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .get_all()
            .iter()
            .filter_map(|a| a.barangay.clone())
            .filter(|b| !b.is_empty())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Distinct categories, known ones first in their fixed order
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.get_all().iter().map(|a| a.category.clone()).collect();
        names.sort_by(|a, b| {
            category::display_rank(a)
                .cmp(&category::display_rank(b))
                .then_with(|| a.cmp(b))
        });
        names.dedup();
        names
    }
}

/// Single request to focus the map on one attraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectRequest {
    pub id: u32,
    pub origin: SelectOrigin,
    /// Distinguishes repeated clicks on the same attraction
    pub seq: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOrigin {
    Card,
    Marker,
}

/// Sidebar tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Places,
    Routes,
}

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MapState {
    /// Attractions fetched from the server
    pub attractions: AttractionStore,
    /// Current search / category / barangay selection
    pub filter: FilterState,
    /// Latest selection request from a card or marker
    pub select_request: Option<SelectRequest>,
    /// Detail card currently shown
    pub card: Option<DetailCard>,
    /// User-visible notice (geolocation failure etc.)
    pub notice: Option<String>,
    pub tab: SidebarTab,
    /// A geolocation request is in flight
    pub locating: bool,
    /// Bumped on every "near me" click
    pub locate_seq: u32,
}

/// Type alias for the store
pub type MapStore = Store<MapState>;

/// Get the map store from context
pub fn use_map_store() -> MapStore {
    expect_context::<MapStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_finish_load(store: &MapStore, result: crate::error::Result<Vec<Attraction>>) {
    store.attractions().write().finish_load(result);
}

pub fn store_load_state(store: &MapStore) -> LoadState {
    store.attractions().read().state().clone()
}

/// Attractions passing the current filter, in store order
pub fn store_filtered(store: &MapStore) -> Vec<Attraction> {
    let filter = store.filter().get();
    crate::filter::apply(store.attractions().read().get_all(), &filter)
}

pub fn store_categories(store: &MapStore) -> Vec<String> {
    store.attractions().read().categories()
}

pub fn store_barangays(store: &MapStore) -> Vec<String> {
    store.attractions().read().barangays()
}

/// Plan a selection against the current attractions without subscribing to them
pub fn store_plan_selection(store: &MapStore, request: SelectRequest, config: &MapConfig) -> Option<SelectionPlan> {
    selection::plan(&store.attractions().read_untracked(), request.id, request.origin, config)
}

pub fn store_filter(store: &MapStore) -> FilterState {
    store.filter().get()
}

pub fn store_update_filter(store: &MapStore, f: impl FnOnce(&mut FilterState)) {
    store.filter().update(f);
}

/// Ask the map to focus an attraction
pub fn store_request_select(store: &MapStore, id: u32, origin: SelectOrigin) {
    store.select_request().update(|req| {
        let seq = req.map(|r| r.seq.wrapping_add(1)).unwrap_or(0);
        *req = Some(SelectRequest { id, origin, seq });
    });
}

pub fn store_select_request(store: &MapStore) -> Option<SelectRequest> {
    store.select_request().get()
}

pub fn store_card(store: &MapStore) -> Option<DetailCard> {
    store.card().get()
}

pub fn store_set_card(store: &MapStore, card: Option<DetailCard>) {
    store.card().set(card);
}

pub fn store_notice(store: &MapStore) -> Option<String> {
    store.notice().get()
}

pub fn store_set_notice(store: &MapStore, notice: Option<String>) {
    store.notice().set(notice);
}

pub fn store_tab(store: &MapStore) -> SidebarTab {
    store.tab().get()
}

pub fn store_set_tab(store: &MapStore, tab: SidebarTab) {
    store.tab().set(tab);
}

pub fn store_locating(store: &MapStore) -> bool {
    store.locating().get()
}

pub fn store_locate_seq(store: &MapStore) -> u32 {
    store.locate_seq().get()
}

/// Ask the map for the user's position
pub fn store_request_locate(store: &MapStore) {
    store.locating().set(true);
    store.locate_seq().update(|seq| *seq = seq.wrapping_add(1).max(1));
}

/// A position arrived; the map draws it, the page only clears its state
pub fn store_location_found(store: &MapStore) {
    store.locating().set(false);
    store.notice().set(None);
}

/// Geolocation failed or was denied. Only the notice changes; the camera
/// and any open card stay where they are.
pub fn store_location_failed(store: &MapStore, error: &MapError) {
    log::warn!(target: "geolocation", "location unavailable: {}", error);
    store.locating().set(false);
    store.notice().set(Some(LOCATION_ERROR_NOTICE.to_string()));
}
