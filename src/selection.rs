//! Selection
//!
//! Decides what happens when the user focuses an attraction (card or
//! marker click) or asks for their own position.

use crate::config::{MapConfig, SelectionMode};
use crate::models::Attraction;
use crate::store::{AttractionStore, SelectOrigin};

pub const LOCATION_ERROR_NOTICE: &str = "Unable to get your location. Please check your browser settings.";

/// Detail card shown for a selected attraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub description: String,
    pub rating: String,
}

/// Camera transition requested from the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMove {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
    pub duration_secs: f64,
}

/// When the detail card appears relative to the camera move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTiming {
    /// Once the camera settles
    AfterSettle,
    /// Right away while the camera moves
    Immediately,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionPlan {
    Focus {
        camera: CameraMove,
        card: DetailCard,
        timing: CardTiming,
    },
    /// Leave for the attraction's own page
    Navigate(String),
}

pub fn address_label(attraction: &Attraction, config: &MapConfig) -> String {
    match attraction.barangay.as_deref() {
        Some(b) if !b.is_empty() => format!("{}, {}", b, config.locality),
        _ => config.default_address.clone(),
    }
}

pub fn detail_card(attraction: &Attraction, config: &MapConfig) -> DetailCard {
    DetailCard {
        id: attraction.id,
        name: attraction.name.clone(),
        address: address_label(attraction, config),
        description: attraction.description.clone(),
        rating: format!("{:.1}", attraction.rating.unwrap_or(config.default_rating)),
    }
}

/// Plan a selection. Unknown ids yield `None`: a marker or card can outlive
/// the filter pass that removed it.
pub fn plan(store: &AttractionStore, id: u32, origin: SelectOrigin, config: &MapConfig) -> Option<SelectionPlan> {
    let Some(attraction) = store.find(id) else {
        log::debug!(target: "selection", "ignoring selection of unknown id {}", id);
        return None;
    };

    if config.selection_mode == SelectionMode::Navigate {
        return Some(SelectionPlan::Navigate(config.attraction_url(id)));
    }

    let (duration_secs, timing) = match origin {
        SelectOrigin::Card => (config.fly_duration_secs, CardTiming::AfterSettle),
        SelectOrigin::Marker => (config.marker_fly_duration_secs, CardTiming::Immediately),
    };
    Some(SelectionPlan::Focus {
        camera: CameraMove {
            lat: attraction.lat,
            lng: attraction.lng,
            zoom: config.focus_zoom,
            duration_secs,
        },
        card: detail_card(attraction, config),
        timing,
    })
}

/// Position fix from the browser, accuracy in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserFix {
    pub lat: f64,
    pub lng: f64,
    pub accuracy: f64,
}

/// Slot for the user-position overlay; holds at most one live handle
#[derive(Debug)]
pub struct UserPosition<H> {
    current: Option<H>,
}

impl<H> Default for UserPosition<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> UserPosition<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new overlay, handing back the previous one for removal
    pub fn place(&mut self, handle: H) -> Option<H> {
        self.current.replace(handle)
    }

    pub fn take(&mut self) -> Option<H> {
        self.current.take()
    }

    pub fn is_placed(&self) -> bool {
        self.current.is_some()
    }
}

/// Accuracy circle radius for a reported accuracy in meters
pub fn accuracy_radius(accuracy: f64) -> f64 {
    (accuracy / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> AttractionStore {
        let mut store = AttractionStore::new();
        store.finish_load(Ok(vec![
            Attraction {
                id: 1,
                name: "Pacalat River".into(),
                description: "Cold spring water".into(),
                category: "Nature".into(),
                barangay: Some("Pacalat".into()),
                lat: 15.80,
                lng: 120.25,
                image: None,
                rating: Some(4.5),
                review_count: None,
            },
            Attraction {
                id: 2,
                name: "Old Church".into(),
                description: "Stone church".into(),
                category: "Religious".into(),
                barangay: None,
                lat: 15.78,
                lng: 120.29,
                image: None,
                rating: None,
                review_count: None,
            },
        ]));
        store
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let config = MapConfig::default();
        assert!(plan(&make_store(), 999, SelectOrigin::Card, &config).is_none());
        assert!(plan(&AttractionStore::new(), 1, SelectOrigin::Marker, &config).is_none());
    }

    #[test]
    fn test_card_selection_flies_then_shows_card() {
        let config = MapConfig::default();
        match plan(&make_store(), 1, SelectOrigin::Card, &config) {
            Some(SelectionPlan::Focus { camera, card, timing }) => {
                assert_eq!(camera, CameraMove { lat: 15.80, lng: 120.25, zoom: 16.0, duration_secs: 1.5 });
                assert_eq!(timing, CardTiming::AfterSettle);
                assert_eq!(card.name, "Pacalat River");
                assert_eq!(card.address, "Pacalat, Mangatarem");
                assert_eq!(card.rating, "4.5");
            }
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_marker_selection_shows_card_immediately() {
        let config = MapConfig::default();
        match plan(&make_store(), 2, SelectOrigin::Marker, &config) {
            Some(SelectionPlan::Focus { camera, card, timing }) => {
                assert_eq!(camera.duration_secs, 1.0);
                assert_eq!(timing, CardTiming::Immediately);
                assert_eq!(card.address, "Mangatarem, Pangasinan");
                assert_eq!(card.rating, "4.0");
            }
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_navigate_mode() {
        let config = MapConfig {
            selection_mode: SelectionMode::Navigate,
            ..MapConfig::default()
        };
        for origin in [SelectOrigin::Card, SelectOrigin::Marker] {
            assert_eq!(
                plan(&make_store(), 2, origin, &config),
                Some(SelectionPlan::Navigate("/attraction/2".into()))
            );
        }
        // Unknown ids stay a no-op in navigate mode too
        assert_eq!(plan(&make_store(), 999, SelectOrigin::Card, &config), None);
    }

    #[test]
    fn test_user_position_keeps_one() {
        let mut slot = UserPosition::new();
        assert_eq!(slot.place("first"), None);
        assert_eq!(slot.place("second"), Some("first"));
        assert!(slot.is_placed());
        assert_eq!(slot.take(), Some("second"));
        assert!(!slot.is_placed());
    }

    #[test]
    fn test_accuracy_radius() {
        assert_eq!(accuracy_radius(40.0), 20.0);
        assert_eq!(accuracy_radius(-3.0), 0.0);
    }
}
