//! Page Configuration
//!
//! Read once from an optional `<script type="application/json" id="map-config">`
//! element in the host page. Every field has a default so the page works
//! without one.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

use crate::error::{MapError, Result};

/// Element id of the embedded JSON config
pub const CONFIG_ELEMENT_ID: &str = "map-config";

/// What happens after the camera reaches a selected attraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    #[default]
    InPageCard,
    Navigate,
}

/// How the marker layer follows a new filtered subset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerStrategy {
    #[default]
    Reconcile,
    Rebuild,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub api_url: String,
    pub attraction_url_prefix: String,
    pub selection_mode: SelectionMode,
    pub marker_strategy: MarkerStrategy,
    /// Initial map center (lat, lng)
    pub center: (f64, f64),
    pub initial_zoom: f64,
    pub focus_zoom: f64,
    pub fly_duration_secs: f64,
    pub marker_fly_duration_secs: f64,
    pub settle_delay_ms: u32,
    pub search_debounce_ms: u32,
    pub locate_max_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub tile_subdomains: String,
    pub max_zoom: f64,
    pub cluster_markers: bool,
    pub locality: String,
    pub default_address: String,
    pub default_rating: f64,
    pub default_review_count: u32,
    pub sheet_header_px: f64,
    pub log_level: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_url: "/api/attractions".to_string(),
            attraction_url_prefix: "/attraction/".to_string(),
            selection_mode: SelectionMode::InPageCard,
            marker_strategy: MarkerStrategy::Reconcile,
            center: (15.7889, 120.2986),
            initial_zoom: 13.0,
            focus_zoom: 16.0,
            fly_duration_secs: 1.5,
            marker_fly_duration_secs: 1.0,
            settle_delay_ms: 1600,
            search_debounce_ms: 150,
            locate_max_zoom: 15.0,
            tile_url: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png".to_string(),
            tile_attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>".to_string(),
            tile_subdomains: "abcd".to_string(),
            max_zoom: 20.0,
            cluster_markers: true,
            locality: "Mangatarem".to_string(),
            default_address: "Mangatarem, Pangasinan".to_string(),
            default_rating: 4.0,
            default_review_count: 0,
            sheet_header_px: 140.0,
            log_level: "info".to_string(),
        }
    }
}

impl MapConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, zoom) in [
            ("initial_zoom", self.initial_zoom),
            ("focus_zoom", self.focus_zoom),
            ("locate_max_zoom", self.locate_max_zoom),
            ("max_zoom", self.max_zoom),
        ] {
            if !(0.0..=22.0).contains(&zoom) {
                return Err(MapError::Config(format!("{} out of range: {}", name, zoom)));
            }
        }
        if self.fly_duration_secs < 0.0 || self.marker_fly_duration_secs < 0.0 {
            return Err(MapError::Config("fly durations must be non-negative".to_string()));
        }
        if !(0.0..=5.0).contains(&self.default_rating) {
            return Err(MapError::Config(format!("default_rating out of range: {}", self.default_rating)));
        }
        let (lat, lng) = self.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(MapError::Config(format!("center out of range: ({}, {})", lat, lng)));
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// URL of the detail page for `navigate` selection mode
    pub fn attraction_url(&self, id: u32) -> String {
        format!("{}{}", self.attraction_url_prefix, id)
    }
}

/// Read config from the host page, falling back to defaults
pub fn load_from_page() -> MapConfig {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
        .and_then(|script| script.text().ok())
    else {
        return MapConfig::default();
    };

    match MapConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!(target: "config", "ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            MapConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = MapConfig::from_json("{}").unwrap();
        assert_eq!(config, MapConfig::default());
        assert_eq!(config.api_url, "/api/attractions");
        assert_eq!(config.selection_mode, SelectionMode::InPageCard);
    }

    #[test]
    fn test_partial_override() {
        let config = MapConfig::from_json(
            r#"{"selection_mode": "navigate", "marker_strategy": "rebuild", "focus_zoom": 17}"#,
        )
        .unwrap();
        assert_eq!(config.selection_mode, SelectionMode::Navigate);
        assert_eq!(config.marker_strategy, MarkerStrategy::Rebuild);
        assert_eq!(config.focus_zoom, 17.0);
        assert_eq!(config.settle_delay_ms, 1600);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MapConfig::from_json(r#"{"focus_zoom": 40}"#).is_err());
        assert!(MapConfig::from_json(r#"{"default_rating": 7.5}"#).is_err());
        assert!(MapConfig::from_json(r#"{"center": [120.0, 15.0]}"#).is_err());
        assert!(MapConfig::from_json(r#"{"selection_mode": "popup"}"#).is_err());
    }

    #[test]
    fn test_attraction_url() {
        let config = MapConfig::default();
        assert_eq!(config.attraction_url(42), "/attraction/42");
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = MapConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
