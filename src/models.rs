//! Frontend Models
//!
//! Data structures matching the `/api/attractions` payload, plus the
//! user-controlled filter state.

use serde::Deserialize;

/// Attraction record (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attraction {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub barangay: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
}

/// Value of a category or barangay selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Selector value meaning "no restriction"
    pub const ALL: &'static str = "all";

    /// Parse a `<select>` / button value
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Facet::All => Self::ALL,
            Facet::Only(v) => v,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

/// Current search text, category and barangay selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: Facet,
    pub barangay: Facet,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, category: Facet, barangay: Facet) -> Self {
        Self {
            search_term: search_term.into(),
            category,
            barangay,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category.is_all() && self.barangay.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"[
            {"id": 1, "name": "Pacalat River", "category": "Nature", "barangay": "Pacalat",
             "description": "Clear river", "lat": 15.79, "lng": 120.29,
             "image": "/static/img/river.jpg", "rating": 4.5},
            {"id": 2, "name": "Old Church", "category": "Religious", "barangay": null,
             "description": "Stone church", "lat": 15.78, "lng": 120.30, "image": null}
        ]"#;
        let parsed: Vec<Attraction> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].barangay.as_deref(), Some("Pacalat"));
        assert_eq!(parsed[0].rating, Some(4.5));
        assert_eq!(parsed[0].review_count, None);
        assert_eq!(parsed[1].barangay, None);
        assert_eq!(parsed[1].image, None);
        assert_eq!(parsed[1].rating, None);
    }

    #[test]
    fn test_facet_from_value() {
        assert_eq!(Facet::from_value("all"), Facet::All);
        assert_eq!(Facet::from_value("Nature"), Facet::Only("Nature".to_string()));
        // Only the exact sentinel means "all"
        assert_eq!(Facet::from_value("All"), Facet::Only("All".to_string()));
        assert_eq!(Facet::Only("Food".into()).as_value(), "Food");
    }

    #[test]
    fn test_default_filter_is_unfiltered() {
        let state = FilterState::default();
        assert!(state.is_unfiltered());
        assert!(!FilterState::new("x", Facet::All, Facet::All).is_unfiltered());
    }
}
