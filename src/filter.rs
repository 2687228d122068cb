//! Attraction Filtering
//!
//! Combines the search text, category and barangay selection into the
//! subset shown by both the list and the map.

use crate::models::{Attraction, Facet, FilterState};

/// Case-insensitive substring match on name or description.
/// An empty term matches everything; the term is not trimmed.
fn matches_text(attraction: &Attraction, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    attraction.name.to_lowercase().contains(&term)
        || attraction.description.to_lowercase().contains(&term)
}

fn matches_category(attraction: &Attraction, category: &Facet) -> bool {
    match category {
        Facet::All => true,
        Facet::Only(c) => *c == attraction.category,
    }
}

/// An attraction without a barangay is unassigned and only shows under `All`
fn matches_barangay(attraction: &Attraction, barangay: &Facet) -> bool {
    match barangay {
        Facet::All => true,
        Facet::Only(b) => attraction.barangay.as_deref() == Some(b.as_str()),
    }
}

pub fn matches(attraction: &Attraction, state: &FilterState) -> bool {
    matches_text(attraction, &state.search_term)
        && matches_category(attraction, &state.category)
        && matches_barangay(attraction, &state.barangay)
}

/// Filter keeping input order
pub fn apply(attractions: &[Attraction], state: &FilterState) -> Vec<Attraction> {
    if state.is_unfiltered() {
        return attractions.to_vec();
    }
    attractions
        .iter()
        .filter(|a| matches(a, state))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_attraction(id: u32, name: &str, description: &str, category: &str, barangay: Option<&str>) -> Attraction {
        Attraction {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            barangay: barangay.map(str::to_string),
            lat: 15.78,
            lng: 120.29,
            image: None,
            rating: None,
            review_count: None,
        }
    }

    fn sample() -> Vec<Attraction> {
        vec![
            make_attraction(1, "Pacalat River", "Cold spring water", "Nature", Some("A")),
            make_attraction(2, "Old Church", "Spanish-era stone church", "Religious", Some("B")),
            make_attraction(3, "Minien Falls", "A short hike to the river falls", "Nature", None),
            make_attraction(4, "Town Plaza Eatery", "Local kakanin", "Food", Some("B")),
        ]
    }

    fn ids(list: &[Attraction]) -> Vec<u32> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_default_state_returns_everything_in_order() {
        let all = sample();
        let result = apply(&all, &FilterState::default());
        assert_eq!(result, all);
    }

    #[test]
    fn test_empty_input() {
        let state = FilterState::new("river", Facet::All, Facet::All);
        assert!(apply(&[], &state).is_empty());
        assert!(apply(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_search_scenario() {
        let all = sample()[..2].to_vec();
        let state = FilterState::new("river", Facet::All, Facet::All);
        assert_eq!(ids(&apply(&all, &state)), vec![1]);
    }

    #[test]
    fn test_category_scenario() {
        let all = sample()[..2].to_vec();
        let state = FilterState::new("", Facet::from_value("Religious"), Facet::All);
        assert_eq!(ids(&apply(&all, &state)), vec![2]);
    }

    #[test]
    fn test_unknown_barangay_matches_nothing() {
        let state = FilterState::new("", Facet::All, Facet::from_value("C"));
        assert!(apply(&sample(), &state).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        let state = FilterState::new("RIVER", Facet::All, Facet::All);
        let result = apply(&sample(), &state);
        // Matches "Pacalat River" by name and "Minien Falls" by description
        assert_eq!(ids(&result), vec![1, 3]);
        for a in &sample() {
            let hit = a.name.to_lowercase().contains("river") || a.description.to_lowercase().contains("river");
            assert_eq!(result.iter().any(|r| r.id == a.id), hit);
        }
    }

    #[test]
    fn test_search_term_not_trimmed() {
        let state = FilterState::new(" river", Facet::All, Facet::All);
        // "Pacalat River" contains " river"; "the river falls" also does
        assert_eq!(ids(&apply(&sample(), &state)), vec![1, 3]);
        let state = FilterState::new("river ", Facet::All, Facet::All);
        assert_eq!(ids(&apply(&sample(), &state)), vec![3]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let state = FilterState::new("", Facet::from_value("nature"), Facet::All);
        assert!(apply(&sample(), &state).is_empty());
    }

    #[test]
    fn test_unassigned_barangay_only_under_all() {
        let state = FilterState::new("falls", Facet::All, Facet::All);
        assert_eq!(ids(&apply(&sample(), &state)), vec![3]);
        let state = FilterState::new("falls", Facet::All, Facet::from_value(""));
        assert!(apply(&sample(), &state).is_empty());
    }

    #[test]
    fn test_all_three_must_match() {
        let state = FilterState::new("o", Facet::from_value("Food"), Facet::from_value("B"));
        assert_eq!(ids(&apply(&sample(), &state)), vec![4]);
        let state = FilterState::new("o", Facet::from_value("Food"), Facet::from_value("A"));
        assert!(apply(&sample(), &state).is_empty());
    }

    #[test]
    fn test_reapplying_is_idempotent() {
        let states = [
            FilterState::new("r", Facet::All, Facet::All),
            FilterState::new("", Facet::from_value("Nature"), Facet::All),
            FilterState::new("church", Facet::All, Facet::from_value("B")),
        ];
        for state in &states {
            let once = apply(&sample(), state);
            assert_eq!(apply(&once, state), once);
        }
    }
}
