//! List Projection
//!
//! Turns the load state and the filtered subset into what the sidebar list
//! shows. A failed load and a filter with zero matches are different views.

use crate::category;
use crate::config::MapConfig;
use crate::models::Attraction;
use crate::store::LoadState;

pub const NO_RESULTS_TEXT: &str = "No attractions found.";
pub const LOADING_TEXT: &str = "Loading attractions...";

/// One card in the sidebar list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub category_label: String,
    pub category_color: &'static str,
    pub stars: String,
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Unavailable(String),
    Empty,
    Cards(Vec<CardModel>),
}

impl ListView {
    /// Attraction ids rendered as cards, in order
    pub fn ids(&self) -> Vec<u32> {
        match self {
            ListView::Cards(cards) => cards.iter().map(|c| c.id).collect(),
            _ => Vec::new(),
        }
    }
}

/// Five-slot star string; only whole stars are filled
pub fn stars(rating: f64) -> String {
    let filled = rating.floor().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn card_for(attraction: &Attraction, config: &MapConfig) -> CardModel {
    let style = category::style_for(&attraction.category);
    CardModel {
        id: attraction.id,
        name: attraction.name.clone(),
        description: attraction.description.clone(),
        image: attraction.image.clone(),
        category_label: attraction.category.to_uppercase(),
        category_color: style.color,
        stars: stars(attraction.rating.unwrap_or(config.default_rating)),
        review_count: attraction.review_count.unwrap_or(config.default_review_count),
    }
}

pub fn project(load: &LoadState, filtered: &[Attraction], config: &MapConfig) -> ListView {
    match load {
        LoadState::Pending => ListView::Loading,
        LoadState::Failed(msg) => ListView::Unavailable(msg.clone()),
        LoadState::Ready(_) if filtered.is_empty() => ListView::Empty,
        LoadState::Ready(_) => ListView::Cards(filtered.iter().map(|a| card_for(a, config)).collect()),
    }
}
