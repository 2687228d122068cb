//! UI Components
//!
//! Leptos components for the map page.

mod attraction_list;
mod bottom_sheet;
mod filter_bar;
mod locate_button;
mod map_view;
mod notice;
mod place_card;
mod sidebar_tabs;

pub use attraction_list::AttractionList;
pub use bottom_sheet::BottomSheet;
pub use filter_bar::FilterBar;
pub use locate_button::LocateButton;
pub use map_view::MapView;
pub use notice::NoticeBanner;
pub use place_card::PlaceCard;
pub use sidebar_tabs::{RoutesPanel, RoutesToggle, SidebarTabs};
