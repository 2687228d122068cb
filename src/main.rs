#![allow(warnings)]
//! Attraction Map Frontend Entry Point

mod api;
mod app;
mod cards;
mod category;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod leaflet_map;
mod logging;
mod markers;
mod models;
mod selection;
mod store;
mod task;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = config::load_from_page();
    log::set_max_level(config.log_level());
    log::info!(target: "app", "starting, selection mode {:?}", config.selection_mode);
    mount_to_body(move || view! { <App config=config /> });
}
