//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;
use leptos_sheet_drag::SheetSignals;

use crate::config::MapConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page configuration, read once at start-up
    config: StoredValue<MapConfig>,
    /// Mobile bottom sheet state
    pub sheet: SheetSignals,
}

impl AppContext {
    pub fn new(config: MapConfig, sheet: SheetSignals) -> Self {
        Self {
            config: StoredValue::new(config),
            sheet,
        }
    }

    pub fn config(&self) -> MapConfig {
        self.config.get_value()
    }

    /// Read one value out of the config without cloning the rest
    pub fn with_config<T>(&self, f: impl FnOnce(&MapConfig) -> T) -> T {
        self.config.with_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
