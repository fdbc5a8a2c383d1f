use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Number of card columns on the list screen (default: 2).
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

/// Catalog presentation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Fixed shuffle seed. When unset every list screen gets a fresh order.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_grid_columns() -> usize {
    2
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            grid_columns: default_grid_columns(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
