//! User-adjustable settings

use serde::{Deserialize, Serialize};

/// General settings stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generate a daily bonus task
    pub daily_bonus: bool,

    /// Show an encouragement message after each completion
    pub encouragement: bool,

    /// Category used when `add` is called without one
    pub default_category: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_bonus: true,
            encouragement: true,
            default_category: "personal".to_string(),
        }
    }
}
