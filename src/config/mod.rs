//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.settings.daily_bonus);
        assert!(config.settings.encouragement);
        assert_eq!(config.settings.default_category, "personal");
    }

    #[test]
    fn test_partial_settings_toml() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            daily_bonus = false
            "#,
        )
        .unwrap();
        assert!(!config.settings.daily_bonus);
        assert!(config.settings.encouragement);
    }
}
