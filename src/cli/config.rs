//! Config command implementation

use anyhow::{bail, Result};

use questline::config::Config;
use questline::domain::Category;

/// Show or update persistent settings
pub fn config_command(
    daily_bonus: Option<bool>,
    encouragement: Option<bool>,
    default_category: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(value) = daily_bonus {
        config.settings.daily_bonus = value;
        changed = true;
    }
    if let Some(value) = encouragement {
        config.settings.encouragement = value;
        changed = true;
    }
    if let Some(value) = default_category {
        match Category::from_str(&value) {
            Some(Category::Bonus) => bail!("bonus cannot be a default category"),
            Some(_) => {
                config.settings.default_category = value;
                changed = true;
            }
            None => bail!("unknown category: {value}"),
        }
    }

    if changed {
        let path = Config::global_config_path();
        config.save_to_file(&path)?;
        println!("Saved {}\n", path.display());
    }

    println!("daily_bonus = {}", config.settings.daily_bonus);
    println!("encouragement = {}", config.settings.encouragement);
    println!("default_category = {}", config.settings.default_category);

    Ok(())
}
