use clap::Subcommand;
use lifeboard_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "progress.window_length")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

/// Current value of a leaf key; sections and unknown keys are errors.
fn current_value(config: &Config, key: &str) -> Result<String, Box<dyn std::error::Error>> {
    match config.get(key) {
        Some(value) if !value.starts_with('{') => Ok(value),
        Some(_) => Err(format!("{key} is a section, not a value").into()),
        None => Err(format!("unknown key: {key}").into()),
    }
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", current_value(&config, &key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            let previous = current_value(&config, &key)?;
            config.set(&key, &value)?;
            let updated = current_value(&config, &key)?;
            if updated == previous {
                tracing::debug!("{} already {}, not saving", key, updated);
            } else {
                config.save()?;
            }
            println!("{key}: {previous} -> {updated}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
