//! Form defaults and display settings stored in `config.toml`.

use clap::Subcommand;
use betterrest_core::storage::data_dir;
use betterrest_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. `defaults.wake_time` or `display.clock`
    Get {
        /// Dot-separated setting name
        key: String,
    },
    /// Change one setting; the value is validated like the calculate flags
    Set {
        /// Dot-separated setting name
        key: String,
        /// New value; pass "" to unset `model.path`
        value: String,
    },
    /// Dump every setting as JSON
    List,
    /// Restore the 07:00 / 8 hours / 2 cups defaults and the bundled model
    Reset,
    /// Show where config.toml lives
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::info!(key = %key, value = %value, "config updated");
            println!("{key} = {}", config.get(&key).unwrap_or_default());
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&Config::load()?)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", data_dir()?.join("config.toml").display());
        }
    }
    Ok(())
}
