//! Sleep model inspection.

use clap::Subcommand;
use std::path::PathBuf;

use betterrest_core::estimator::BUNDLED_MODEL;
use betterrest_core::{Config, LinearSleepModel};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the coefficients of the model that `calculate` would use
    Show {
        /// Model artifact to inspect instead of the configured one
        #[arg(long)]
        model: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the bundled model artifact (TOML)
    Export,
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Show { model, json } => {
            let (source, loaded) = match &model {
                Some(path) => (path.display().to_string(), LinearSleepModel::load(path)),
                None => {
                    let config = Config::load()?;
                    let source = config
                        .model
                        .path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "bundled".to_string());
                    (source, config.model.load_model())
                }
            };
            let loaded = loaded
                .inspect_err(|e| tracing::warn!(reason = e.reason(), "sleep model unavailable"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&loaded)?);
            } else {
                println!("Model: {} ({})", loaded.name, source);
                println!("  intercept:                   {}", loaded.intercept);
                println!("  wake_coefficient:            {}", loaded.wake_coefficient);
                println!(
                    "  estimated_sleep_coefficient: {}",
                    loaded.estimated_sleep_coefficient
                );
                println!("  coffee_coefficient:          {}", loaded.coffee_coefficient);
            }
        }
        ModelAction::Export => {
            print!("{BUNDLED_MODEL}");
        }
    }
    Ok(())
}
