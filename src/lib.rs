pub mod cli;
pub mod core;

use crate::core::metals::StaticQuoteProvider;
use anyhow::Result;
use tracing::{debug, info};

pub use crate::core::config::AppConfig;

/// The views the application can render. Dispatch is a plain tagged union;
/// there is no polymorphism behind it.
pub enum AppCommand {
    Dashboard,
    Profile,
    Metals { weight: f64, unit: String },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Kasse starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let session = config.build_session()?;

    match command {
        AppCommand::Dashboard => cli::dashboard::run(&session),
        AppCommand::Profile => cli::profile::run(&session),
        AppCommand::Metals { weight, unit } => {
            // Spot prices are simulated; a live feed would slot in behind the
            // same provider trait.
            cli::metals::run(&StaticQuoteProvider, weight, &unit)
        }
    }
}
