//! rdreplay - replays scripted request timelines through remote-data trackers.
//!
//! Each `[[request]]` in the config is driven by its own tracker. Rounds
//! advance all requests in lockstep and print the combined status.

mod config;
mod replay;

use crate::config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "replay.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(path = %config_path, "Config validation: {e}");
        }
        return Err(anyhow::anyhow!(
            "{} config validation error(s) in {config_path}",
            errors.len()
        ));
    }

    info!(
        replay = %config.replay.name,
        requests = config.requests.len(),
        strict = config.replay.strict,
        "Loaded config"
    );

    let reports = replay::run(&config)?;
    for report in &reports {
        println!("{report}");
    }

    Ok(())
}
