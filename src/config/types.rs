//! Core configuration types.

use std::path::Path;

use remote_data::TrackerConfig;
use serde::Deserialize;
use thiserror::Error;

use super::Step;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Replay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Replay settings.
    #[serde(default)]
    pub replay: ReplayConfig,
    /// Lifecycle rules shared by every request.
    #[serde(default)]
    pub tracker: TrackerConfig,
    /// Scripted requests, in display order.
    #[serde(default, rename = "request")]
    pub requests: Vec<RequestScript>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Replay settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayConfig {
    /// Name shown in logs (default: "replay").
    #[serde(default = "default_name")]
    pub name: String,
    /// Abort on the first rejected transition instead of warning.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            strict: false,
        }
    }
}

fn default_name() -> String {
    "replay".to_string()
}

/// One scripted request.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestScript {
    /// Request name (e.g., "profile").
    pub name: String,
    /// Steps applied one per round.
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXAMPLE: &str = r#"
[replay]
name = "dashboard"
strict = true

[tracker]
keep_stale_data = false

[[request]]
name = "profile"
steps = ["start", "ok:alice"]

[[request]]
name = "feed"
steps = ["wait", "start", "fail:timeout"]
"#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        assert_eq!(config.replay.name, "dashboard");
        assert!(config.replay.strict);
        assert!(!config.tracker.keep_stale_data);
        assert!(config.tracker.restart_while_loading);
        assert_eq!(config.requests.len(), 2);
        assert_eq!(
            config.requests[1].steps,
            vec![Step::Wait, Step::Start, Step::Fail("timeout".to_string())]
        );
    }

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.replay.name, "replay");
        assert!(!config.replay.strict);
        assert_eq!(config.tracker, TrackerConfig::default());
        assert!(config.requests.is_empty());
    }

    #[test]
    fn test_unknown_step_is_parse_error() {
        let toml = r#"
[[request]]
name = "profile"
steps = ["launch"]
"#;
        let err = toml::from_str::<Config>(toml).unwrap_err();
        assert!(err.to_string().contains("unknown step"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.requests[0].name, "profile");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/replay.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
