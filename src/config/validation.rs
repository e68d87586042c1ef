//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use std::collections::HashSet;

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("at least one [[request]] is required")]
    NoRequests,
    #[error("request #{0} has an empty name")]
    EmptyRequestName(usize),
    #[error("duplicate request name '{0}'")]
    DuplicateRequestName(String),
    #[error("replay.name is required")]
    MissingReplayName,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.replay.name.trim().is_empty() {
        errors.push(ValidationError::MissingReplayName);
    }

    if config.requests.is_empty() {
        errors.push(ValidationError::NoRequests);
    }

    let mut seen = HashSet::new();
    for (index, request) in config.requests.iter().enumerate() {
        if request.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRequestName(index + 1));
        } else if !seen.insert(request.name.as_str()) {
            errors.push(ValidationError::DuplicateRequestName(request.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        let toml = r#"
[[request]]
name = "profile"
steps = ["start", "ok:alice"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_no_requests_fails() {
        let config: Config = toml::from_str("").unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::NoRequests)));
    }

    #[test]
    fn test_collects_all_errors() {
        let toml = r#"
[replay]
name = " "

[[request]]
name = "feed"

[[request]]
name = ""

[[request]]
name = "feed"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::MissingReplayName));
        assert!(matches!(errors[1], ValidationError::EmptyRequestName(2)));
        assert!(
            matches!(&errors[2], ValidationError::DuplicateRequestName(name) if name == "feed")
        );
    }
}
