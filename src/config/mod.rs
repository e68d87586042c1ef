//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and TOML loading
//! - [`step`]: The step language of request scripts
//! - [`validation`]: Cross-field checks run after loading

mod step;
mod types;
mod validation;

pub use step::Step;
pub use types::Config;
pub use validation::validate;
