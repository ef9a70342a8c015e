//! Configuration loading: TOML file, `API_ORIGIN` env override, validation.

mod loader;
mod types;

pub use loader::{ConfigError, API_ORIGIN_ENV};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
