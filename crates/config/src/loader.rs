//! Configuration loading utilities

use crate::{ConfigValidationError, Settings};
use config::{Config, Environment, File};
use tracing::debug;

/// Default settings file, resolved relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Errors raised while building [`Settings`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] config::ConfigError),
	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from `CONFIG_PATH`, falling back to `config/config`
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load configuration from a specific file
///
/// A missing file yields the defaults. Values may be overridden with
/// `SWAP_QUOTE__SECTION__KEY` environment variables.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	debug!("Loading configuration from {}", path);

	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix("SWAP_QUOTE")
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
