//! Startup logging for the swap-quote tool

use crate::Settings;
use std::env;
use tracing::{info, warn};

/// Logs build and environment details once tracing is initialized
pub fn log_service_info() {
	info!("=== swap-quote v{} ===", env!("CARGO_PKG_VERSION"));
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}
	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the effective settings, never printing secret values
pub fn log_settings_summary(settings: &Settings) {
	info!("🌐 Aggregator: {}", settings.aggregator.base_url);
	match &settings.aggregator.api_key {
		Some(key) => info!("🔑 API key: {}", key.description()),
		None => info!("🔑 API key: none"),
	}
	if let Some(key) = &settings.aggregator.api_key {
		if key.is_inline() {
			warn!("API key is stored inline in the settings file");
		}
	}
	info!(
		"⛽ Gas limits: approval={} swap={}",
		settings.gas_limits.approval, settings.gas_limits.swap
	);
	info!(
		"📡 RPC endpoints configured: {}",
		settings.rpc.endpoints.len()
	);
}
