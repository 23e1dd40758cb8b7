//! Configuration settings structures

use crate::{configurable_value::ConfigurableValue, ConfigurableValueError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swap_types::constants::{DEFAULT_APPROVAL_GAS_LIMIT, DEFAULT_SWAP_GAS_LIMIT, ONE_INCH_BASE_URL};
use swap_types::{FeeConfigs, NetworkName};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub aggregator: AggregatorSettings,
	pub gas_limits: GasLimitSettings,
	pub fees: FeeConfigs,
	pub logging: LoggingSettings,
	pub rpc: RpcSettings,
}

/// 1inch aggregator endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AggregatorSettings {
	pub base_url: String,
	/// Optional bearer token sent with every aggregator request
	///
	/// - Environment variable: `{"type": "env", "value": "ONE_INCH_API_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "..."}`
	pub api_key: Option<ConfigurableValue>,
	pub timeout_ms: Option<u64>,
}

impl Default for AggregatorSettings {
	fn default() -> Self {
		Self {
			base_url: ONE_INCH_BASE_URL.to_string(),
			api_key: None,
			timeout_ms: None,
		}
	}
}

/// Gas limits attached to built transactions
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GasLimitSettings {
	pub approval: u64,
	pub swap: u64,
}

impl Default for GasLimitSettings {
	fn default() -> Self {
		Self {
			approval: DEFAULT_APPROVAL_GAS_LIMIT,
			swap: DEFAULT_SWAP_GAS_LIMIT,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// JSON-RPC endpoints used to read on-chain allowances
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RpcSettings {
	/// Keyed by network tag (`"ETH"`, `"MATIC"`, ...), compared case-insensitively
	pub endpoints: HashMap<String, String>,
}

impl RpcSettings {
	pub fn endpoint(&self, network: NetworkName) -> Option<&str> {
		self.endpoints
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(network.as_str()))
			.map(|(_, url)| url.as_str())
	}
}

/// Validation failures for loaded settings
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
	#[error("Aggregator base URL must not be empty")]
	EmptyBaseUrl,
	#[error("Swap gas limit must be greater than zero")]
	ZeroSwapGasLimit,
	#[error("Invalid fee configuration: {0}")]
	InvalidFee(String),
}

impl Settings {
	/// Check values that deserialization alone cannot reject
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.aggregator.base_url.trim().is_empty() {
			return Err(ConfigValidationError::EmptyBaseUrl);
		}
		if self.gas_limits.swap == 0 {
			return Err(ConfigValidationError::ZeroSwapGasLimit);
		}
		self.fees.validate().map_err(ConfigValidationError::InvalidFee)
	}

	/// Resolve the aggregator API key, if one is configured
	pub fn api_key(&self) -> Result<Option<String>, ConfigurableValueError> {
		self.aggregator
			.api_key
			.as_ref()
			.map(ConfigurableValue::resolve)
			.transpose()
	}

	pub fn rpc_endpoint(&self, network: NetworkName) -> Option<&str> {
		self.rpc.endpoint(network)
	}
}
