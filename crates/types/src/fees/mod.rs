//! Protocol fee configuration
//!
//! Fees are looked up per provider and per wallet identifier. A missing entry
//! means no fee and no referrer.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::providers::ProviderName;

/// Fee charged on top of a swap and the address credited with it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeeConfig {
	/// Fee as a fraction of the swap (0.00875 = 0.875%)
	pub fee: f64,
	pub referrer: Address,
}

impl FeeConfig {
	pub fn new(fee: f64, referrer: Address) -> Self {
		Self { fee, referrer }
	}

	/// Fee as a percentage with three decimals, the form aggregators accept
	///
	/// Ties round away from zero (`0.003125` renders as `0.313`).
	pub fn percentage(&self) -> String {
		format!("{:.3}", (self.fee * 100_000.0).round() / 1000.0)
	}

	pub fn validate(&self) -> Result<(), String> {
		if !self.fee.is_finite() || !(0.0..=1.0).contains(&self.fee) {
			return Err(format!("fee must be a fraction between 0 and 1, got {}", self.fee));
		}
		Ok(())
	}
}

/// Query value for an optional fee: `"0"` when no fee applies
pub fn fee_percentage(config: Option<&FeeConfig>) -> String {
	config.map_or_else(|| "0".to_string(), FeeConfig::percentage)
}

/// Query value for an optional referrer: empty when no fee applies
pub fn referrer_address(config: Option<&FeeConfig>) -> String {
	config.map_or_else(String::new, |c| c.referrer.to_string())
}

/// Fee table keyed by provider, then wallet identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeeConfigs(HashMap<ProviderName, HashMap<String, FeeConfig>>);

impl FeeConfigs {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_fee(mut self, provider: ProviderName, wallet_identifier: &str, config: FeeConfig) -> Self {
		self.insert(provider, wallet_identifier, config);
		self
	}

	pub fn insert(&mut self, provider: ProviderName, wallet_identifier: &str, config: FeeConfig) {
		self.0
			.entry(provider)
			.or_default()
			.insert(wallet_identifier.to_string(), config);
	}

	pub fn get(&self, provider: ProviderName, wallet_identifier: &str) -> Option<&FeeConfig> {
		self.0.get(&provider)?.get(wallet_identifier)
	}

	/// Validate every entry, reporting the first offending one
	pub fn validate(&self) -> Result<(), String> {
		for (provider, tiers) in &self.0 {
			for (wallet, config) in tiers {
				config
					.validate()
					.map_err(|reason| format!("{}/{}: {}", provider, wallet, reason))?;
			}
		}
		Ok(())
	}

	pub fn is_empty(&self) -> bool {
		self.0.values().all(HashMap::is_empty)
	}
}

impl From<HashMap<ProviderName, HashMap<String, FeeConfig>>> for FeeConfigs {
	fn from(value: HashMap<ProviderName, HashMap<String, FeeConfig>>) -> Self {
		Self(value)
	}
}
