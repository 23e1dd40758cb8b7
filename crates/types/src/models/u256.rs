//! Helpers for moving `U256` amounts through decimal strings
//!
//! Aggregator APIs exchange amounts as base-10 strings of minor units. `U256`
//! serializes as `0x` hex by default, so fields holding API amounts opt into
//! [`decimal`] with `#[serde(with = "...")]`.

use alloy_primitives::U256;

/// Parse a base-10 string of minor units
pub fn parse_decimal_u256(value: &str) -> Result<U256, String> {
	if value.is_empty() {
		return Err("U256 value cannot be empty".to_string());
	}
	if !value.chars().all(|c| c.is_ascii_digit()) {
		return Err(format!("U256 value must contain only digits: {}", value));
	}
	U256::from_str_radix(value, 10).map_err(|e| format!("Invalid U256 value {}: {}", value, e))
}

/// Serde adapter: `U256` as a decimal string
pub mod decimal {
	use super::parse_decimal_u256;
	use alloy_primitives::U256;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&value.to_string())
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		parse_decimal_u256(&value).map_err(serde::de::Error::custom)
	}
}
