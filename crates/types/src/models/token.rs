//! Token models

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::NetworkName;
use crate::constants::NATIVE_TOKEN_ADDRESS;

/// Descriptive token data, carried along but never used for quoting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
	/// Token symbol (e.g., "ETH", "USDC")
	pub symbol: String,
	/// Human-readable name (e.g., "USD Coin")
	pub name: String,
	/// Number of decimal places
	pub decimals: u8,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
}

/// A token on a specific network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Contract address, or [`NATIVE_TOKEN_ADDRESS`] for the native currency
	pub address: Address,
	pub network: NetworkName,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<TokenMetadata>,
}

impl Token {
	pub fn new(address: Address, network: NetworkName) -> Self {
		Self {
			address,
			network,
			metadata: None,
		}
	}

	/// Native currency of `network`
	pub fn native(network: NetworkName) -> Self {
		Self::new(NATIVE_TOKEN_ADDRESS, network)
	}

	pub fn with_metadata(mut self, symbol: &str, name: &str, decimals: u8) -> Self {
		self.metadata = Some(TokenMetadata {
			symbol: symbol.to_string(),
			name: name.to_string(),
			decimals,
			logo_uri: None,
		});
		self
	}

	/// Whether this token is the network's native currency rather than a contract
	pub fn is_native(&self) -> bool {
		self.address == NATIVE_TOKEN_ADDRESS
	}

	pub fn symbol(&self) -> Option<&str> {
		self.metadata.as_ref().map(|m| m.symbol.as_str())
	}
}
