//! Quote request models

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SLIPPAGE;
use crate::models::{NetworkName, Token};

/// A desired swap, built per call and never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub from_token: Token,
	pub to_token: Token,
	pub from_network: NetworkName,
	pub to_network: NetworkName,
	/// Amount of `from_token` in minor units
	#[serde(with = "crate::models::u256::decimal")]
	pub amount: U256,
	/// Account that sends the swap (and owns the allowance)
	pub from_address: Address,
}

impl QuoteRequest {
	/// Same-network swap of `amount` minor units
	pub fn same_network(from_token: Token, to_token: Token, amount: U256, from_address: Address) -> Self {
		let network = from_token.network;
		Self {
			from_token,
			to_token,
			from_network: network,
			to_network: network,
			amount,
			from_address,
		}
	}

	pub fn is_cross_chain(&self) -> bool {
		self.from_network != self.to_network
	}
}

/// Caller-supplied options that shape a quote without changing the swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteMetaOptions {
	/// Selects the fee tier and referrer (e.g. the integrating wallet)
	pub wallet_identifier: String,
	/// Slippage tolerance in percent, passed through verbatim
	#[serde(default)]
	pub slippage: Option<String>,
	/// Approve `U256::MAX` instead of the exact amount
	#[serde(default)]
	pub infinite_approval: bool,
}

impl QuoteMetaOptions {
	pub fn new(wallet_identifier: impl Into<String>) -> Self {
		Self {
			wallet_identifier: wallet_identifier.into(),
			..Default::default()
		}
	}

	pub fn with_slippage(mut self, slippage: impl Into<String>) -> Self {
		self.slippage = Some(slippage.into());
		self
	}

	pub fn with_infinite_approval(mut self, infinite_approval: bool) -> Self {
		self.infinite_approval = infinite_approval;
		self
	}

	/// Slippage to send upstream; unset or empty falls back to 0.5%
	pub fn slippage_or_default(&self) -> &str {
		match self.slippage.as_deref() {
			Some(slippage) if !slippage.is_empty() => slippage,
			_ => DEFAULT_SLIPPAGE,
		}
	}
}
