//! Blockchain network models

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated chain names understood by swap providers
///
/// Serialized with the short tags used by wallets and token lists
/// (e.g. `"ETH"`, `"MATIC"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkName {
	#[serde(rename = "ETH")]
	Ethereum,
	#[serde(rename = "BSC")]
	Binance,
	#[serde(rename = "MATIC")]
	Matic,
	#[serde(rename = "OP")]
	Optimism,
	#[serde(rename = "ARB")]
	Arbitrum,
	#[serde(rename = "AVAX")]
	Avalanche,
	#[serde(rename = "GNO")]
	Gnosis,
	#[serde(rename = "FTM")]
	Fantom,
	#[serde(rename = "KLAY")]
	Klaytn,
	#[serde(rename = "DOT")]
	Polkadot,
}

impl NetworkName {
	pub const ALL: [NetworkName; 10] = [
		NetworkName::Ethereum,
		NetworkName::Binance,
		NetworkName::Matic,
		NetworkName::Optimism,
		NetworkName::Arbitrum,
		NetworkName::Avalanche,
		NetworkName::Gnosis,
		NetworkName::Fantom,
		NetworkName::Klaytn,
		NetworkName::Polkadot,
	];

	/// Short tag of the network (same as its serialized form)
	pub fn as_str(&self) -> &'static str {
		match self {
			NetworkName::Ethereum => "ETH",
			NetworkName::Binance => "BSC",
			NetworkName::Matic => "MATIC",
			NetworkName::Optimism => "OP",
			NetworkName::Arbitrum => "ARB",
			NetworkName::Avalanche => "AVAX",
			NetworkName::Gnosis => "GNO",
			NetworkName::Fantom => "FTM",
			NetworkName::Klaytn => "KLAY",
			NetworkName::Polkadot => "DOT",
		}
	}
}

impl fmt::Display for NetworkName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NetworkName {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let upper = s.to_ascii_uppercase();
		NetworkName::ALL
			.into_iter()
			.find(|network| network.as_str() == upper)
			.ok_or_else(|| format!("Unknown network name: {}", s))
	}
}

/// Per-network data a provider needs to build transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDescriptor {
	/// Contract that must be approved to spend the source token
	pub approval_address: Address,
	/// EVM chain id used in aggregator endpoints
	pub chain_id: u64,
}

impl NetworkDescriptor {
	pub const fn new(approval_address: Address, chain_id: u64) -> Self {
		Self {
			approval_address,
			chain_id,
		}
	}
}
