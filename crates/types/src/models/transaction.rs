//! EVM transaction plan entries

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Unsigned EVM transaction produced by a provider
///
/// `value` and `gas_limit` serialize as `0x`-prefixed hex, the form wallets
/// expect when filling a transaction request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransaction {
	/// Destination contract
	pub to: Address,
	/// Native amount sent along with the call
	pub value: U256,
	/// ABI-encoded call data
	pub data: Bytes,
	pub gas_limit: U256,
}

impl EvmTransaction {
	pub fn new(to: Address, value: U256, data: Bytes, gas_limit: U256) -> Self {
		Self {
			to,
			value,
			data,
			gas_limit,
		}
	}

	/// `value` as a `0x`-prefixed hex string
	pub fn value_hex(&self) -> String {
		format!("{:#x}", self.value)
	}
}
