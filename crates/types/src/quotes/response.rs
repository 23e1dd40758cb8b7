//! Provider quote result

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::models::EvmTransaction;

/// Executable plan returned by a provider
///
/// Transactions must be sent in order: approvals (if any) precede the swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderQuote {
	pub transactions: Vec<EvmTransaction>,
	/// Expected amount of the destination token, in minor units
	#[serde(with = "crate::models::u256::decimal")]
	pub to_token_amount: U256,
	/// Amount of the source token the swap consumes, in minor units
	#[serde(with = "crate::models::u256::decimal")]
	pub from_token_amount: U256,
}

impl ProviderQuote {
	/// The final transaction of the plan, which performs the swap itself
	pub fn swap_transaction(&self) -> Option<&EvmTransaction> {
		self.transactions.last()
	}

	/// Transactions that must be mined before the swap
	pub fn approval_transactions(&self) -> &[EvmTransaction] {
		match self.transactions.split_last() {
			Some((_, approvals)) => approvals,
			None => &[],
		}
	}
}
