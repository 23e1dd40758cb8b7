//! ERC-20 approval planning
//!
//! Reads the current allowance through the [`ChainClient`] and emits the
//! `approve` transactions needed for the spender to pull the swap amount.
//! Tokens such as USDT refuse to change a non-zero allowance to another
//! non-zero value, so an insufficient existing allowance is reset to zero
//! first.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use swap_types::constants::DEFAULT_APPROVAL_GAS_LIMIT;
use swap_types::{AllowanceRequest, ApprovalBuilder, EvmTransaction, ProviderResult};
use tracing::debug;

use crate::erc20::IERC20;

/// Default [`ApprovalBuilder`] for ERC-20 tokens
#[derive(Debug, Clone)]
pub struct Erc20ApprovalBuilder {
	gas_limit: U256,
}

impl Erc20ApprovalBuilder {
	pub fn new() -> Self {
		Self::with_gas_limit(DEFAULT_APPROVAL_GAS_LIMIT)
	}

	pub fn with_gas_limit(gas_limit: u64) -> Self {
		Self {
			gas_limit: U256::from(gas_limit),
		}
	}

	fn approve_transaction(&self, token: Address, spender: Address, amount: U256) -> EvmTransaction {
		let data = IERC20::approveCall { spender, amount }.abi_encode();
		EvmTransaction::new(token, U256::ZERO, Bytes::from(data), self.gas_limit)
	}
}

impl Default for Erc20ApprovalBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ApprovalBuilder for Erc20ApprovalBuilder {
	async fn allowance_transactions(
		&self,
		request: &AllowanceRequest<'_>,
	) -> ProviderResult<Vec<EvmTransaction>> {
		if request.from_token.is_native() {
			return Ok(Vec::new());
		}

		let token = request.from_token.address;
		let current = request
			.chain_client
			.allowance(token, request.from_address, request.spender)
			.await?;

		if current >= request.amount {
			debug!(%token, %current, amount = %request.amount, "Existing allowance covers swap");
			return Ok(Vec::new());
		}

		let mut transactions = Vec::with_capacity(2);
		if !current.is_zero() {
			transactions.push(self.approve_transaction(token, request.spender, U256::ZERO));
		}
		transactions.push(self.approve_transaction(
			token,
			request.spender,
			request.target_allowance(),
		));

		debug!(
			%token,
			spender = %request.spender,
			infinite = request.infinite_approval,
			count = transactions.len(),
			"Planned approval transactions"
		);
		Ok(transactions)
	}
}
