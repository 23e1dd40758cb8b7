//! Core provider traits
//!
//! [`QuoteProvider`] is the interface every aggregator backend implements.
//! [`ApprovalBuilder`] and [`ChainClient`] are the collaborators a provider
//! consumes to prepend allowance approvals.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use std::fmt::Debug;

use super::{AllowanceRequest, ProviderInfo, ProviderName, ProviderResult};
use crate::models::{EvmTransaction, NetworkName};
use crate::quotes::{ProviderQuote, QuoteMetaOptions, QuoteRequest};

/// Shared interface of swap quote providers
#[async_trait]
pub trait QuoteProvider: Send + Sync + Debug {
	/// Static identity of the provider
	fn provider_info(&self) -> &ProviderInfo;

	fn name(&self) -> ProviderName {
		self.provider_info().name
	}

	/// Whether the provider can quote on `network`
	fn is_supported(&self, network: NetworkName) -> bool;

	/// Whether both ends of a swap are supported
	fn supports_pair(&self, from: NetworkName, to: NetworkName) -> bool {
		self.is_supported(from) && self.is_supported(to)
	}

	/// Quote a swap and build the transactions that execute it
	///
	/// Resolves to `Ok(None)` when no quote is available (unsupported
	/// network, or the aggregator rejected the request). Transport and
	/// approval failures are returned as errors.
	async fn get_quote(
		&self,
		options: &QuoteRequest,
		meta: &QuoteMetaOptions,
	) -> ProviderResult<Option<ProviderQuote>>;
}

/// Read access to the chain, as needed by approval builders
#[async_trait]
pub trait ChainClient: Send + Sync + Debug {
	/// ERC-20 allowance granted by `owner` to `spender` on `token`
	async fn allowance(&self, token: Address, owner: Address, spender: Address) -> ProviderResult<U256>;
}

/// Builds the transactions that give a spender enough allowance
#[async_trait]
pub trait ApprovalBuilder: Send + Sync + Debug {
	/// Zero or more transactions to send before the swap, in order
	async fn allowance_transactions(
		&self,
		request: &AllowanceRequest<'_>,
	) -> ProviderResult<Vec<EvmTransaction>>;
}
