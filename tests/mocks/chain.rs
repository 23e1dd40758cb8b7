//! On-chain collaborators that never touch a node

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use swap_quote::{Address, ApprovalBuilder, ChainClient, EvmTransaction, ProviderError, ProviderResult, U256};
use swap_quote::models::AllowanceRequest;

/// Reports a fixed allowance for every token and counts lookups
#[derive(Debug, Clone)]
pub struct MockChainClient {
	allowance: U256,
	calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockChainClient {
	pub fn with_allowance(allowance: U256) -> Self {
		Self {
			allowance,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn zero() -> Self {
		Self::with_allowance(U256::ZERO)
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ChainClient for MockChainClient {
	async fn allowance(&self, _token: Address, _owner: Address, _spender: Address) -> ProviderResult<U256> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.allowance)
	}
}

/// Approval builder whose allowance read always fails
#[derive(Debug, Default)]
pub struct FailingApprovalBuilder;

#[async_trait]
impl ApprovalBuilder for FailingApprovalBuilder {
	async fn allowance_transactions(&self, _request: &AllowanceRequest<'_>) -> ProviderResult<Vec<EvmTransaction>> {
		Err(ProviderError::ChainClient("RPC node unreachable".to_string()))
	}
}
