//! Chain client backed by an alloy JSON-RPC provider

use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use async_trait::async_trait;
use std::fmt;
use swap_types::{ChainClient, ProviderError, ProviderResult};
use tracing::debug;

use crate::erc20::IERC20;

/// [`ChainClient`] that reads ERC-20 state through `eth_call`
#[derive(Clone)]
pub struct RpcChainClient<P> {
	provider: P,
}

impl<P> RpcChainClient<P> {
	pub fn new(provider: P) -> Self {
		Self { provider }
	}

	pub fn inner(&self) -> &P {
		&self.provider
	}
}

impl<P> fmt::Debug for RpcChainClient<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RpcChainClient").finish_non_exhaustive()
	}
}

#[async_trait]
impl<P> ChainClient for RpcChainClient<P>
where
	P: Provider + Send + Sync,
{
	async fn allowance(&self, token: Address, owner: Address, spender: Address) -> ProviderResult<U256> {
		let contract = IERC20::new(token, &self.provider);
		let allowance = contract
			.allowance(owner, spender)
			.call()
			.await
			.map_err(|e| {
				ProviderError::ChainClient(format!("allowance({}, {}) on {} failed: {}", owner, spender, token, e))
			})?;

		debug!(%token, %owner, %spender, %allowance, "Fetched ERC-20 allowance");
		Ok(allowance)
	}
}
