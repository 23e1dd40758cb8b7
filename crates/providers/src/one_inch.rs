//! 1inch provider implementation
//!
//! Quotes swaps through the 1inch `/swap` endpoint and turns the response into
//! an ordered transaction plan: allowance approvals (for ERC-20 sources)
//! followed by the aggregator's swap call.

use alloy_primitives::{address, Address, Bytes, U256};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;
use swap_types::constants::{DEFAULT_SWAP_GAS_LIMIT, ONE_INCH_BASE_URL};
use swap_types::fees::{fee_percentage, referrer_address};
use swap_types::{
	AllowanceRequest, ApprovalBuilder, ChainClient, EvmTransaction, FeeConfigs, NetworkDescriptor,
	NetworkName, ProviderError, ProviderInfo, ProviderName, ProviderQuote, ProviderResult,
	ProviderRuntimeConfig, QuoteMetaOptions, QuoteProvider, QuoteRequest, Token,
};
use tracing::{debug, error, info};

use crate::approvals::Erc20ApprovalBuilder;
use crate::client_cache::{build_client, ClientCache, ClientConfig};

/// 1inch aggregation router, the spender approved for every supported chain
const AGGREGATION_ROUTER_V5: Address = address!("1111111254eeb25477b68fb85ed929f73a960582");

const SUPPORTED_NETWORKS: [(NetworkName, NetworkDescriptor); 4] = [
	(
		NetworkName::Ethereum,
		NetworkDescriptor::new(AGGREGATION_ROUTER_V5, 1),
	),
	(
		NetworkName::Binance,
		NetworkDescriptor::new(AGGREGATION_ROUTER_V5, 56),
	),
	(
		NetworkName::Matic,
		NetworkDescriptor::new(AGGREGATION_ROUTER_V5, 137),
	),
	(
		NetworkName::Optimism,
		NetworkDescriptor::new(AGGREGATION_ROUTER_V5, 10),
	),
];

// ================================
// 1INCH API MODELS
// ================================

/// Reply of `GET /{chainId}/swap`
///
/// 1inch answers either with an error object or with the swap payload.
/// The error case is listed first so a body carrying a truthy `error` never
/// falls through to the success shape. A falsy `error` (`null`, `false`,
/// `0`, `""`) does not count as a rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneInchSwapResponse {
	Error(OneInchError),
	Swap(OneInchSwap),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneInchError {
	#[serde(deserialize_with = "truthy_value")]
	pub error: Value,
	#[serde(default)]
	pub description: Value,
	#[serde(default)]
	pub status_code: Option<u16>,
	#[serde(default)]
	pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneInchSwap {
	pub tx: OneInchTx,
	#[serde(with = "swap_types::models::u256::decimal")]
	pub to_token_amount: U256,
	#[serde(with = "swap_types::models::u256::decimal")]
	pub from_token_amount: U256,
}

impl OneInchError {
	/// Error and description joined for logging
	pub fn message(&self) -> String {
		match render(&self.description) {
			description if description.is_empty() => render(&self.error),
			description => format!("{} {}", render(&self.error), description),
		}
	}
}

fn render(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn truthy_value<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	if is_truthy(&value) {
		Ok(value)
	} else {
		Err(de::Error::custom("error field is not set"))
	}
}

/// Ready-to-send router call
#[derive(Debug, Clone, Deserialize)]
pub struct OneInchTx {
	pub to: Address,
	pub data: Bytes,
	/// Native amount, as a decimal string
	#[serde(with = "swap_types::models::u256::decimal")]
	pub value: U256,
}

/// Decode a `/swap` reply, tolerating error bodies on non-2xx statuses
pub fn parse_swap_response(status: StatusCode, body: &str) -> ProviderResult<OneInchSwapResponse> {
	match serde_json::from_str::<OneInchSwapResponse>(body) {
		Ok(response) => Ok(response),
		Err(_) if !status.is_success() => Err(ProviderError::from_http_failure(status.as_u16())),
		Err(e) => Err(ProviderError::invalid_response(format!(
			"Failed to parse 1inch swap response: {}",
			e
		))),
	}
}

/// Client strategy for the 1inch provider
#[derive(Debug)]
enum ClientStrategy {
	/// Use the shared client cache for connection pooling and reuse
	Cached(ClientCache),
	/// Create clients on-demand with no caching
	OnDemand,
}

/// Swap quote provider backed by the 1inch aggregator
#[derive(Debug)]
pub struct OneInchProvider {
	info: ProviderInfo,
	network: NetworkName,
	token_list: Vec<Token>,
	chain_client: Arc<dyn ChainClient>,
	approval_builder: Arc<dyn ApprovalBuilder>,
	fee_configs: Arc<FeeConfigs>,
	swap_gas_limit: U256,
	runtime: ProviderRuntimeConfig,
	client_strategy: ClientStrategy,
}

impl OneInchProvider {
	/// Create a provider using the shared client cache (recommended)
	pub fn new(chain_client: Arc<dyn ChainClient>, network: NetworkName, token_list: Vec<Token>) -> Self {
		Self::with_cache(chain_client, network, token_list, ClientCache::for_provider())
	}

	/// Create a provider with a custom client cache
	pub fn with_cache(
		chain_client: Arc<dyn ChainClient>,
		network: NetworkName,
		token_list: Vec<Token>,
		cache: ClientCache,
	) -> Self {
		Self {
			info: ProviderInfo::new(ProviderName::OneInch, "1inch v5", "5.0.0"),
			network,
			token_list,
			chain_client,
			approval_builder: Arc::new(Erc20ApprovalBuilder::new()),
			fee_configs: Arc::new(FeeConfigs::new()),
			swap_gas_limit: U256::from(DEFAULT_SWAP_GAS_LIMIT),
			runtime: ProviderRuntimeConfig::new(ProviderName::OneInch.as_str(), ONE_INCH_BASE_URL),
			client_strategy: ClientStrategy::Cached(cache),
		}
	}

	/// Create a provider that builds a fresh HTTP client per request
	pub fn without_cache(chain_client: Arc<dyn ChainClient>, network: NetworkName, token_list: Vec<Token>) -> Self {
		Self {
			client_strategy: ClientStrategy::OnDemand,
			..Self::new(chain_client, network, token_list)
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let runtime = ProviderRuntimeConfig::new(self.runtime.provider_id.clone(), base_url);
		self.runtime.base_url = runtime.base_url;
		self
	}

	pub fn with_api_key(mut self, api_key: &str) -> Self {
		self.runtime = self
			.runtime
			.with_header("Authorization", format!("Bearer {}", api_key));
		self
	}

	pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.runtime = self.runtime.with_timeout_ms(timeout_ms);
		self
	}

	pub fn with_fee_configs(mut self, fee_configs: Arc<FeeConfigs>) -> Self {
		self.fee_configs = fee_configs;
		self
	}

	pub fn with_approval_builder(mut self, approval_builder: Arc<dyn ApprovalBuilder>) -> Self {
		self.approval_builder = approval_builder;
		self
	}

	pub fn with_swap_gas_limit(mut self, gas_limit: u64) -> Self {
		self.swap_gas_limit = U256::from(gas_limit);
		self
	}

	/// Whether 1inch quotes on `network`; usable without an instance
	pub fn is_supported(network: NetworkName) -> bool {
		Self::network_descriptor(network).is_some()
	}

	pub fn network_descriptor(network: NetworkName) -> Option<NetworkDescriptor> {
		SUPPORTED_NETWORKS
			.iter()
			.find(|(name, _)| *name == network)
			.map(|(_, descriptor)| *descriptor)
	}

	pub fn supported_networks() -> impl Iterator<Item = NetworkName> {
		SUPPORTED_NETWORKS.iter().map(|(name, _)| *name)
	}

	pub fn network(&self) -> NetworkName {
		self.network
	}

	pub fn token_list(&self) -> &[Token] {
		&self.token_list
	}

	pub fn base_url(&self) -> &str {
		&self.runtime.base_url
	}

	/// Full `/swap` URL for a chain
	pub fn swap_url(&self, chain_id: u64) -> String {
		format!("{}{}/swap", self.runtime.base_url, chain_id)
	}

	/// Query parameters for `/swap`, in the order 1inch documents them
	pub fn swap_query_params(&self, options: &QuoteRequest, meta: &QuoteMetaOptions) -> Vec<(&'static str, String)> {
		let fee_config = self
			.fee_configs
			.get(self.info.name, &meta.wallet_identifier);

		vec![
			("fromTokenAddress", options.from_token.address.to_string()),
			("toTokenAddress", options.to_token.address.to_string()),
			("amount", options.amount.to_string()),
			("fromAddress", options.from_address.to_string()),
			("slippage", meta.slippage_or_default().to_string()),
			("fee", fee_percentage(fee_config)),
			("referrerAddress", referrer_address(fee_config)),
			// Allowances are handled here, so 1inch must not simulate the swap
			("disableEstimate", "true".to_string()),
		]
	}

	fn get_client(&self) -> ProviderResult<Arc<reqwest::Client>> {
		match &self.client_strategy {
			ClientStrategy::Cached(cache) => cache.get_runtime_client(&self.runtime),
			ClientStrategy::OnDemand => Ok(Arc::new(build_client(&ClientConfig::from(&self.runtime))?)),
		}
	}

	async fn fetch_swap(
		&self,
		chain_id: u64,
		params: &[(&'static str, String)],
	) -> ProviderResult<OneInchSwapResponse> {
		let client = self.get_client()?;
		let url = self.swap_url(chain_id);

		debug!("Fetching 1inch swap from {}", url);

		let response = client
			.get(&url)
			.query(params)
			.send()
			.await
			.map_err(ProviderError::HttpError)?;

		let status = response.status();
		let body = response.text().await.map_err(ProviderError::HttpError)?;
		parse_swap_response(status, &body)
	}
}

#[async_trait]
impl QuoteProvider for OneInchProvider {
	fn provider_info(&self) -> &ProviderInfo {
		&self.info
	}

	fn is_supported(&self, network: NetworkName) -> bool {
		OneInchProvider::is_supported(network)
	}

	async fn get_quote(
		&self,
		options: &QuoteRequest,
		meta: &QuoteMetaOptions,
	) -> ProviderResult<Option<ProviderQuote>> {
		if !Self::is_supported(options.to_network) {
			debug!("1inch does not support destination network {}", options.to_network);
			return Ok(None);
		}
		let Some(descriptor) = Self::network_descriptor(options.from_network) else {
			debug!("1inch does not support source network {}", options.from_network);
			return Ok(None);
		};

		let params = self.swap_query_params(options, meta);
		let swap = match self.fetch_swap(descriptor.chain_id, &params).await? {
			OneInchSwapResponse::Swap(swap) => swap,
			OneInchSwapResponse::Error(rejection) => {
				error!(
					"1inch rejected swap on {}: {}",
					options.from_network,
					rejection.message()
				);
				return Ok(None);
			},
		};

		let mut transactions = Vec::new();
		if !options.from_token.is_native() {
			let request = AllowanceRequest {
				infinite_approval: meta.infinite_approval,
				spender: descriptor.approval_address,
				chain_client: self.chain_client.as_ref(),
				amount: options.amount,
				from_address: options.from_address,
				from_token: &options.from_token,
			};
			let approvals = self
				.approval_builder
				.allowance_transactions(&request)
				.await?;
			transactions.extend(approvals);
		}

		transactions.push(EvmTransaction::new(
			swap.tx.to,
			swap.tx.value,
			swap.tx.data,
			self.swap_gas_limit,
		));

		info!(
			"1inch quote on {}: {} -> {} ({} transactions)",
			options.from_network,
			swap.from_token_amount,
			swap.to_token_amount,
			transactions.len()
		);

		Ok(Some(ProviderQuote {
			transactions,
			to_token_amount: swap.to_token_amount,
			from_token_amount: swap.from_token_amount,
		}))
	}
}
