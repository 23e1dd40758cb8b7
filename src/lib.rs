//! swap-quote
//!
//! Turns 1inch aggregator quotes into ordered approval and swap transactions.
//! The library wires the provider crates to the loaded [`Settings`]; the
//! `swap-quote` binary is a thin CLI on top of it.

use std::sync::Arc;
use tracing::info;

// Core domain types
pub use swap_types::{
	Address, ApprovalBuilder, Bytes, ChainClient, EvmTransaction, FeeConfig, FeeConfigs,
	NetworkName, ProviderError, ProviderName, ProviderQuote, ProviderResult, QuoteMetaOptions,
	QuoteProvider, QuoteRequest, Token, NATIVE_TOKEN_ADDRESS, U256,
};

// Providers
pub use swap_providers::{
	ClientCache, Erc20ApprovalBuilder, OneInchProvider, ProviderOutcome, ProviderRegistry,
	RpcChainClient,
};

// Config
pub use swap_config::{
	load_config, load_config_from, log_service_info, log_settings_summary, ConfigLoadError,
	ConfigurableValueError, LogFormat, Settings,
};

pub mod models {
	pub use swap_types::*;
}

pub mod providers {
	pub use swap_providers::*;
}

pub mod config {
	pub use swap_config::*;
}

/// Errors raised while assembling providers from settings
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
	#[error(transparent)]
	Config(#[from] ConfigLoadError),
	#[error("Failed to resolve API key: {0}")]
	ApiKey(#[from] ConfigurableValueError),
}

/// Builds quote providers from [`Settings`]
pub struct SwapQuoteBuilder {
	settings: Settings,
	client_cache: Option<ClientCache>,
	approval_builder: Option<Arc<dyn ApprovalBuilder>>,
}

impl Default for SwapQuoteBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl SwapQuoteBuilder {
	/// Builder with default settings and the shared HTTP client cache
	pub fn new() -> Self {
		Self {
			settings: Settings::default(),
			client_cache: Some(ClientCache::for_provider()),
			approval_builder: None,
		}
	}

	/// Builder using settings from `CONFIG_PATH` or `config/config`
	pub fn from_config() -> Result<Self, BuilderError> {
		Ok(Self::new().with_settings(load_config()?))
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	pub fn with_client_cache(mut self, cache: ClientCache) -> Self {
		self.client_cache = Some(cache);
		self
	}

	/// Build a fresh HTTP client for every aggregator request
	pub fn without_client_cache(mut self) -> Self {
		self.client_cache = None;
		self
	}

	/// Override the ERC-20 approval builder derived from the gas settings
	pub fn with_approval_builder(mut self, approval_builder: Arc<dyn ApprovalBuilder>) -> Self {
		self.approval_builder = Some(approval_builder);
		self
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Build a 1inch provider for `network`
	pub fn build_one_inch(
		&self,
		chain_client: Arc<dyn ChainClient>,
		network: NetworkName,
		token_list: Vec<Token>,
	) -> Result<OneInchProvider, BuilderError> {
		let settings = &self.settings;

		let provider = match &self.client_cache {
			Some(cache) => {
				OneInchProvider::with_cache(chain_client, network, token_list, cache.clone())
			},
			None => OneInchProvider::without_cache(chain_client, network, token_list),
		};

		let approval_builder: Arc<dyn ApprovalBuilder> = match &self.approval_builder {
			Some(approval_builder) => approval_builder.clone(),
			None => Arc::new(Erc20ApprovalBuilder::with_gas_limit(
				settings.gas_limits.approval,
			)),
		};

		let mut provider = provider
			.with_base_url(settings.aggregator.base_url.clone())
			.with_fee_configs(Arc::new(settings.fees.clone()))
			.with_swap_gas_limit(settings.gas_limits.swap)
			.with_approval_builder(approval_builder);

		if let Some(timeout_ms) = settings.aggregator.timeout_ms {
			provider = provider.with_timeout_ms(timeout_ms);
		}
		if let Some(api_key) = settings.api_key()? {
			provider = provider.with_api_key(&api_key);
		}

		info!(
			"Built 1inch provider for {} against {}",
			network,
			provider.base_url()
		);
		Ok(provider)
	}

	/// Build a registry holding every provider available for `network`
	pub fn build_registry(
		&self,
		chain_client: Arc<dyn ChainClient>,
		network: NetworkName,
		token_list: Vec<Token>,
	) -> Result<ProviderRegistry, BuilderError> {
		let one_inch = self.build_one_inch(chain_client, network, token_list)?;
		Ok(ProviderRegistry::new().with_provider(Arc::new(one_inch)))
	}
}

/// Initialize tracing with configuration-based settings
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing_from_settings(
	settings: &Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	// Quote output goes to stdout, so logs go to stderr
	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt()
				.json()
				.with_writer(std::io::stderr)
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_writer(std::io::stderr)
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_writer(std::io::stderr)
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);

	Ok(())
}
