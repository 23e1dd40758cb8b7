//! Registry of quote providers
//!
//! Providers are looked up by [`ProviderName`]. The registry also fans a
//! request out to every provider that supports the requested network pair.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use swap_types::{
	NetworkName, ProviderError, ProviderName, ProviderQuote, ProviderResult, QuoteMetaOptions,
	QuoteProvider, QuoteRequest,
};
use tracing::{debug, info, warn};

/// Outcome of one provider during a fan-out
#[derive(Debug)]
pub struct ProviderOutcome {
	pub provider: ProviderName,
	pub result: ProviderResult<Option<ProviderQuote>>,
}

/// Registry holding one provider per name
#[derive(Debug, Default, Clone)]
pub struct ProviderRegistry {
	providers: BTreeMap<ProviderName, Arc<dyn QuoteProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a provider, replacing any previous one with the same name
	pub fn register(&mut self, provider: Arc<dyn QuoteProvider>) {
		let name = provider.name();
		if self.providers.insert(name, provider).is_some() {
			warn!("Replacing already registered provider {}", name);
		}
	}

	pub fn with_provider(mut self, provider: Arc<dyn QuoteProvider>) -> Self {
		self.register(provider);
		self
	}

	pub fn get(&self, name: ProviderName) -> ProviderResult<Arc<dyn QuoteProvider>> {
		self.providers
			.get(&name)
			.cloned()
			.ok_or_else(|| ProviderError::NotFound {
				provider: name.to_string(),
			})
	}

	pub fn names(&self) -> Vec<ProviderName> {
		self.providers.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Providers able to quote from `from` to `to`
	pub fn supporting(&self, from: NetworkName, to: NetworkName) -> Vec<Arc<dyn QuoteProvider>> {
		self.providers
			.values()
			.filter(|provider| provider.supports_pair(from, to))
			.cloned()
			.collect()
	}

	/// Quote through a single named provider
	pub async fn get_quote(
		&self,
		name: ProviderName,
		options: &QuoteRequest,
		meta: &QuoteMetaOptions,
	) -> ProviderResult<Option<ProviderQuote>> {
		self.get(name)?.get_quote(options, meta).await
	}

	/// Query every provider supporting the pair concurrently
	///
	/// Providers that do not support the pair are not called. Each outcome is
	/// returned as-is, in provider name order.
	pub async fn get_quotes(&self, options: &QuoteRequest, meta: &QuoteMetaOptions) -> Vec<ProviderOutcome> {
		let providers = self.supporting(options.from_network, options.to_network);
		debug!(
			"Fetching quotes {} -> {} from {} providers",
			options.from_network,
			options.to_network,
			providers.len()
		);

		let tasks = providers.into_iter().map(|provider| async move {
			let result = provider.get_quote(options, meta).await;
			if let Err(e) = &result {
				warn!("Provider {} failed to quote: {}", provider.name(), e);
			}
			ProviderOutcome {
				provider: provider.name(),
				result,
			}
		});

		let outcomes = join_all(tasks).await;
		info!(
			"Collected {} quotes from {} providers",
			outcomes
				.iter()
				.filter(|o| matches!(o.result, Ok(Some(_))))
				.count(),
			outcomes.len()
		);
		outcomes
	}
}
