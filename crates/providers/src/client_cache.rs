//! HTTP client cache for aggregator connections
//!
//! Provides per-provider client instances with connection pooling and keep-alive.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swap_types::{ProviderError, ProviderResult, ProviderRuntimeConfig};
use tracing::{debug, warn};

/// Configuration for creating pooled HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	/// Base URL of the aggregator API
	pub base_url: String,
	/// Provider identifier for cache differentiation
	pub provider_id: String,
	/// Maximum number of idle connections per host
	pub max_idle_per_host: usize,
	/// Connection keep-alive timeout
	pub keep_alive_timeout_ms: u64,
	/// Whole-request timeout, if any
	pub timeout_ms: Option<u64>,
	/// Default headers (auth, etc.)
	pub headers: Vec<(String, String)>,
}

impl From<&ProviderRuntimeConfig> for ClientConfig {
	fn from(runtime: &ProviderRuntimeConfig) -> Self {
		let mut headers = vec![
			("User-Agent".to_string(), "swap-quote/0.1".to_string()),
			("Accept".to_string(), "application/json".to_string()),
		];

		if let Some(extra) = &runtime.headers {
			let mut extra: Vec<_> = extra.iter().collect();
			// HashMap order is random; keep cache keys stable
			extra.sort();
			for (key, value) in extra {
				headers.push((key.clone(), value.clone()));
			}
		}

		Self {
			base_url: runtime.base_url.clone(),
			provider_id: runtime.provider_id.clone(),
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			timeout_ms: runtime.timeout_ms,
			headers,
		}
	}
}

/// Cached client with creation timestamp for TTL management
#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

impl CachedClient {
	fn new(client: Client) -> Self {
		Self {
			client: Arc::new(client),
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Thread-safe cache of HTTP clients keyed by client configuration, with TTL
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	/// Create a new client cache with default 30-minute TTL
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(30 * 60))
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Get or create a pooled client for the given configuration
	pub fn get_client(&self, config: &ClientConfig) -> ProviderResult<Arc<Client>> {
		self.clients.remove_if(config, |_, cached_client| {
			let is_expired = cached_client.is_expired(self.ttl);
			if is_expired {
				warn!(
					"Client cache expired for {} (age: {:?}), will create new client",
					config.base_url,
					cached_client.created_at.elapsed()
				);
			}
			is_expired
		});

		if let Some(cached_client) = self.clients.get(config) {
			debug!(
				"Reusing cached client for {} (age: {:?})",
				config.base_url,
				cached_client.created_at.elapsed()
			);
			return Ok(cached_client.client.clone());
		}

		debug!("Creating new client for {}", config.base_url);
		let cached_client = CachedClient::new(build_client(config)?);

		match self.clients.entry(config.clone()) {
			Entry::Occupied(entry) => {
				// Another caller raced us; keep theirs
				Ok(entry.get().client.clone())
			},
			Entry::Vacant(entry) => {
				let client = cached_client.client.clone();
				entry.insert(cached_client);
				Ok(client)
			},
		}
	}

	/// Get or create a client for a provider runtime configuration
	pub fn get_runtime_client(&self, runtime: &ProviderRuntimeConfig) -> ProviderResult<Arc<Client>> {
		self.get_client(&ClientConfig::from(runtime))
	}

	/// Remove all expired clients, returning how many were dropped
	pub fn cleanup_expired(&self) -> usize {
		let mut removed_count = 0;

		self.clients.retain(|config, cached_client| {
			let is_expired = cached_client.is_expired(self.ttl);
			if is_expired {
				removed_count += 1;
				debug!("Removed expired client for {}", config.base_url);
			}
			!is_expired
		});

		removed_count
	}

	pub fn clear(&self) {
		let count = self.clients.len();
		self.clients.clear();
		debug!("Cleared all {} clients from cache", count);
	}

	pub fn len(&self) -> usize {
		self.clients.len()
	}

	pub fn is_empty(&self) -> bool {
		self.clients.is_empty()
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Handle on the process-wide cache shared by all providers
	pub fn for_provider() -> Self {
		GLOBAL_CLIENT_CACHE.clone()
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

lazy_static::lazy_static! {
	static ref GLOBAL_CLIENT_CACHE: ClientCache = ClientCache::new();
}

/// Build a client outside of any cache
pub fn build_client(config: &ClientConfig) -> ProviderResult<Client> {
	let mut builder = ClientBuilder::new()
		.pool_max_idle_per_host(config.max_idle_per_host)
		.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
		.tcp_keepalive(Duration::from_secs(60));

	if let Some(timeout_ms) = config.timeout_ms {
		builder = builder.timeout(Duration::from_millis(timeout_ms));
	}

	let mut header_map = HeaderMap::new();
	for (key, value) in &config.headers {
		match (
			HeaderName::from_bytes(key.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				header_map.insert(name, value);
			},
			_ => warn!("Skipping invalid header {} for {}", key, config.base_url),
		}
	}

	builder
		.default_headers(header_map)
		.build()
		.map_err(ProviderError::HttpError)
}
