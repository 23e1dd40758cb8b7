//! Provider domain model: identity, collaborator requests, traits and errors

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod errors;
pub mod traits;

pub use errors::ProviderError;
pub use traits::{ApprovalBuilder, ChainClient, QuoteProvider};

use crate::models::Token;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Aggregator backends known to the system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ProviderName {
	// Settings loaders may lowercase map keys
	#[serde(alias = "oneinch")]
	OneInch,
	Paraswap,
	Zerox,
}

impl ProviderName {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderName::OneInch => "oneInch",
			ProviderName::Paraswap => "paraswap",
			ProviderName::Zerox => "zerox",
		}
	}
}

impl fmt::Display for ProviderName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Static identity of a provider implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
	pub name: ProviderName,
	/// Human-readable name
	pub display_name: String,
	/// Version of the provider implementation
	pub version: String,
}

impl ProviderInfo {
	pub fn new(name: ProviderName, display_name: impl Into<String>, version: impl Into<String>) -> Self {
		Self {
			name,
			display_name: display_name.into(),
			version: version.into(),
		}
	}
}

/// Minimal runtime configuration for talking to an aggregator API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRuntimeConfig {
	/// Unique provider instance identifier (used to key cached HTTP clients)
	pub provider_id: String,

	/// Base URL of the aggregator API, ending with `/`
	pub base_url: String,

	/// Request timeout; `None` leaves the transport default in place
	pub timeout_ms: Option<u64>,

	/// Optional custom HTTP headers for requests
	pub headers: Option<HashMap<String, String>>,
}

impl ProviderRuntimeConfig {
	/// Create a new runtime config, normalizing the base URL to end with `/`
	pub fn new(provider_id: impl Into<String>, base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		if !base_url.ends_with('/') {
			base_url.push('/');
		}
		Self {
			provider_id: provider_id.into(),
			base_url,
			timeout_ms: None,
			headers: None,
		}
	}

	pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeout_ms = Some(timeout_ms);
		self
	}

	/// Add a header sent with every request
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers
			.get_or_insert_with(HashMap::new)
			.insert(name.into(), value.into());
		self
	}
}

/// Everything an [`ApprovalBuilder`] needs to plan approvals for one swap
#[derive(Debug, Clone, Copy)]
pub struct AllowanceRequest<'a> {
	/// Approve `U256::MAX` instead of `amount`
	pub infinite_approval: bool,
	/// Contract that will pull the tokens
	pub spender: Address,
	pub chain_client: &'a dyn ChainClient,
	pub amount: U256,
	pub from_address: Address,
	pub from_token: &'a Token,
}

impl AllowanceRequest<'_> {
	/// Allowance the spender must end up with
	pub fn target_allowance(&self) -> U256 {
		if self.infinite_approval {
			U256::MAX
		} else {
			self.amount
		}
	}
}
