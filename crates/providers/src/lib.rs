//! Swap Providers
//!
//! Aggregator-backed quote providers and the collaborators they use to build
//! transaction plans.

pub mod approvals;
pub mod chain_client;
pub mod client_cache;
pub mod erc20;
pub mod one_inch;
pub mod registry;

pub use approvals::Erc20ApprovalBuilder;
pub use chain_client::RpcChainClient;
pub use client_cache::{ClientCache, ClientConfig};
pub use one_inch::OneInchProvider;
pub use registry::{ProviderOutcome, ProviderRegistry};
pub use swap_types::constants::ONE_INCH_BASE_URL;
pub use swap_types::{ProviderError, ProviderResult, QuoteProvider};
