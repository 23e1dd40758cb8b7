//! Swap Types
//!
//! Shared models and traits for swap quote providers.
//! This crate contains the domain models, the provider error taxonomy and the
//! traits that providers and their collaborators implement.

pub mod constants;
pub mod fees;
pub mod models;
pub mod providers;
pub mod quotes;

// Re-export the EVM primitives used throughout the public API
pub use alloy_primitives::{Address, Bytes, U256};

pub use constants::{NATIVE_TOKEN_ADDRESS, DEFAULT_SLIPPAGE};

pub use fees::{FeeConfig, FeeConfigs};

pub use models::{EvmTransaction, NetworkDescriptor, NetworkName, Token, TokenMetadata};

pub use providers::{
	AllowanceRequest, ApprovalBuilder, ChainClient, ProviderError, ProviderInfo, ProviderName,
	ProviderResult, ProviderRuntimeConfig, QuoteProvider,
};

pub use quotes::{ProviderQuote, QuoteMetaOptions, QuoteRequest};
