//! Protocol-wide constants shared by providers

pub mod gas;

pub use gas::{DEFAULT_APPROVAL_GAS_LIMIT, DEFAULT_SWAP_GAS_LIMIT};

use alloy_primitives::{address, Address};

/// Address used in token fields to denote the chain's native currency
pub const NATIVE_TOKEN_ADDRESS: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// Slippage tolerance (percent) sent to aggregators when the caller gives none
pub const DEFAULT_SLIPPAGE: &str = "0.5";

/// Default 1inch API root
pub const ONE_INCH_BASE_URL: &str = "https://api.1inch.io/v5.0/";
