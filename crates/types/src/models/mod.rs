//! Shared domain models used across providers

pub mod network;
pub mod token;
pub mod transaction;
pub mod u256;

pub use network::{NetworkDescriptor, NetworkName};
pub use token::{Token, TokenMetadata};
pub use transaction::EvmTransaction;
pub use u256::parse_decimal_u256;
