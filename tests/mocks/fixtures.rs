//! Addresses, amounts and aggregator bodies used across tests

#![allow(dead_code)]

use serde_json::{json, Value};
use alloy_primitives::address;
use swap_quote::{Address, NetworkName, QuoteRequest, Token, U256};

pub const USER: Address = address!("742d35Cc6634C0532925a3b8D38BA2297C33A9D7");
pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
pub const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
pub const ROUTER: Address = address!("1111111254eeb25477b68fb85ed929f73a960582");
pub const ENKRYPT_REFERRER: Address = address!("551d9d8eb02e1c713009da8f7c194870d651054a");

pub const ONE_ETH_WEI: &str = "1000000000000000000";
pub const THOUSAND_USDC: &str = "1000000000";
pub const SWAP_CALLDATA: &str = "0x12aa3caf000000000000000000000000";

pub fn amount(value: &str) -> U256 {
	value.parse().unwrap()
}

/// Swap 1 ETH for USDC on Ethereum
pub fn native_to_usdc() -> QuoteRequest {
	QuoteRequest::same_network(
		Token::native(NetworkName::Ethereum),
		Token::new(USDC, NetworkName::Ethereum),
		amount(ONE_ETH_WEI),
		USER,
	)
}

/// Swap 1000 USDC for DAI on `network`
pub fn usdc_to_dai(network: NetworkName) -> QuoteRequest {
	QuoteRequest::same_network(
		Token::new(USDC, network),
		Token::new(DAI, network),
		amount(THOUSAND_USDC),
		USER,
	)
}

pub fn swap_body(from_amount: &str, to_amount: &str, value: &str) -> Value {
	json!({
		"fromToken": { "symbol": "ETH", "decimals": 18 },
		"toToken": { "symbol": "USDC", "decimals": 6 },
		"fromTokenAmount": from_amount,
		"toTokenAmount": to_amount,
		"protocols": [],
		"tx": {
			"from": "0x742d35cc6634c0532925a3b8d38ba2297c33a9d7",
			"to": "0x1111111254eeb25477b68fb85ed929f73a960582",
			"data": SWAP_CALLDATA,
			"value": value,
			"gas": 0,
			"gasPrice": "12000000000"
		}
	})
}

pub fn error_body(description: &str) -> Value {
	json!({
		"statusCode": 400,
		"error": "Bad Request",
		"description": description,
		"requestId": "6f1c1b1e-0000-4000-8000-000000000000"
	})
}
