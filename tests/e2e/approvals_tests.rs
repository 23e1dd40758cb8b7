// Allowance handling in front of the swap transaction

use std::sync::Arc;

use alloy_sol_types::SolCall;
use swap_quote::providers::erc20::IERC20;
use swap_quote::{EvmTransaction, NetworkName, ProviderError, QuoteMetaOptions, QuoteProvider, U256};

use crate::e2e::{builder_for, one_inch, settings_for};
use crate::mocks::fixtures::{self, amount, ROUTER, THOUSAND_USDC, USDC};
use crate::mocks::{FailingApprovalBuilder, MockChainClient, MockOneInchServer};

fn decode_approve(tx: &EvmTransaction) -> U256 {
	assert_eq!(tx.to, USDC);
	assert_eq!(tx.value, U256::ZERO);
	let call = IERC20::approveCall::abi_decode(&tx.data).unwrap();
	assert_eq!(call.spender, ROUTER);
	call.amount
}

async fn usdc_server() -> MockOneInchServer {
	MockOneInchServer::with_body(fixtures::swap_body(THOUSAND_USDC, "999800000000000000000", "0").to_string())
		.await
}

#[tokio::test]
async fn test_erc20_without_allowance_approves_then_swaps() {
	let server = usdc_server().await;
	let chain = MockChainClient::zero();
	let provider = one_inch(&server, Arc::new(chain.clone()), NetworkName::Matic);

	let quote = provider
		.get_quote(&fixtures::usdc_to_dai(NetworkName::Matic), &QuoteMetaOptions::default())
		.await
		.unwrap()
		.expect("quote");

	assert_eq!(chain.calls(), 1);
	assert_eq!(quote.transactions.len(), 2);
	let approval = &quote.approval_transactions()[0];
	assert_eq!(decode_approve(approval), amount(THOUSAND_USDC));
	assert_eq!(approval.gas_limit, U256::from(300_000u64));

	// The swap is always last
	let swap = quote.swap_transaction().unwrap();
	assert_eq!(swap.to, ROUTER);
	assert_eq!(swap.data.to_string(), fixtures::SWAP_CALLDATA);
	assert_eq!(server.last_request().chain_id, 137);

	server.abort();
}

#[tokio::test]
async fn test_partial_allowance_is_reset_first() {
	let server = usdc_server().await;
	let chain = MockChainClient::with_allowance(U256::from(5u64));
	let provider = one_inch(&server, Arc::new(chain), NetworkName::Ethereum);

	let quote = provider
		.get_quote(&fixtures::usdc_to_dai(NetworkName::Ethereum), &QuoteMetaOptions::default())
		.await
		.unwrap()
		.unwrap();

	assert_eq!(quote.transactions.len(), 3);
	let approvals = quote.approval_transactions();
	assert_eq!(decode_approve(&approvals[0]), U256::ZERO);
	assert_eq!(decode_approve(&approvals[1]), amount(THOUSAND_USDC));

	server.abort();
}

#[tokio::test]
async fn test_sufficient_allowance_needs_no_approval() {
	let server = usdc_server().await;
	let chain = MockChainClient::with_allowance(amount(THOUSAND_USDC));
	let provider = one_inch(&server, Arc::new(chain), NetworkName::Ethereum);

	let quote = provider
		.get_quote(&fixtures::usdc_to_dai(NetworkName::Ethereum), &QuoteMetaOptions::default())
		.await
		.unwrap()
		.unwrap();

	assert_eq!(quote.transactions.len(), 1);
	assert!(quote.approval_transactions().is_empty());

	server.abort();
}

#[tokio::test]
async fn test_infinite_approval() {
	let server = usdc_server().await;
	let provider = one_inch(&server, Arc::new(MockChainClient::zero()), NetworkName::Ethereum);

	let meta = QuoteMetaOptions::new("enkrypt").with_infinite_approval(true);
	let quote = provider
		.get_quote(&fixtures::usdc_to_dai(NetworkName::Ethereum), &meta)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(decode_approve(&quote.transactions[0]), U256::MAX);

	server.abort();
}

#[tokio::test]
async fn test_configured_approval_gas_limit() {
	let server = usdc_server().await;
	let mut settings = settings_for(&server);
	settings.gas_limits.approval = 65_000;
	settings.gas_limits.swap = 450_000;

	let provider = builder_for(settings)
		.build_one_inch(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();
	let quote = provider
		.get_quote(&fixtures::usdc_to_dai(NetworkName::Ethereum), &QuoteMetaOptions::default())
		.await
		.unwrap()
		.unwrap();

	assert_eq!(quote.transactions[0].gas_limit, U256::from(65_000u64));
	assert_eq!(quote.swap_transaction().unwrap().gas_limit, U256::from(450_000u64));

	server.abort();
}

#[tokio::test]
async fn test_approval_failure_propagates() {
	let server = usdc_server().await;
	let provider = builder_for(settings_for(&server))
		.with_approval_builder(Arc::new(FailingApprovalBuilder))
		.build_one_inch(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();

	let err = provider
		.get_quote(&fixtures::usdc_to_dai(NetworkName::Ethereum), &QuoteMetaOptions::default())
		.await
		.unwrap_err();

	assert!(matches!(err, ProviderError::ChainClient(_)));

	server.abort();
}
