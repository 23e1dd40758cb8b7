// Provider registry assembled from settings

use std::sync::Arc;

use swap_quote::{NetworkName, ProviderName, QuoteMetaOptions};

use crate::e2e::{builder_for, settings_for};
use crate::mocks::fixtures::{self, ONE_ETH_WEI};
use crate::mocks::{MockChainClient, MockOneInchServer};

#[tokio::test]
async fn test_registry_fans_out_to_one_inch() {
	let server = MockOneInchServer::with_body(
		fixtures::swap_body(ONE_ETH_WEI, "1834210000", ONE_ETH_WEI).to_string(),
	)
	.await;
	let registry = builder_for(settings_for(&server))
		.build_registry(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();

	assert_eq!(registry.names(), vec![ProviderName::OneInch]);

	let outcomes = registry
		.get_quotes(&fixtures::native_to_usdc(), &QuoteMetaOptions::default())
		.await;

	assert_eq!(outcomes.len(), 1);
	assert_eq!(outcomes[0].provider, ProviderName::OneInch);
	let quote = outcomes[0].result.as_ref().unwrap().as_ref().unwrap();
	assert_eq!(quote.transactions.len(), 1);

	server.abort();
}

#[tokio::test]
async fn test_registry_skips_unsupported_networks() {
	let server = MockOneInchServer::with_body(
		fixtures::swap_body(ONE_ETH_WEI, "1", "0").to_string(),
	)
	.await;
	let registry = builder_for(settings_for(&server))
		.build_registry(Arc::new(MockChainClient::zero()), NetworkName::Avalanche, Vec::new())
		.unwrap();

	let outcomes = registry
		.get_quotes(&fixtures::usdc_to_dai(NetworkName::Avalanche), &QuoteMetaOptions::default())
		.await;

	assert!(outcomes.is_empty());
	assert_eq!(server.hits(), 0);

	server.abort();
}
