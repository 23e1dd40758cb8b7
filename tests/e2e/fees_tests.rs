// Fee tiers and aggregator credentials taken from settings

use std::sync::Arc;

use swap_quote::config::ConfigurableValue;
use swap_quote::{
	Address, ClientCache, FeeConfig, NetworkName, ProviderName, QuoteMetaOptions, QuoteProvider,
};

use crate::e2e::{builder_for, settings_for};
use crate::mocks::fixtures::{self, ENKRYPT_REFERRER, ONE_ETH_WEI};
use crate::mocks::{MockChainClient, MockOneInchServer};

async fn server() -> MockOneInchServer {
	MockOneInchServer::with_body(fixtures::swap_body(ONE_ETH_WEI, "1834210000", ONE_ETH_WEI).to_string())
		.await
}

#[tokio::test]
async fn test_wallet_fee_tier_is_applied() {
	let server = server().await;
	let mut settings = settings_for(&server);
	settings.fees.insert(
		ProviderName::OneInch,
		"enkrypt",
		FeeConfig::new(0.00875, ENKRYPT_REFERRER),
	);
	let provider = builder_for(settings)
		.build_one_inch(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();

	provider
		.get_quote(&fixtures::native_to_usdc(), &QuoteMetaOptions::new("enkrypt"))
		.await
		.unwrap();

	let request = server.last_request();
	assert_eq!(request.param("fee").as_deref(), Some("0.875"));
	assert_eq!(
		request.param("referrerAddress").unwrap().parse::<Address>().unwrap(),
		ENKRYPT_REFERRER
	);

	server.abort();
}

#[tokio::test]
async fn test_unknown_wallet_pays_no_fee() {
	let server = server().await;
	let mut settings = settings_for(&server);
	settings.fees.insert(
		ProviderName::OneInch,
		"enkrypt",
		FeeConfig::new(0.00875, ENKRYPT_REFERRER),
	);
	let provider = builder_for(settings)
		.build_one_inch(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();

	provider
		.get_quote(&fixtures::native_to_usdc(), &QuoteMetaOptions::new("mew"))
		.await
		.unwrap();

	let request = server.last_request();
	assert_eq!(request.param("fee").as_deref(), Some("0"));
	assert_eq!(request.param("referrerAddress").as_deref(), Some(""));

	server.abort();
}

#[tokio::test]
async fn test_fee_tier_of_other_provider_is_ignored() {
	let server = server().await;
	let mut settings = settings_for(&server);
	settings.fees.insert(
		ProviderName::Paraswap,
		"enkrypt",
		FeeConfig::new(0.01, ENKRYPT_REFERRER),
	);
	let provider = builder_for(settings)
		.build_one_inch(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();

	provider
		.get_quote(&fixtures::native_to_usdc(), &QuoteMetaOptions::new("enkrypt"))
		.await
		.unwrap();

	assert_eq!(server.last_request().param("fee").as_deref(), Some("0"));

	server.abort();
}

#[tokio::test]
async fn test_api_key_is_sent_as_bearer_token() {
	let server = server().await;
	let mut settings = settings_for(&server);
	settings.aggregator.api_key = Some(ConfigurableValue::from_plain("test-api-key"));
	let provider = builder_for(settings)
		.with_client_cache(ClientCache::new())
		.build_one_inch(Arc::new(MockChainClient::zero()), NetworkName::Ethereum, Vec::new())
		.unwrap();

	provider
		.get_quote(&fixtures::native_to_usdc(), &QuoteMetaOptions::default())
		.await
		.unwrap();

	assert_eq!(
		server.last_request().authorization.as_deref(),
		Some("Bearer test-api-key")
	);

	server.abort();
}

#[tokio::test]
async fn test_unresolved_api_key_fails_build() {
	let mut settings = swap_quote::Settings::default();
	settings.aggregator.api_key = Some(ConfigurableValue::from_env("SWAP_QUOTE_E2E_UNSET_KEY"));

	let result = builder_for(settings).build_one_inch(
		Arc::new(MockChainClient::zero()),
		NetworkName::Ethereum,
		Vec::new(),
	);

	assert!(matches!(result, Err(swap_quote::BuilderError::ApiKey(_))));
}
