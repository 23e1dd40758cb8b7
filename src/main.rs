//! swap-quote CLI
//!
//! Fetches a 1inch swap quote and prints the ordered transactions as JSON.

use std::sync::Arc;

use alloy_provider::ProviderBuilder;
use clap::{Args, Parser, Subcommand};
use swap_quote::{
	init_tracing_from_settings, load_config_from, log_service_info, log_settings_summary,
	Address, ChainClient, NetworkName, OneInchProvider, QuoteMetaOptions, QuoteProvider,
	QuoteRequest, RpcChainClient, SwapQuoteBuilder, Token, U256,
};
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "swap-quote", version, about = "Swap quotes from the 1inch aggregator")]
struct Cli {
	/// Settings file, without or with extension
	#[arg(long, env = "CONFIG_PATH", default_value = swap_quote::config::DEFAULT_CONFIG_PATH)]
	config: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Request a quote and print the resulting transactions
	Quote(QuoteArgs),
	/// List the networks 1inch quotes on
	Networks,
}

#[derive(Debug, Args)]
struct QuoteArgs {
	/// Source network tag (ETH, BSC, MATIC, OP, ...)
	#[arg(long)]
	network: NetworkName,
	/// Destination network, defaults to the source network
	#[arg(long)]
	to_network: Option<NetworkName>,
	#[arg(long)]
	from_token: Address,
	#[arg(long)]
	to_token: Address,
	/// Amount of the source token in minor units
	#[arg(long)]
	amount: U256,
	#[arg(long)]
	from_address: Address,
	/// Slippage tolerance in percent
	#[arg(long)]
	slippage: Option<String>,
	/// Wallet identifier used to select the fee tier
	#[arg(long, default_value = "")]
	wallet: String,
	/// Approve the maximum amount instead of the exact swap amount
	#[arg(long)]
	infinite_approval: bool,
	/// JSON-RPC endpoint for allowance reads, overrides the settings file
	#[arg(long)]
	rpc_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let cli = Cli::parse();

	let settings = load_config_from(&cli.config)?;
	init_tracing_from_settings(&settings)?;
	log_service_info();
	log_settings_summary(&settings);

	match cli.command {
		Command::Networks => {
			let networks: Vec<String> = OneInchProvider::supported_networks()
				.map(|network| network.to_string())
				.collect();
			println!("{}", serde_json::to_string_pretty(&networks)?);
		},
		Command::Quote(args) => {
			let builder = SwapQuoteBuilder::new().with_settings(settings);
			run_quote(&builder, args).await?;
		},
	}

	Ok(())
}

async fn run_quote(
	builder: &SwapQuoteBuilder,
	args: QuoteArgs,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let rpc_url = match args.rpc_url {
		Some(url) => url,
		None => {
			let endpoint = builder
				.settings()
				.rpc_endpoint(args.network)
				.ok_or_else(|| format!("No RPC endpoint configured for {}", args.network))?;
			Url::parse(endpoint)?
		},
	};
	debug!("Using RPC endpoint {}", rpc_url);

	let chain_client: Arc<dyn ChainClient> =
		Arc::new(RpcChainClient::new(ProviderBuilder::new().connect_http(rpc_url)));

	let to_network = args.to_network.unwrap_or(args.network);
	let request = QuoteRequest {
		from_token: Token::new(args.from_token, args.network),
		to_token: Token::new(args.to_token, to_network),
		from_network: args.network,
		to_network,
		amount: args.amount,
		from_address: args.from_address,
	};

	let mut meta = QuoteMetaOptions::new(args.wallet).with_infinite_approval(args.infinite_approval);
	if let Some(slippage) = args.slippage {
		meta = meta.with_slippage(slippage);
	}

	let provider = builder.build_one_inch(chain_client, args.network, Vec::new())?;
	let quote = provider.get_quote(&request, &meta).await?;

	match &quote {
		Some(quote) => info!("Quote ready with {} transactions", quote.transactions.len()),
		None => info!("No quote available"),
	}
	println!("{}", serde_json::to_string_pretty(&quote)?);

	Ok(())
}
