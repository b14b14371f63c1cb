//! Wizmeta CLI
//!
//! Fetches collectibles through the configured metadata source and
//! prints them as JSON.
//!
//! Usage:
//!   wizmeta owner <address>
//!   wizmeta tokens <id> [<id>...]

use anyhow::{bail, Context, Result};
use ethers::providers::{Http, Provider};
use std::sync::Arc;
use tracing::info;

use wizmeta::chain::RpcChainReader;
use wizmeta::config::AppConfig;
use wizmeta::sources::{configured_source, CollectibleMetadataSource};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;
    info!("starting wizmeta ({})", config.digest());

    let provider = Provider::<Http>::try_from(config.chain.rpc_url.as_str())
        .context("Failed to construct JSON-RPC provider")?;
    let reader = Arc::new(RpcChainReader::new(Arc::new(provider)));
    let source = configured_source(&config, reader)?;

    let mut args = std::env::args().skip(1);
    let collectibles = match args.next().as_deref() {
        Some("owner") => {
            let address = args.next().context("usage: wizmeta owner <address>")?;
            source.fetch_all_user_collectibles(&address).await?
        }
        Some("tokens") => {
            let ids: Vec<String> = args.collect();
            if ids.is_empty() {
                bail!("usage: wizmeta tokens <id> [<id>...]");
            }
            source.fetch_collectibles(&ids).await?
        }
        _ => bail!("usage: wizmeta <owner <address> | tokens <id>...>"),
    };

    info!(count = collectibles.len(), "✅ collectibles fetched");
    println!("{}", serde_json::to_string_pretty(&collectibles)?);

    Ok(())
}
