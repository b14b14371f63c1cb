//! Collectible metadata sources and the startup registry

mod cheezy;
mod mocked;
mod opensea;

pub use cheezy::CheezySource;
pub use mocked::MockedSource;
pub use opensea::OpenSeaSource;

use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

use crate::chain::ChainReader;
use crate::config::AppConfig;
use crate::error::MetadataError;
use crate::marketplace::OpenSeaClient;
use crate::rate_limit::RateLimiter;
use crate::types::Collectible;

/// One backing implementation for collectible metadata
#[async_trait]
pub trait CollectibleMetadataSource: Send + Sync {
    /// Collectibles transferred to `user_address`
    async fn fetch_all_user_collectibles(
        &self,
        user_address: &str,
    ) -> Result<Vec<Collectible>, MetadataError>;

    /// Metadata for an explicit token id list
    async fn fetch_collectibles(
        &self,
        token_ids: &[String],
    ) -> Result<Vec<Collectible>, MetadataError>;
}

/// Registered source implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Opensea,
    Mocked,
    Cheezy,
}

impl FromStr for SourceKind {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "opensea" => Ok(SourceKind::Opensea),
            "mocked" => Ok(SourceKind::Mocked),
            "cheezy" => Ok(SourceKind::Cheezy),
            other => Err(MetadataError::UnknownSource(other.to_string())),
        }
    }
}

/// Build the source named by the configuration.
///
/// The reader is the process-wide chain handle; sources that never
/// touch the chain simply ignore it.
pub fn configured_source(
    config: &AppConfig,
    reader: Arc<dyn ChainReader>,
) -> Result<Box<dyn CollectibleMetadataSource>, MetadataError> {
    let kind: SourceKind = config.collectibles.source.parse()?;
    let network_id = config.chain.network_id;

    let marketplace = || -> Result<Arc<OpenSeaClient>, MetadataError> {
        let limiter = Arc::new(RateLimiter::new(config.collectibles.rps));
        Ok(Arc::new(OpenSeaClient::new(
            network_id,
            config.collectibles.api_key.clone(),
            limiter,
        )?))
    };

    Ok(match kind {
        SourceKind::Opensea => Box::new(OpenSeaSource::new(marketplace()?, network_id)?),
        SourceKind::Mocked => Box::new(MockedSource::new()),
        SourceKind::Cheezy => Box::new(CheezySource::new(
            reader,
            marketplace()?,
            network_id,
            config.collectibles.owner_policy,
        )?),
    })
}
