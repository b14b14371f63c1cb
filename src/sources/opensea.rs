//! Marketplace-only source
//!
//! Answers both entry points straight from the marketplace API: the
//! per-user path uses the owner query instead of scanning chain logs,
//! and game stats are never resolved.

use async_trait::async_trait;
use std::sync::Arc;

use super::CollectibleMetadataSource;
use crate::chain::addresses;
use crate::error::MetadataError;
use crate::mapper;
use crate::marketplace::MarketplaceApi;
use crate::types::Collectible;

pub struct OpenSeaSource {
    marketplace: Arc<dyn MarketplaceApi>,
    contract: String,
}

impl OpenSeaSource {
    pub fn new(
        marketplace: Arc<dyn MarketplaceApi>,
        network_id: u64,
    ) -> Result<Self, MetadataError> {
        let contract = addresses::collectible_address(network_id)?;
        Ok(Self {
            marketplace,
            contract: format!("{contract:#x}"),
        })
    }
}

#[async_trait]
impl CollectibleMetadataSource for OpenSeaSource {
    async fn fetch_all_user_collectibles(
        &self,
        user_address: &str,
    ) -> Result<Vec<Collectible>, MetadataError> {
        let assets = self
            .marketplace
            .assets_by_owner(&self.contract, user_address)
            .await?;
        Ok(assets
            .iter()
            .map(|asset| mapper::merge(asset, None))
            .collect())
    }

    async fn fetch_collectibles(
        &self,
        token_ids: &[String],
    ) -> Result<Vec<Collectible>, MetadataError> {
        let assets = self
            .marketplace
            .assets_by_token_ids(&self.contract, token_ids)
            .await?;
        Ok(assets
            .iter()
            .map(|asset| mapper::merge(asset, None))
            .collect())
    }
}
