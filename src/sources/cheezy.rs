//! Chain-backed source for the wizard collection
//!
//! Scans the full Transfer history for the caller's address, resolves
//! per-wizard stats on chain and decorates the result with marketplace
//! metadata.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::CollectibleMetadataSource;
use crate::chain::{addresses, decoder, properties, ChainReader};
use crate::error::MetadataError;
use crate::mapper;
use crate::marketplace::MarketplaceApi;
use crate::types::{Collectible, OwnerPolicy};

pub struct CheezySource {
    reader: Arc<dyn ChainReader>,
    marketplace: Arc<dyn MarketplaceApi>,
    network_id: u64,
    /// Collectible contract rendered for marketplace queries
    contract: String,
    owner_policy: OwnerPolicy,
}

impl CheezySource {
    pub fn new(
        reader: Arc<dyn ChainReader>,
        marketplace: Arc<dyn MarketplaceApi>,
        network_id: u64,
        owner_policy: OwnerPolicy,
    ) -> Result<Self, MetadataError> {
        let contract = addresses::collectible_address(network_id)?;
        Ok(Self {
            reader,
            marketplace,
            network_id,
            contract: format!("{contract:#x}"),
            owner_policy,
        })
    }

    /// Token ids ever transferred to `user_address`, in transfer order,
    /// repeats kept
    async fn owned_token_ids(&self, user_address: &str) -> Result<Vec<String>, MetadataError> {
        let contract = addresses::collectible_address(self.network_id)?;
        let latest = self.reader.latest_block_number().await?;
        let logs = self.reader.transfer_logs(contract, 0, latest).await?;
        let events = decoder::decode_transfer_logs(&logs);
        Ok(decoder::owned_token_ids(&events, user_address))
    }
}

#[async_trait]
impl CollectibleMetadataSource for CheezySource {
    async fn fetch_all_user_collectibles(
        &self,
        user_address: &str,
    ) -> Result<Vec<Collectible>, MetadataError> {
        let token_ids = self.owned_token_ids(user_address).await?;
        info!(user = %user_address, tokens = token_ids.len(), "🧙 resolved owned wizard ids");

        match self.owner_policy {
            OwnerPolicy::ChainStats => {
                let props =
                    properties::resolve_properties(self.reader.as_ref(), self.network_id, &token_ids)
                        .await?;
                let assets = self
                    .marketplace
                    .assets_by_token_ids(&self.contract, &token_ids)
                    .await?;
                assets
                    .iter()
                    .map(|asset| mapper::merge_expected(asset, &props))
                    .collect()
            }
            OwnerPolicy::CallerAddress => {
                let assets = self
                    .marketplace
                    .assets_by_token_ids(&self.contract, &token_ids)
                    .await?;
                Ok(assets
                    .iter()
                    .map(|asset| mapper::merge_substituted(asset, user_address))
                    .collect())
            }
        }
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
