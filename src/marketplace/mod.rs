//! OpenSea-compatible marketplace client
//!
//! Builds asset query URLs, applies the rate limiter and parses JSON
//! listings. No pagination: whatever the marketplace returns in one
//! page is the result.

pub mod types;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::MetadataError;
use crate::rate_limit::RateLimiter;
use self::types::{AssetRecord, AssetsResponse};

/// Marketplace base URLs per network id (mainnet, rinkeby, and the
/// local launch-kit chain which queries mainnet data)
const ENDPOINTS: &[(u64, &str)] = &[
    (1, "https://api.opensea.io/api/v1"),
    (4, "https://rinkeby-api.opensea.io/api/v1"),
    (50, "https://api.opensea.io/api/v1"),
];

pub fn endpoint_for_network(network_id: u64) -> Result<&'static str, MetadataError> {
    ENDPOINTS
        .iter()
        .find(|(id, _)| *id == network_id)
        .map(|(_, url)| *url)
        .ok_or(MetadataError::UnsupportedNetwork(network_id))
}

/// One `token_ids` parameter per id, matching the marketplace's repeated
/// query parameter convention
pub fn token_ids_query(contract: &str, token_ids: &[String]) -> String {
    let ids = token_ids
        .iter()
        .map(|id| format!("token_ids={id}"))
        .collect::<Vec<_>>()
        .join("&");
    if ids.is_empty() {
        format!("asset_contract_address={contract}")
    } else {
        format!("asset_contract_address={contract}&{ids}")
    }
}

pub fn owner_query(contract: &str, owner: &str) -> String {
    format!("asset_contract_address={contract}&owner={owner}")
}

/// Descriptive asset metadata lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Assets for an explicit id list on one contract
    async fn assets_by_token_ids(
        &self,
        contract: &str,
        token_ids: &[String],
    ) -> Result<Vec<AssetRecord>, MetadataError>;

    /// Assets on one contract currently held by `owner`
    async fn assets_by_owner(
        &self,
        contract: &str,
        owner: &str,
    ) -> Result<Vec<AssetRecord>, MetadataError>;
}

/// Production client against the OpenSea REST API
pub struct OpenSeaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    limiter: Arc<RateLimiter>,
}

impl OpenSeaClient {
    pub fn new(
        network_id: u64,
        api_key: String,
        limiter: Arc<RateLimiter>,
    ) -> Result<Self, MetadataError> {
        let base_url = endpoint_for_network(network_id)?.to_string();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            client,
            base_url,
            api_key,
            limiter,
        })
    }

    fn assets_url(&self, query: &str) -> String {
        format!("{}/assets?{}", self.base_url, query)
    }

    async fn fetch_assets(&self, url: &str) -> Result<Vec<AssetRecord>, MetadataError> {
        self.limiter.acquire().await;
        tracing::debug!(url = %url, "fetching marketplace assets");

        // The key header rides on every request, empty when unset
        let response = self
            .client
            .get(url)
            .header("X-API-KEY", self.api_key.as_str())
            .send()
            .await
            .map_err(|e| MetadataError::MarketplaceRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetadataError::MarketplaceRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let parsed: AssetsResponse = response.json().await.map_err(|e| {
            MetadataError::MarketplaceRequestFailed(format!("invalid assets payload: {e}"))
        })?;

        Ok(parsed.assets)
    }
}

#[async_trait]
impl MarketplaceApi for OpenSeaClient {
    async fn assets_by_token_ids(
        &self,
        contract: &str,
        token_ids: &[String],
    ) -> Result<Vec<AssetRecord>, MetadataError> {
        let url = self.assets_url(&token_ids_query(contract, token_ids));
        self.fetch_assets(&url).await
    }

    async fn assets_by_owner(
        &self,
        contract: &str,
        owner: &str,
    ) -> Result<Vec<AssetRecord>, MetadataError> {
        let url = self.assets_url(&owner_query(contract, owner));
        self.fetch_assets(&url).await
    }
}
