//! Canned source for offline development

use async_trait::async_trait;

use super::CollectibleMetadataSource;
use crate::error::MetadataError;
use crate::types::Collectible;

/// Serves deterministic collectibles without any network access
pub struct MockedSource;

impl MockedSource {
    pub fn new() -> Self {
        Self
    }

    fn canned(token_id: &str, owner: &str) -> Collectible {
        Collectible {
            token_id: token_id.to_string(),
            name: format!("Mocked Wizard - #{token_id}"),
            color: "#c0ffee".to_string(),
            image: format!("https://mock.example/wizards/{token_id}.svg"),
            current_owner: owner.to_string(),
            asset_url: format!("https://mock.example/assets/{token_id}"),
            description: format!("power: {token_id}"),
            order: None,
        }
    }
}

impl Default for MockedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectibleMetadataSource for MockedSource {
    async fn fetch_all_user_collectibles(
        &self,
        user_address: &str,
    ) -> Result<Vec<Collectible>, MetadataError> {
        Ok(["1", "2", "3"]
            .iter()
            .map(|id| Self::canned(id, user_address))
            .collect())
    }

    async fn fetch_collectibles(
        &self,
        token_ids: &[String],
    ) -> Result<Vec<Collectible>, MetadataError> {
        Ok(token_ids
            .iter()
            .map(|id| Self::canned(id, "0x0000000000000000000000000000000000000000"))
            .collect())
    }
}
