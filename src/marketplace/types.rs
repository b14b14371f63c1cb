//! Typed marketplace asset records
//!
//! Validating decode boundary for the marketplace JSON: anything that
//! does not fit these shapes surfaces as a request failure instead of
//! flowing downstream as undefined fields.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetsResponse {
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}

/// One asset listing as the marketplace reports it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetRecord {
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub asset_contract: ContractRecord,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub owner: OwnerRecord,
    #[serde(default)]
    pub external_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractRecord {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerRecord {
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_asset_listing() {
        let payload = r#"{
            "assets": [{
                "token_id": "42",
                "name": "Stormy",
                "asset_contract": {"name": "Wizard"},
                "background_color": "a0e7ff",
                "image_url": "https://img.example/42.svg",
                "owner": {"address": "0xCc00000000000000000000000000000000000000"},
                "external_link": "https://market.example/42"
            }]
        }"#;
        let parsed: AssetsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.assets.len(), 1);
        let asset = &parsed.assets[0];
        assert_eq!(asset.token_id, "42");
        assert_eq!(asset.name.as_deref(), Some("Stormy"));
        assert_eq!(asset.asset_contract.name, "Wizard");
        assert_eq!(asset.background_color.as_deref(), Some("a0e7ff"));
    }

    #[test]
    fn tolerates_sparse_listings() {
        let payload = r#"{
            "assets": [{
                "token_id": "7",
                "name": null,
                "asset_contract": {"name": "Wizard"},
                "owner": {"address": "0xC"}
            }]
        }"#;
        let parsed: AssetsResponse = serde_json::from_str(payload).unwrap();
        let asset = &parsed.assets[0];
        assert_eq!(asset.name, None);
        assert_eq!(asset.background_color, None);
        assert_eq!(asset.image_url, None);
        assert_eq!(asset.external_link, None);
    }

    #[test]
    fn missing_assets_array_decodes_empty() {
        let parsed: AssetsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.assets.is_empty());
    }
}
