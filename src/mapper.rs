//! Merges marketplace assets with on-chain stats into Collectibles

use crate::error::MetadataError;
use crate::marketplace::types::AssetRecord;
use crate::types::{Collectible, WizardProps, WizardPropsMap};

/// Merge one marketplace asset with optional on-chain stats.
///
/// With stats present, `current_owner` is the chain-resolved owner
/// lower-cased and the description carries the synthesized power line.
/// Without stats, the marketplace owner rides through verbatim and the
/// description repeats the raw asset name.
pub fn merge(asset: &AssetRecord, props: Option<&WizardProps>) -> Collectible {
    let name = match asset.name.as_deref() {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!("{} - #{}", asset.asset_contract.name, asset.token_id),
    };
    let color = match asset.background_color.as_deref() {
        Some(c) if !c.is_empty() => format!("#{c}"),
        _ => String::new(),
    };
    let (current_owner, description) = match props {
        Some(p) => (p.owner.to_lowercase(), format!("power: {}", p.power)),
        None => (
            asset.owner.address.clone(),
            asset.name.clone().unwrap_or_default(),
        ),
    };

    Collectible {
        token_id: asset.token_id.clone(),
        name,
        color,
        image: asset.image_url.clone().unwrap_or_default(),
        current_owner,
        asset_url: asset.external_link.clone().unwrap_or_default(),
        description,
        order: None,
    }
}

/// Per-user fetch path with chain stats: every asset must have a
/// resolved entry, a missing one fails fast instead of defaulting.
pub fn merge_expected(
    asset: &AssetRecord,
    props: &WizardPropsMap,
) -> Result<Collectible, MetadataError> {
    let props = props
        .get(&asset.token_id)
        .ok_or_else(|| MetadataError::MissingProperties(asset.token_id.clone()))?;
    Ok(merge(asset, Some(props)))
}

/// Legacy per-user path: the caller's address substitutes for the owner
/// and no stats are consulted.
pub fn merge_substituted(asset: &AssetRecord, user_address: &str) -> Collectible {
    Collectible {
        current_owner: user_address.to_string(),
        ..merge(asset, None)
    }
}
