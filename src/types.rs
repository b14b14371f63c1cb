//! Core types shared across the adapter

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Marketplace listing attached to a collectible.
///
/// Reserved: none of the shipped sources populate it, every merge leaves
/// the slot at `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleOrder {
    pub maker: String,
    pub price: String,
}

/// Normalized record describing one owned collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub token_id: String,
    /// Display name; falls back to `"<contract> - #<token id>"`
    pub name: String,
    /// Hex color prefixed with `#`, empty when the marketplace has none
    pub color: String,
    pub image: String,
    /// Lower-cased when derived from chain data, verbatim otherwise
    pub current_owner: String,
    pub asset_url: String,
    pub description: String,
    pub order: Option<CollectibleOrder>,
}

/// Game stats resolved from the chain for one token id
#[derive(Debug, Clone, PartialEq)]
pub struct WizardProps {
    /// Decimal string, raw on-chain power divided by 10^12
    pub power: String,
    pub affinity: String,
    /// Address string as rendered from the chain, not lower-cased here
    pub owner: String,
}

/// Token id -> resolved stats, built once per fetch and discarded after merge
pub type WizardPropsMap = HashMap<String, WizardProps>;

/// Who is authoritative for `current_owner` on the per-user fetch path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerPolicy {
    /// Resolve owner and power from the stats contracts; a token without
    /// resolved stats is an error
    ChainStats,
    /// Substitute the caller's address and skip stat calls entirely
    CallerAddress,
}
