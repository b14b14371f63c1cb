//! On-chain owner / affinity / power resolution
//!
//! Both game contracts expose the same stats accessor; the collectible
//! contract answers with the owner, the tournament contract with the
//! `(affinity, power)` pair.

use ethers::abi::{self, ParamType, Token};
use ethers::types::{Address, Bytes, U256};
use futures_util::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashMap;

use super::{addresses, ChainReader};
use crate::error::MetadataError;
use crate::types::{WizardProps, WizardPropsMap};

/// Selector of the stats accessor shared by both contracts
const WIZARD_STATS_SELECTOR: [u8; 4] = [0xfa, 0xc8, 0xea, 0xfc];

/// Power arrives scaled by 10^12 on chain
const POWER_SCALE_EXP: usize = 12;

/// How many token ids resolve against the node at once. There is no
/// ordering dependency between ids, only the assembled map matters.
const LOOKUP_CONCURRENCY: usize = 4;

/// Selector plus the token id as one 256-bit word
pub fn encode_stats_call(token_id: &str) -> Result<Bytes, MetadataError> {
    let id = U256::from_dec_str(token_id)
        .map_err(|e| MetadataError::DecodeError(format!("invalid token id '{token_id}': {e}")))?;
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&WIZARD_STATS_SELECTOR);
    let mut word = [0u8; 32];
    id.to_big_endian(&mut word);
    data.extend_from_slice(&word);
    Ok(data.into())
}

fn decode_owner(raw: &[u8]) -> Result<Address, MetadataError> {
    let tokens = abi::decode(&[ParamType::Address], raw)
        .map_err(|e| MetadataError::DecodeError(format!("owner payload: {e}")))?;
    match tokens.into_iter().next() {
        Some(Token::Address(addr)) => Ok(addr),
        _ => Err(MetadataError::DecodeError(
            "owner payload carried no address".to_string(),
        )),
    }
}

fn decode_affinity_power(raw: &[u8]) -> Result<(U256, U256), MetadataError> {
    let mut tokens = abi::decode(&[ParamType::Uint(256), ParamType::Uint(256)], raw)
        .map_err(|e| MetadataError::DecodeError(format!("stats payload: {e}")))?
        .into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(Token::Uint(affinity)), Some(Token::Uint(power))) => Ok((affinity, power)),
        _ => Err(MetadataError::DecodeError(
            "stats payload carried no (affinity, power) pair".to_string(),
        )),
    }
}

/// Render raw on-chain power as a decimal string, truncating division
fn scale_power(raw: U256) -> String {
    (raw / U256::exp10(POWER_SCALE_EXP)).to_string()
}

/// Resolve `{owner, affinity, power}` for each token id.
///
/// Ids fan out with bounded concurrency and join into one map; any
/// single failure aborts the whole batch. An empty id list returns an
/// empty map without touching the node.
pub async fn resolve_properties(
    reader: &dyn ChainReader,
    network_id: u64,
    token_ids: &[String],
) -> Result<WizardPropsMap, MetadataError> {
    if token_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let collectible = addresses::collectible_address(network_id)?;
    let tournament = addresses::tournament_address(network_id)?;

    tracing::debug!(count = token_ids.len(), "resolving wizard stats on chain");

    stream::iter(token_ids.iter().cloned())
        .map(|token_id| async move {
            let props = resolve_one(reader, collectible, tournament, &token_id).await?;
            Ok::<_, MetadataError>((token_id, props))
        })
        .buffer_unordered(LOOKUP_CONCURRENCY)
        .try_collect()
        .await
}

async fn resolve_one(
    reader: &dyn ChainReader,
    collectible: Address,
    tournament: Address,
    token_id: &str,
) -> Result<WizardProps, MetadataError> {
    let payload = encode_stats_call(token_id)?;

    let owner_raw = reader.call(collectible, payload.clone()).await?;
    let owner = decode_owner(&owner_raw)?;

    let stats_raw = reader.call(tournament, payload).await?;
    let (affinity, power) = decode_affinity_power(&stats_raw)?;

    Ok(WizardProps {
        power: scale_power(power),
        affinity: affinity.to_string(),
        owner: format!("{owner:#x}"),
    })
}
