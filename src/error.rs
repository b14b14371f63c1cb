//! Error taxonomy for the metadata adapter
//!
//! Every variant is fatal to the enclosing fetch call: nothing is retried
//! or downgraded to a partial result. Callers decide their own
//! user-facing behavior.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// Node unreachable or a transport-level RPC failure
    #[error("chain node unavailable: {0}")]
    ChainUnavailable(String),

    /// The node accepted the request but the contract call reverted
    #[error("chain call reverted: {0}")]
    ChainCallReverted(String),

    /// Non-success HTTP status or malformed JSON from the marketplace
    #[error("marketplace request failed: {0}")]
    MarketplaceRequestFailed(String),

    /// A log or ABI payload did not decode against the registered shape
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Configuration named a source that is not registered
    #[error("unknown collectibles source '{0}'")]
    UnknownSource(String),

    /// On-chain properties were expected for a token id but never resolved
    #[error("missing on-chain properties for token id {0}")]
    MissingProperties(String),

    /// Network id with no marketplace endpoint or contract deployment
    #[error("unsupported network id {0}")]
    UnsupportedNetwork(u64),
}
