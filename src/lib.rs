//! Wizmeta Library
//!
//! Collectible metadata adapter for an on-chain wizard game: merges
//! Transfer event logs, per-wizard stat calls and marketplace asset
//! records into normalized collectibles.

pub mod chain;
pub mod config;
pub mod error;
pub mod mapper;
pub mod marketplace;
pub mod rate_limit;
pub mod sources;
pub mod types;
