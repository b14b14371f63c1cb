//! Chain access: latest block, Transfer logs and raw contract calls

pub mod addresses;
pub mod decoder;
pub mod properties;

use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider, RpcError};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, Bytes, Filter, Log, TransactionRequest};
use std::sync::Arc;

use crate::error::MetadataError;

/// Read-only access to the chain needed by the collectible sources
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Current chain head height
    async fn latest_block_number(&self) -> Result<u64, MetadataError>;

    /// Transfer logs emitted by `contract` over `[from_block, to_block]`
    async fn transfer_logs(
        &self,
        contract: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<Log>, MetadataError>;

    /// Raw read-only contract call
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, MetadataError>;
}

/// Production reader over a caller-owned JSON-RPC provider.
///
/// The provider is constructed once at process start and injected here;
/// the reader never creates or caches a connection of its own.
pub struct RpcChainReader {
    provider: Arc<Provider<Http>>,
}

impl RpcChainReader {
    pub fn new(provider: Arc<Provider<Http>>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn latest_block_number(&self) -> Result<u64, MetadataError> {
        let block = self
            .provider
            .get_block_number()
            .await
            .map_err(|e| MetadataError::ChainUnavailable(e.to_string()))?;
        Ok(block.as_u64())
    }

    async fn transfer_logs(
        &self,
        contract: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<Log>, MetadataError> {
        let filter = Filter::new()
            .address(contract)
            .topic0(decoder::transfer_topic())
            .from_block(from_block)
            .to_block(to_block);

        self.provider
            .get_logs(&filter)
            .await
            .map_err(|e| MetadataError::ChainUnavailable(e.to_string()))
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, MetadataError> {
        let tx: TypedTransaction = TransactionRequest::new().to(to).data(data).into();
        self.provider.call(&tx, None).await.map_err(|e| {
            // An error *response* means the node processed and rejected the call
            if e.as_error_response().is_some() {
                MetadataError::ChainCallReverted(e.to_string())
            } else {
                MetadataError::ChainUnavailable(e.to_string())
            }
        })
    }
}
