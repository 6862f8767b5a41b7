//! The peer-to-peer side of the node: its connections, pending transaction pool and relay.

pub use in_memory::InMemoryNode;

mod in_memory;

use {
    crate::{block::Block, transaction::Transaction},
    noderpc_shared::primitives::B256,
    std::fmt::Debug,
};

/// An inventory item offered to the node for propagation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relayable {
    Transaction(Transaction),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NodeVersion {
    /// The port the node accepts peer connections on.
    pub port: u16,
    /// Random per-process identifier used to detect self-connections.
    pub nonce: u32,
    #[serde(rename = "useragent")]
    pub user_agent: String,
}

pub trait Node: Send + Sync {
    type Err: Debug;

    fn peer_count(&self) -> Result<usize, Self::Err>;

    /// Pending transactions in pool order.
    fn pending_transactions(&self) -> Result<Vec<Transaction>, Self::Err>;

    fn pending_transaction_by_hash(&self, hash: &B256) -> Result<Option<Transaction>, Self::Err>;

    /// Offers `item` to the network. Returns whether it was accepted for propagation.
    fn relay(&self, item: Relayable) -> Result<bool, Self::Err>;

    fn version(&self) -> NodeVersion;
}

impl<T: Node + ?Sized> Node for std::sync::Arc<T> {
    type Err = T::Err;

    fn peer_count(&self) -> Result<usize, Self::Err> {
        (**self).peer_count()
    }

    fn pending_transactions(&self) -> Result<Vec<Transaction>, Self::Err> {
        (**self).pending_transactions()
    }

    fn pending_transaction_by_hash(&self, hash: &B256) -> Result<Option<Transaction>, Self::Err> {
        (**self).pending_transaction_by_hash(hash)
    }

    fn relay(&self, item: Relayable) -> Result<bool, Self::Err> {
        (**self).relay(item)
    }

    fn version(&self) -> NodeVersion {
        (**self).version()
    }
}
