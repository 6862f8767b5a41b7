//! Read access to the node's authoritative chain.
//!
//! The RPC layer only reads through [`Ledger`]. Every call may fail independently and two calls
//! carry no consistency guarantee between them.

pub use in_memory::{InMemoryLedger, LedgerError};

mod in_memory;

use {
    crate::{
        block::Block,
        transaction::{Transaction, TxOutput},
    },
    noderpc_shared::primitives::B256,
    std::fmt::Debug,
};

/// The hash and height of the current best block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainTip {
    pub hash: B256,
    pub height: u32,
}

pub trait Ledger: Send + Sync {
    /// The associated error type for the backing storage access operation.
    type Err: Debug;

    fn current_tip(&self) -> Result<ChainTip, Self::Err>;

    fn block_by_height(&self, height: u32) -> Result<Option<Block>, Self::Err>;

    fn block_by_hash(&self, hash: &B256) -> Result<Option<Block>, Self::Err>;

    fn hash_at_height(&self, height: u32) -> Result<Option<B256>, Self::Err>;

    fn transaction_by_hash(&self, hash: &B256) -> Result<Option<Transaction>, Self::Err>;

    /// Returns output `index` of transaction `hash` unless it does not exist or has been spent.
    fn unspent_output(&self, hash: &B256, index: u16) -> Result<Option<TxOutput>, Self::Err>;
}

impl<T: Ledger + ?Sized> Ledger for std::sync::Arc<T> {
    type Err = T::Err;

    fn current_tip(&self) -> Result<ChainTip, Self::Err> {
        (**self).current_tip()
    }

    fn block_by_height(&self, height: u32) -> Result<Option<Block>, Self::Err> {
        (**self).block_by_height(height)
    }

    fn block_by_hash(&self, hash: &B256) -> Result<Option<Block>, Self::Err> {
        (**self).block_by_hash(hash)
    }

    fn hash_at_height(&self, height: u32) -> Result<Option<B256>, Self::Err> {
        (**self).hash_at_height(height)
    }

    fn transaction_by_hash(&self, hash: &B256) -> Result<Option<Transaction>, Self::Err> {
        (**self).transaction_by_hash(hash)
    }

    fn unspent_output(&self, hash: &B256, index: u16) -> Result<Option<TxOutput>, Self::Err> {
        (**self).unspent_output(hash, index)
    }
}
