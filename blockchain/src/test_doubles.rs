//! Collaborators whose every call fails, for exercising error paths of their consumers.

use {
    crate::{
        block::Block,
        ledger::{ChainTip, Ledger},
        node::{Node, NodeVersion, Relayable},
        transaction::{Transaction, TxOutput},
    },
    noderpc_shared::primitives::B256,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable;

#[derive(Debug, Default)]
pub struct UnavailableLedger;

impl Ledger for UnavailableLedger {
    type Err = Unavailable;

    fn current_tip(&self) -> Result<ChainTip, Self::Err> {
        Err(Unavailable)
    }

    fn block_by_height(&self, _: u32) -> Result<Option<Block>, Self::Err> {
        Err(Unavailable)
    }

    fn block_by_hash(&self, _: &B256) -> Result<Option<Block>, Self::Err> {
        Err(Unavailable)
    }

    fn hash_at_height(&self, _: u32) -> Result<Option<B256>, Self::Err> {
        Err(Unavailable)
    }

    fn transaction_by_hash(&self, _: &B256) -> Result<Option<Transaction>, Self::Err> {
        Err(Unavailable)
    }

    fn unspent_output(&self, _: &B256, _: u16) -> Result<Option<TxOutput>, Self::Err> {
        Err(Unavailable)
    }
}

#[derive(Debug, Default)]
pub struct UnavailableNode;

impl Node for UnavailableNode {
    type Err = Unavailable;

    fn peer_count(&self) -> Result<usize, Self::Err> {
        Err(Unavailable)
    }

    fn pending_transactions(&self) -> Result<Vec<Transaction>, Self::Err> {
        Err(Unavailable)
    }

    fn pending_transaction_by_hash(&self, _: &B256) -> Result<Option<Transaction>, Self::Err> {
        Err(Unavailable)
    }

    fn relay(&self, _: Relayable) -> Result<bool, Self::Err> {
        Err(Unavailable)
    }

    fn version(&self) -> NodeVersion {
        NodeVersion {
            port: 0,
            nonce: 0,
            user_agent: String::new(),
        }
    }
}
