use {
    crate::{
        block::Block,
        ledger::{ChainTip, Ledger},
        transaction::{OutPoint, Transaction, TxOutput},
    },
    noderpc_shared::primitives::B256,
    parking_lot::RwLock,
    std::{
        collections::{HashMap, HashSet},
        convert::Infallible,
    },
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Block index {given} does not extend the chain at height {height}")]
    NotNextIndex { height: u32, given: u32 },
    #[error("Block does not reference the tip {tip} as its parent")]
    UnknownParent { tip: B256 },
    #[error("Block merkle root does not match its transactions")]
    MerkleMismatch,
}

/// Location of a transaction inside the chain.
#[derive(Debug, Clone, Copy)]
struct TransactionLocation {
    height: u32,
    position: usize,
}

#[derive(Debug, Default)]
struct LedgerMemory {
    blocks: Vec<Block>,
    hashes: HashMap<B256, u32>,
    transactions: HashMap<B256, TransactionLocation>,
    spent: HashSet<OutPoint>,
}

impl LedgerMemory {
    fn transaction(&self, hash: &B256) -> Option<&Transaction> {
        let location = self.transactions.get(hash)?;
        self.blocks
            .get(location.height as usize)?
            .transactions
            .get(location.position)
    }
}

/// A ledger that keeps the whole chain in memory.
///
/// Blocks are only accepted when they extend the current tip. Outputs referenced by inputs of
/// accepted transactions are marked as spent.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    memory: RwLock<LedgerMemory>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genesis(genesis: Block) -> Result<Self, LedgerError> {
        let ledger = Self::new();
        ledger.add_block(genesis)?;
        Ok(ledger)
    }

    pub fn height(&self) -> Option<u32> {
        let memory = self.memory.read();
        memory.blocks.len().checked_sub(1).map(|h| h as u32)
    }

    pub fn contains_transaction(&self, hash: &B256) -> bool {
        self.memory.read().transactions.contains_key(hash)
    }

    pub fn add_block(&self, block: Block) -> Result<B256, LedgerError> {
        let mut memory = self.memory.write();

        match memory.blocks.last() {
            None if block.index() != 0 => {
                return Err(LedgerError::NotNextIndex {
                    height: 0,
                    given: block.index(),
                })
            }
            None => {}
            Some(tip) => {
                let height = tip.index();
                if Some(block.index()) != height.checked_add(1) {
                    return Err(LedgerError::NotNextIndex {
                        height,
                        given: block.index(),
                    });
                }
                let tip_hash = tip.hash();
                if block.header.prev_hash != tip_hash {
                    return Err(LedgerError::UnknownParent { tip: tip_hash });
                }
            }
        }
        if !block.has_valid_merkle_root() {
            return Err(LedgerError::MerkleMismatch);
        }

        let hash = block.hash();
        let height = block.index();
        for (position, tx) in block.transactions.iter().enumerate() {
            memory
                .transactions
                .insert(tx.hash(), TransactionLocation { height, position });
            memory.spent.extend(tx.spends().copied());
        }
        memory.hashes.insert(hash, height);
        memory.blocks.push(block);
        tracing::debug!(%hash, height, "Block added to ledger");

        Ok(hash)
    }
}

impl Ledger for InMemoryLedger {
    type Err = Infallible;

    fn current_tip(&self) -> Result<ChainTip, Self::Err> {
        let memory = self.memory.read();
        // An empty ledger reports the zero hash at height zero.
        Ok(memory
            .blocks
            .last()
            .map(|block| ChainTip {
                hash: block.hash(),
                height: block.index(),
            })
            .unwrap_or(ChainTip {
                hash: B256::ZERO,
                height: 0,
            }))
    }

    fn block_by_height(&self, height: u32) -> Result<Option<Block>, Self::Err> {
        Ok(self.memory.read().blocks.get(height as usize).cloned())
    }

    fn block_by_hash(&self, hash: &B256) -> Result<Option<Block>, Self::Err> {
        let memory = self.memory.read();
        Ok(memory
            .hashes
            .get(hash)
            .and_then(|height| memory.blocks.get(*height as usize))
            .cloned())
    }

    fn hash_at_height(&self, height: u32) -> Result<Option<B256>, Self::Err> {
        Ok(self
            .memory
            .read()
            .blocks
            .get(height as usize)
            .map(Block::hash))
    }

    fn transaction_by_hash(&self, hash: &B256) -> Result<Option<Transaction>, Self::Err> {
        Ok(self.memory.read().transaction(hash).cloned())
    }

    fn unspent_output(&self, hash: &B256, index: u16) -> Result<Option<TxOutput>, Self::Err> {
        let memory = self.memory.read();
        if memory.spent.contains(&OutPoint::new(*hash, index)) {
            return Ok(None);
        }
        Ok(memory
            .transaction(hash)
            .and_then(|tx| tx.outputs.get(index as usize))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{block::Header, genesis},
        noderpc_shared::primitives::Address,
    };

    fn next_block(parent: &Block, transactions: Vec<Transaction>) -> Block {
        Block::new(
            Header {
                prev_hash: parent.hash(),
                index: parent.index() + 1,
                timestamp: parent.header.timestamp + 15,
                ..Default::default()
            },
            transactions,
        )
        .with_merkle_root()
    }

    #[test]
    fn test_genesis_is_tip_at_height_zero() {
        let genesis = genesis::block();
        let ledger = InMemoryLedger::with_genesis(genesis.clone()).unwrap();

        let tip = ledger.current_tip().unwrap();

        assert_eq!(tip.height, 0);
        assert_eq!(tip.hash, genesis.hash());
        assert_eq!(ledger.hash_at_height(0).unwrap(), Some(genesis.hash()));
        assert_eq!(ledger.hash_at_height(1).unwrap(), None);
    }

    #[test]
    fn test_block_not_extending_tip_is_rejected() {
        let genesis = genesis::block();
        let ledger = InMemoryLedger::with_genesis(genesis.clone()).unwrap();
        let mut block = next_block(&genesis, Vec::new());
        block.header.index = 5;

        let err = ledger.add_block(block).unwrap_err();

        assert_eq!(err, LedgerError::NotNextIndex { height: 0, given: 5 });
    }

    #[test]
    fn test_block_with_wrong_parent_is_rejected() {
        let genesis = genesis::block();
        let ledger = InMemoryLedger::with_genesis(genesis.clone()).unwrap();
        let mut block = next_block(&genesis, Vec::new());
        block.header.prev_hash = B256::new([9; 32]);

        let err = ledger.add_block(block).unwrap_err();

        assert_eq!(err, LedgerError::UnknownParent { tip: genesis.hash() });
    }

    #[test]
    fn test_spent_output_is_no_longer_unspent() {
        let genesis = genesis::block();
        let ledger = InMemoryLedger::with_genesis(genesis.clone()).unwrap();
        let funding = &genesis.transactions[0];
        let spend = Transaction {
            inputs: vec![OutPoint::new(funding.hash(), 0)],
            outputs: vec![TxOutput {
                asset_id: genesis::GOVERNING_ASSET,
                value: 1,
                script_hash: Address::new([3; 20]),
            }],
            ..Default::default()
        };
        assert!(ledger.unspent_output(&funding.hash(), 0).unwrap().is_some());

        ledger
            .add_block(next_block(&genesis, vec![spend.clone()]))
            .unwrap();

        assert_eq!(ledger.unspent_output(&funding.hash(), 0).unwrap(), None);
        assert_eq!(
            ledger.unspent_output(&spend.hash(), 0).unwrap(),
            Some(spend.outputs[0].clone())
        );
        assert_eq!(ledger.transaction_by_hash(&spend.hash()).unwrap(), Some(spend));
        assert_eq!(ledger.current_tip().unwrap().height, 1);
    }
}
