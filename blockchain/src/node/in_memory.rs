use {
    crate::{
        ledger::InMemoryLedger,
        node::{Node, NodeVersion, Relayable},
        transaction::Transaction,
    },
    noderpc_shared::primitives::B256,
    parking_lot::RwLock,
    std::{
        collections::HashSet,
        convert::Infallible,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    },
};

#[derive(Debug, Default)]
struct Pool {
    /// Insertion order is the pool order reported to clients.
    transactions: Vec<Transaction>,
    hashes: HashSet<B256>,
}

impl Pool {
    fn insert(&mut self, tx: Transaction) -> bool {
        if !self.hashes.insert(tx.hash()) {
            return false;
        }
        self.transactions.push(tx);
        true
    }

    fn evict(&mut self, confirmed: &HashSet<B256>) {
        self.transactions.retain(|tx| !confirmed.contains(&tx.hash()));
        self.hashes.retain(|hash| !confirmed.contains(hash));
    }
}

/// A node without networking whose relay writes straight into a shared [`InMemoryLedger`].
#[derive(Debug)]
pub struct InMemoryNode {
    ledger: Arc<InMemoryLedger>,
    pool: RwLock<Pool>,
    peers: AtomicUsize,
    version: NodeVersion,
}

impl InMemoryNode {
    pub fn new(ledger: Arc<InMemoryLedger>, version: NodeVersion) -> Self {
        Self {
            ledger,
            pool: RwLock::default(),
            peers: AtomicUsize::new(0),
            version,
        }
    }

    pub fn set_peer_count(&self, count: usize) {
        self.peers.store(count, Ordering::Relaxed);
    }

    fn relay_transaction(&self, tx: Transaction) -> bool {
        if self.ledger.contains_transaction(&tx.hash()) {
            return false;
        }
        self.pool.write().insert(tx)
    }
}

impl Node for InMemoryNode {
    type Err = Infallible;

    fn peer_count(&self) -> Result<usize, Self::Err> {
        Ok(self.peers.load(Ordering::Relaxed))
    }

    fn pending_transactions(&self) -> Result<Vec<Transaction>, Self::Err> {
        Ok(self.pool.read().transactions.clone())
    }

    fn pending_transaction_by_hash(&self, hash: &B256) -> Result<Option<Transaction>, Self::Err> {
        Ok(self
            .pool
            .read()
            .transactions
            .iter()
            .find(|tx| &tx.hash() == hash)
            .cloned())
    }

    fn relay(&self, item: Relayable) -> Result<bool, Self::Err> {
        Ok(match item {
            Relayable::Transaction(tx) => self.relay_transaction(tx),
            Relayable::Block(block) => {
                let confirmed: HashSet<B256> = block.transaction_hashes().collect();
                match self.ledger.add_block(block) {
                    Ok(_) => {
                        self.pool.write().evict(&confirmed);
                        true
                    }
                    Err(e) => {
                        tracing::debug!("Block rejected: {e}");
                        false
                    }
                }
            }
        })
    }

    fn version(&self) -> NodeVersion {
        self.version.clone()
    }
}
