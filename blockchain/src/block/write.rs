use {
    crate::{transaction::Transaction, Encodable},
    noderpc_shared::{hash::hash256, primitives::B256},
};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Header {
    pub version: u32,
    pub prev_hash: B256,
    pub merkle_root: B256,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    /// The height of the block in the chain, starting at zero for genesis.
    pub index: u32,
    pub nonce: u64,
}

impl Header {
    /// The block hash is the double SHA-256 of the encoded header. It commits to the
    /// transactions through [`Header::merkle_root`].
    pub fn hash(&self) -> B256 {
        hash256(self.encode())
    }
}

impl Encodable for Header {}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    pub fn hash(&self) -> B256 {
        self.header.hash()
    }

    pub fn index(&self) -> u32 {
        self.header.index
    }

    pub fn transaction_hashes(&self) -> impl Iterator<Item = B256> + '_ {
        self.transactions.iter().map(Transaction::hash)
    }

    /// Sets the header merkle root to the one computed from the contained transactions.
    pub fn with_merkle_root(mut self) -> Self {
        self.header.merkle_root = merkle_root(self.transaction_hashes());
        self
    }

    pub fn has_valid_merkle_root(&self) -> bool {
        self.header.merkle_root == merkle_root(self.transaction_hashes())
    }
}

impl Encodable for Block {}

/// Computes the root of the binary hash tree over `hashes`.
///
/// An odd node at any level is paired with itself. The root of an empty list is [`B256::ZERO`].
pub fn merkle_root(hashes: impl IntoIterator<Item = B256>) -> B256 {
    let mut level: Vec<B256> = hashes.into_iter().collect();
    if level.is_empty() {
        return B256::ZERO;
    }
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                hash256([left.0, right.0].concat())
            })
            .collect();
    }
    level[0]
}
