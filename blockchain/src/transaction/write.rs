use {
    crate::Encodable,
    noderpc_shared::{
        hash::hash256,
        primitives::{Address, B256},
    },
};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub version: u8,
    /// Distinguishes otherwise identical transactions, e.g. block rewards paying the same
    /// recipient.
    pub nonce: u32,
    pub inputs: Vec<OutPoint>,
    pub outputs: Vec<TxOutput>,
    pub script: Vec<u8>,
}

impl Transaction {
    pub fn hash(&self) -> B256 {
        hash256(self.encode())
    }

    /// The outputs this transaction spends.
    pub fn spends(&self) -> impl Iterator<Item = &OutPoint> {
        self.inputs.iter()
    }
}

impl Encodable for Transaction {}

/// A reference to output number `index` of transaction `prev_hash`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct OutPoint {
    pub prev_hash: B256,
    pub index: u16,
}

impl OutPoint {
    pub fn new(prev_hash: B256, index: u16) -> Self {
        Self { prev_hash, index }
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct TxOutput {
    pub asset_id: B256,
    pub value: u64,
    pub script_hash: Address,
}
