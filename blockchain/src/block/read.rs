use {
    crate::{block::Block, transaction::TransactionResponse, Encodable},
    serde::Serialize,
};

/// The JSON projection of a [`Block`] returned by verbose queries.
///
/// The chain-relative fields `confirmations` and `nextblockhash` depend on the ledger tip and are
/// only present once filled in with [`BlockResponse::with_chain_context`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockResponse {
    pub hash: String,
    pub size: usize,
    pub version: u32,
    pub previousblockhash: String,
    pub merkleroot: String,
    pub time: u64,
    pub index: u32,
    pub nonce: u64,
    pub tx: Vec<TransactionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nextblockhash: Option<String>,
}

impl BlockResponse {
    pub fn with_chain_context(mut self, tip_height: u32, next_hash: Option<String>) -> Self {
        self.confirmations = Some(tip_height.saturating_sub(self.index) + 1);
        self.nextblockhash = next_hash;
        self
    }
}

impl From<&Block> for BlockResponse {
    fn from(value: &Block) -> Self {
        let header = &value.header;
        Self {
            hash: value.hash().to_string(),
            size: value.encoded_size(),
            version: header.version,
            previousblockhash: header.prev_hash.to_string(),
            merkleroot: header.merkle_root.to_string(),
            time: header.timestamp,
            index: header.index,
            nonce: header.nonce,
            tx: value
                .transactions
                .iter()
                .map(TransactionResponse::from)
                .collect(),
            confirmations: None,
            nextblockhash: None,
        }
    }
}
