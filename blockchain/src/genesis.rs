use {
    crate::{
        block::{Block, Header},
        transaction::{Transaction, TxOutput},
    },
    noderpc_shared::primitives::{Address, B256},
};

/// Asset id of the native governing token issued in the genesis block.
pub const GOVERNING_ASSET: B256 = B256::new([0x11; 32]);

/// Recipient of the initial supply.
pub const CUSTODIAN: Address = Address::new([0x22; 20]);

pub const INITIAL_SUPPLY: u64 = 100_000_000;

/// 2016-07-15T15:08:21Z
pub const GENESIS_TIMESTAMP: u64 = 1_468_595_301;

/// Builds the deterministic first block of the chain.
///
/// It contains a single transaction minting [`INITIAL_SUPPLY`] of [`GOVERNING_ASSET`] to
/// [`CUSTODIAN`].
pub fn block() -> Block {
    let issue = Transaction {
        version: 0,
        nonce: 0,
        inputs: Vec::new(),
        outputs: vec![TxOutput {
            asset_id: GOVERNING_ASSET,
            value: INITIAL_SUPPLY,
            script_hash: CUSTODIAN,
        }],
        script: Vec::new(),
    };
    let header = Header {
        version: 0,
        prev_hash: B256::ZERO,
        merkle_root: B256::ZERO,
        timestamp: GENESIS_TIMESTAMP,
        index: 0,
        nonce: 2_083_236_893,
    };

    Block::new(header, vec![issue]).with_merkle_root()
}
