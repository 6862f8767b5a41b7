pub mod get_best_block_hash;
pub mod get_block;
pub mod get_block_count;
pub mod get_block_hash;
pub mod get_connection_count;
pub mod get_raw_mempool;
pub mod get_raw_transaction;
pub mod get_tx_out;
pub mod get_version;
pub mod send_raw_transaction;
pub mod submit_block;
