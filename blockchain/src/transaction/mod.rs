//! Transactions move asset value between outputs.
//!
//! A transaction spends previous outputs referenced by [`OutPoint`]s and creates new
//! [`TxOutput`]s. Its hash is the double SHA-256 of its canonical encoding.

pub use {
    read::{InputResponse, OutputResponse, TransactionResponse},
    write::{OutPoint, Transaction, TxOutput},
};

mod read;
mod write;
