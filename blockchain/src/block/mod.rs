//! The block module is responsible for the concerns of blocks such that it:
//!
//! * Defines the structure of blocks and their headers.
//! * Implements the algorithms producing block hashes and merkle roots.
//! * Projects blocks into their JSON representation.

pub use {
    read::BlockResponse,
    write::{merkle_root, Block, Header},
};

mod read;
mod write;
