pub use encoding::{DecodeError, Encodable};

pub mod block;
pub mod genesis;
pub mod ledger;
pub mod node;
pub mod transaction;

mod encoding;

#[cfg(any(feature = "test-doubles", test))]
pub mod test_doubles;
