use {
    crate::primitives::B256,
    sha2::{Digest, Sha256},
};

/// Double SHA-256 of `data`, the identity hash of every hashed domain object.
pub fn hash256(data: impl AsRef<[u8]>) -> B256 {
    let first = Sha256::digest(data.as_ref());
    let second = Sha256::digest(first);
    B256::new(second.into())
}
