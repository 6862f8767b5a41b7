use {
    serde::{de::DeserializeOwned, Serialize},
    thiserror::Error,
};

#[derive(Debug, Error)]
#[error("Invalid binary payload: {0}")]
pub struct DecodeError(#[from] bcs::Error);

/// The canonical binary encoding of domain objects.
///
/// Encoding is BCS, so every value has exactly one byte representation and decoding rejects
/// trailing bytes.
pub trait Encodable: Serialize + DeserializeOwned {
    fn encode(&self) -> Vec<u8> {
        bcs::to_bytes(self).expect("Domain objects must be BCS-serializable")
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(bcs::from_bytes(bytes)?)
    }

    fn encoded_size(&self) -> usize {
        bcs::serialized_size(self).expect("Domain objects must be BCS-serializable")
    }
}
