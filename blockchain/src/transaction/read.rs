use {
    crate::{
        transaction::{OutPoint, Transaction, TxOutput},
        Encodable,
    },
    serde::Serialize,
};

/// The JSON projection of a [`Transaction`] returned by verbose queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionResponse {
    pub txid: String,
    pub size: usize,
    pub version: u8,
    pub nonce: u32,
    pub vin: Vec<InputResponse>,
    pub vout: Vec<OutputResponse>,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputResponse {
    pub txid: String,
    pub vout: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputResponse {
    pub n: u16,
    pub asset: String,
    pub value: u64,
    pub address: String,
}

impl OutputResponse {
    pub fn new(n: u16, output: &TxOutput) -> Self {
        Self {
            n,
            asset: output.asset_id.to_string(),
            value: output.value,
            address: output.script_hash.to_string(),
        }
    }
}

impl From<&OutPoint> for InputResponse {
    fn from(value: &OutPoint) -> Self {
        Self {
            txid: value.prev_hash.to_string(),
            vout: value.index,
        }
    }
}

impl From<&Transaction> for TransactionResponse {
    fn from(value: &Transaction) -> Self {
        Self {
            txid: value.hash().to_string(),
            size: value.encoded_size(),
            version: value.version,
            nonce: value.nonce,
            vin: value.inputs.iter().map(InputResponse::from).collect(),
            vout: value
                .outputs
                .iter()
                .zip(0u16..)
                .map(|(output, n)| OutputResponse::new(n, output))
                .collect(),
            script: hex::encode(&value.script),
        }
    }
}
