use {
    crate::{
        error::{backend_error, Error},
        json_utils::Params,
        jsonrpc::JsonRpcError,
    },
    noderpc_blockchain::{
        ledger::Ledger, node::Node, transaction::TransactionResponse, Encodable,
    },
    serde_json::Value,
};

/// Looks the transaction up in the node's pool first and falls back to the ledger. The two reads
/// are independent, so a transaction confirmed in between is still found in one of them.
pub fn execute(params: Params, ledger: &impl Ledger, node: &impl Node) -> Result<Value, Error> {
    let hash = params.hash(0)?;
    let verbose = params.flag(1)?;

    let tx = match node.pending_transaction_by_hash(&hash).map_err(backend_error)? {
        Some(tx) => tx,
        None => ledger
            .transaction_by_hash(&hash)
            .map_err(backend_error)?
            .ok_or_else(JsonRpcError::unknown_transaction)?,
    };

    if verbose {
        let response = TransactionResponse::from(&tx);
        Ok(serde_json::to_value(response).expect("Must be able to JSON-serialize response"))
    } else {
        Ok(Value::String(hex::encode(tx.encode())))
    }
}
