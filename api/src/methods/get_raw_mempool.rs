use {
    crate::error::{backend_error, Error},
    noderpc_blockchain::node::Node,
    serde_json::Value,
};

pub fn execute(node: &impl Node) -> Result<Value, Error> {
    let hashes: Vec<String> = node
        .pending_transactions()
        .map_err(backend_error)?
        .iter()
        .map(|tx| tx.hash().to_string())
        .collect();

    Ok(Value::from(hashes))
}
