use {
    crate::error::{backend_error, Error},
    noderpc_blockchain::node::Node,
    serde_json::Value,
};

pub fn execute(node: &impl Node) -> Result<Value, Error> {
    let count = node.peer_count().map_err(backend_error)?;

    Ok(Value::from(count))
}
