use {crate::error::Error, noderpc_blockchain::node::Node, serde_json::Value};

pub fn execute(node: &impl Node) -> Result<Value, Error> {
    Ok(serde_json::to_value(node.version()).expect("Must be able to JSON-serialize response"))
}
