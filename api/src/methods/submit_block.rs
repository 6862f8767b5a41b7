use {
    crate::{
        error::{backend_error, Error},
        json_utils::{decode_hex, Params},
    },
    noderpc_blockchain::{
        block::Block,
        node::{Node, Relayable},
        Encodable,
    },
    serde_json::Value,
};

pub fn execute(params: Params, node: &impl Node) -> Result<Value, Error> {
    let bytes = decode_hex(params.str(0)?)?;
    let block = Block::decode(&bytes)?;

    let accepted = node.relay(Relayable::Block(block)).map_err(backend_error)?;

    Ok(Value::Bool(accepted))
}
