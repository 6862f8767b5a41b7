use {
    crate::{
        error::{backend_error, Error},
        json_utils::{decode_hex, Params},
    },
    noderpc_blockchain::{
        node::{Node, Relayable},
        transaction::Transaction,
        Encodable,
    },
    serde_json::Value,
};

pub fn execute(params: Params, node: &impl Node) -> Result<Value, Error> {
    let tx = parse_params(params)?;
    let accepted = node
        .relay(Relayable::Transaction(tx))
        .map_err(backend_error)?;

    Ok(Value::Bool(accepted))
}

fn parse_params(params: Params) -> Result<Transaction, Error> {
    let bytes = decode_hex(params.str(0)?)?;
    Ok(Transaction::decode(&bytes)?)
}
