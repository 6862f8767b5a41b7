use {
    crate::{
        error::{backend_error, Error},
        json_utils::Params,
        jsonrpc::JsonRpcError,
    },
    noderpc_blockchain::ledger::Ledger,
    serde_json::Value,
};

pub fn execute(params: Params, ledger: &impl Ledger) -> Result<Value, Error> {
    let height = params.u32(0)?;

    let hash = ledger
        .hash_at_height(height)
        .map_err(backend_error)?
        .ok_or_else(|| JsonRpcError::invalid_height(height))?;

    Ok(Value::String(hash.to_string()))
}
