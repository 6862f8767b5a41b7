use {
    crate::{
        error::{backend_error, Error},
        json_utils::{ParamError, Params},
        jsonrpc::JsonRpcError,
    },
    noderpc_blockchain::{
        block::{Block, BlockResponse},
        ledger::Ledger,
        Encodable,
    },
    noderpc_shared::primitives::B256,
    serde_json::Value,
};

pub fn execute(params: Params, ledger: &impl Ledger) -> Result<Value, Error> {
    let lookup = parse_block_id(params)?;
    let verbose = params.flag(1)?;

    let block = match lookup {
        BlockId::Height(height) => ledger.block_by_height(height),
        BlockId::Hash(hash) => ledger.block_by_hash(&hash),
    }
    .map_err(backend_error)?
    .ok_or_else(JsonRpcError::unknown_block)?;

    if !verbose {
        return Ok(Value::String(hex::encode(block.encode())));
    }

    let response = verbose_response(&block, ledger)?;
    Ok(serde_json::to_value(response).expect("Must be able to JSON-serialize response"))
}

enum BlockId {
    Height(u32),
    Hash(B256),
}

fn parse_block_id(params: Params) -> Result<BlockId, ParamError> {
    match params.get(0)? {
        Value::Number(_) => params.u32(0).map(BlockId::Height),
        Value::String(_) => params.hash(0).map(BlockId::Hash),
        _ => Err(ParamError::Type {
            index: 0,
            expected: "a block height or hash",
        }),
    }
}

fn verbose_response(block: &Block, ledger: &impl Ledger) -> Result<BlockResponse, Error> {
    let tip = ledger.current_tip().map_err(backend_error)?;
    let next_hash = match block.index().checked_add(1) {
        Some(height) => ledger.hash_at_height(height).map_err(backend_error)?,
        None => None,
    };

    Ok(BlockResponse::from(block).with_chain_context(tip.height, next_hash.map(|h| h.to_string())))
}
