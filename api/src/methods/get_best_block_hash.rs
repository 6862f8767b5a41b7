use {
    crate::error::{backend_error, Error},
    noderpc_blockchain::ledger::Ledger,
    serde_json::Value,
};

pub fn execute(ledger: &impl Ledger) -> Result<Value, Error> {
    let tip = ledger.current_tip().map_err(backend_error)?;

    Ok(Value::String(tip.hash.to_string()))
}
