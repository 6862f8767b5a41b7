use {
    crate::error::{backend_error, Error},
    noderpc_blockchain::ledger::Ledger,
    serde_json::Value,
};

pub fn execute(ledger: &impl Ledger) -> Result<Value, Error> {
    let tip = ledger.current_tip().map_err(backend_error)?;

    // Heights start at zero, so the block count is one more than the tip height.
    Ok(Value::from(u64::from(tip.height) + 1))
}
