use {
    crate::{
        error::{backend_error, Error},
        json_utils::Params,
    },
    noderpc_blockchain::{ledger::Ledger, transaction::OutputResponse},
    serde_json::Value,
};

/// Returns the unspent output, or null when it is absent or spent. Unlike `getrawtransaction` a
/// miss is not an error.
pub fn execute(params: Params, ledger: &impl Ledger) -> Result<Value, Error> {
    let hash = params.hash(0)?;
    let index = params.u16(1)?;

    let response = ledger
        .unspent_output(&hash, index)
        .map_err(backend_error)?
        .map(|output| OutputResponse::new(index, &output));

    Ok(serde_json::to_value(response).expect("Must be able to JSON-serialize response"))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::methods::tests::{create_context, extend_chain, params},
        noderpc_blockchain::genesis,
        noderpc_shared::primitives::B256,
        serde_json::json,
        test_case::test_case,
    };

    #[test]
    fn test_execute_returns_unspent_output() {
        let ctx = create_context();
        let tx = genesis::block().transactions[0].clone();
        let params = params(json!([tx.hash().to_string(), 0]));

        let response = execute(Params::new(&params), &ctx.ledger).unwrap();

        assert_eq!(
            response,
            json!({
                "n": 0,
                "asset": genesis::GOVERNING_ASSET.to_string(),
                "value": genesis::INITIAL_SUPPLY,
                "address": genesis::CUSTODIAN.to_string(),
            })
        );
    }

    #[test]
    fn test_execute_spent_output_is_null() {
        let ctx = create_context();
        extend_chain(&ctx.ledger);
        let funding = genesis::block().transactions[0].hash();
        let params = params(json!([funding.to_string(), 0]));

        let response = execute(Params::new(&params), &ctx.ledger).unwrap();

        assert_eq!(response, Value::Null);
    }

    #[test_case(json!([B256::new([8; 32]).to_string(), 0]); "unknown transaction")]
    #[test_case(json!([genesis::block().transactions[0].hash().to_string(), 1]); "index past outputs")]
    fn test_execute_absent_output_is_null(params: Value) {
        let ctx = create_context();
        let params = params.as_array().unwrap();

        let response = execute(Params::new(params), &ctx.ledger).unwrap();

        assert_eq!(response, Value::Null);
    }

    #[test]
    fn test_execute_index_must_fit_u16() {
        let ctx = create_context();
        let params = params(json!([B256::ZERO.to_string(), 65536]));

        let err = execute(Params::new(&params), &ctx.ledger).unwrap_err();

        assert!(matches!(err, Error::Params(_)));
    }
}
