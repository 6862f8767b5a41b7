use {
    crate::{
        json_utils,
        jsonrpc::{JsonRpcError, JsonRpcResponse},
        Dispatcher, Error,
    },
    noderpc_blockchain::{ledger::Ledger, node::Node},
    serde_json::Value,
};

/// Processes one parsed request.
///
/// Returns `None` for notifications, which are requests without an `id` field. Any other value
/// yields exactly one response carrying the request's `id` unchanged.
pub fn handle<L: Ledger, N: Node>(
    request: &Value,
    dispatcher: &Dispatcher<L, N>,
) -> Option<JsonRpcResponse> {
    let id = json_utils::get_field(request, "id")?.clone();

    Some(match inner_handle_request(request, dispatcher) {
        Ok(result) => JsonRpcResponse::result(id, result),
        Err(e) => JsonRpcResponse::error(id, e),
    })
}

fn inner_handle_request<L: Ledger, N: Node>(
    request: &Value,
    dispatcher: &Dispatcher<L, N>,
) -> Result<Value, JsonRpcError> {
    let (Some(method), Some(params)) = (
        json_utils::get_method(request),
        json_utils::get_params_list(request),
    ) else {
        return Err(JsonRpcError::invalid_request());
    };

    dispatcher.dispatch(method, params).map_err(|e| {
        if !matches!(e, Error::Rpc(_)) {
            tracing::warn!(method, "Request failed: {e}");
        }
        e.into_rpc_error(dispatcher.config().include_diagnostics)
    })
}
