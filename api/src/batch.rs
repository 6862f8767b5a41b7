use {
    crate::{
        jsonrpc::{self, JsonRpcError, JsonRpcResponse},
        request, Dispatcher,
    },
    noderpc_blockchain::{ledger::Ledger, node::Node},
    serde_json::Value,
};

/// The body of an HTTP response.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum JsonRpcOutput {
    Single(JsonRpcResponse),
    Batch(Vec<JsonRpcResponse>),
}

/// Processes a raw request body.
///
/// Returns `None` when nothing must be written back, which is the case for a single notification
/// and for a batch made only of notifications.
pub fn handle_body<L: Ledger, N: Node>(
    body: &[u8],
    dispatcher: &Dispatcher<L, N>,
) -> Option<JsonRpcOutput> {
    let value = match jsonrpc::parse_request(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Unparseable request body: {e}");
            return Some(JsonRpcOutput::Single(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::parse_error(),
            )));
        }
    };

    match value {
        Value::Array(requests) if requests.is_empty() => Some(JsonRpcOutput::Single(
            JsonRpcResponse::error(Value::Null, JsonRpcError::invalid_request()),
        )),
        Value::Array(requests) => {
            tracing::debug!(size = requests.len(), "Processing batch");
            let responses: Vec<_> = requests
                .iter()
                .filter_map(|request| request::handle(request, dispatcher))
                .collect();
            (!responses.is_empty()).then_some(JsonRpcOutput::Batch(responses))
        }
        request => request::handle(&request, dispatcher).map(JsonRpcOutput::Single),
    }
}
