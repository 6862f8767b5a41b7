use {
    crate::{error::Error, json_utils::Params, method_name::MethodName},
    noderpc_blockchain::{ledger::Ledger, node::Node},
    serde_json::Value,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Attach debug renderings of internal errors to the `data` field of error responses.
    pub include_diagnostics: bool,
}

/// The method registry. Routes a method name and its positional parameters to a handler that
/// reads from the ledger or relays to the node.
#[derive(Debug)]
pub struct Dispatcher<L, N> {
    ledger: L,
    node: N,
    config: DispatcherConfig,
}

impl<L: Ledger, N: Node> Dispatcher<L, N> {
    pub fn new(ledger: L, node: N, config: DispatcherConfig) -> Self {
        Self {
            ledger,
            node,
            config,
        }
    }

    pub fn config(&self) -> DispatcherConfig {
        self.config
    }

    pub fn dispatch(&self, method: &str, params: &[Value]) -> Result<Value, Error> {
        use {crate::methods::*, MethodName::*};

        let method: MethodName = method.parse()?;
        let params = Params::new(params);
        if method.is_relay() {
            tracing::info!(method = method.as_str(), "Relay requested");
        } else {
            tracing::debug!(method = method.as_str(), "Dispatching");
        }

        let (ledger, node) = (&self.ledger, &self.node);
        match method {
            GetBestBlockHash => get_best_block_hash::execute(ledger),
            GetBlock => get_block::execute(params, ledger),
            GetBlockCount => get_block_count::execute(ledger),
            GetBlockHash => get_block_hash::execute(params, ledger),
            GetConnectionCount => get_connection_count::execute(node),
            GetRawMempool => get_raw_mempool::execute(node),
            GetRawTransaction => get_raw_transaction::execute(params, ledger, node),
            GetTxOut => get_tx_out::execute(params, ledger),
            GetVersion => get_version::execute(node),
            SendRawTransaction => send_raw_transaction::execute(params, node),
            SubmitBlock => submit_block::execute(params, node),
        }
    }
}
