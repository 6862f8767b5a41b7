use {
    crate::config::ServerConfig,
    noderpc_api::Dispatcher,
    noderpc_blockchain::{
        genesis,
        ledger::{InMemoryLedger, LedgerError},
        node::InMemoryNode,
    },
    std::sync::Arc,
};

pub type Ledger = Arc<InMemoryLedger>;
pub type Node = Arc<InMemoryNode>;
pub type SharedDispatcher = Arc<Dispatcher<Ledger, Node>>;

/// Seeds the ledger with the genesis block and wires the node and dispatcher around it.
pub fn create(config: &ServerConfig) -> Result<SharedDispatcher, LedgerError> {
    let ledger = Arc::new(InMemoryLedger::with_genesis(genesis::block())?);
    let node = Arc::new(InMemoryNode::new(ledger.clone(), config.node_version()));

    Ok(Arc::new(Dispatcher::new(ledger, node, config.dispatcher)))
}
