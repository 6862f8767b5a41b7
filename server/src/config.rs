use {
    clap::Parser,
    noderpc_api::DispatcherConfig,
    noderpc_blockchain::node::NodeVersion,
    std::net::SocketAddr,
};

pub const DEFAULT_USER_AGENT: &str = concat!("/noderpc:", env!("CARGO_PKG_VERSION"), "/");

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Address the JSON-RPC endpoint listens on.
    #[arg(long, env = "NODERPC_LISTEN", default_value = "0.0.0.0:10332")]
    pub listen: SocketAddr,

    /// Attach debug details of internal failures to error responses.
    #[arg(long, env = "NODERPC_DIAGNOSTICS")]
    pub diagnostics: bool,

    /// Peer-to-peer port advertised by `getversion`.
    #[arg(long, env = "NODERPC_P2P_PORT", default_value_t = 10333)]
    pub port: u16,

    #[arg(long, env = "NODERPC_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub dispatcher: DispatcherConfig,
    pub p2p_port: u16,
    pub user_agent: String,
}

impl ServerConfig {
    /// The version the node reports about itself. The nonce is drawn once per process.
    pub fn node_version(&self) -> NodeVersion {
        NodeVersion {
            port: self.p2p_port,
            nonce: rand::random(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            listen: args.listen,
            dispatcher: DispatcherConfig {
                include_diagnostics: args.diagnostics,
            },
            p2p_port: args.port,
            user_agent: args.user_agent,
        }
    }
}
