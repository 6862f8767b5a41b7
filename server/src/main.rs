use {
    clap::Parser,
    noderpc_server::config::{Args, ServerConfig},
    tracing_subscriber::EnvFilter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from(Args::parse());

    noderpc_server::run(config).await
}
