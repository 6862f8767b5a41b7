use {
    crate::config::ServerConfig,
    noderpc_api::{batch, jsonrpc, Dispatcher},
    noderpc_blockchain::{ledger::Ledger, node::Node},
    std::sync::Arc,
    warp::{
        http::{
            header::{
                ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
                ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, CONTENT_TYPE,
            },
            HeaderMap, HeaderValue, Method, StatusCode,
        },
        hyper::{body::Bytes, Body},
        Filter, Rejection, Reply,
    },
};

pub mod config;
pub mod dependency;

#[cfg(test)]
mod tests;

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let dispatcher = dependency::create(&config)?;
    let route = rpc_route(dispatcher);

    let (addr, server) = warp::serve(route)
        .try_bind_with_graceful_shutdown(config.listen, async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })?;
    tracing::info!(%addr, "Serving JSON-RPC");
    server.await;

    Ok(())
}

/// The single JSON-RPC endpoint. It answers on every path.
pub fn rpc_route<L, N>(
    dispatcher: Arc<Dispatcher<L, N>>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone
where
    L: Ledger + 'static,
    N: Node + 'static,
{
    warp::any()
        .and(warp::method())
        .and(warp::body::bytes())
        .map(move |method: Method, body: Bytes| handle(&method, &body, &dispatcher))
        .with(warp::reply::with::headers(cors_headers()))
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("31536000"));
    headers
}

fn handle<L: Ledger, N: Node>(
    method: &Method,
    body: &[u8],
    dispatcher: &Dispatcher<L, N>,
) -> warp::reply::Response {
    // Preflight and health checks get an empty success.
    if *method != Method::POST {
        return StatusCode::OK.into_response();
    }

    let Some(output) = batch::handle_body(body, dispatcher) else {
        return StatusCode::OK.into_response();
    };
    let body = serde_json::to_vec(&output).expect("Must be able to JSON-serialize response");
    let mut response = warp::reply::Response::new(Body::from(body));
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static(jsonrpc::CONTENT_TYPE),
    );
    response
}
