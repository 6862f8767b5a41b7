use {
    crate::{config::ServerConfig, dependency, rpc_route},
    noderpc_api::{Dispatcher, DispatcherConfig},
    noderpc_blockchain::{
        genesis,
        test_doubles::{UnavailableLedger, UnavailableNode},
    },
    serde_json::{json, Value},
    std::sync::Arc,
    test_case::test_case,
    warp::http::{header::CONTENT_TYPE, Response, StatusCode},
    warp::hyper::body::Bytes,
};

fn test_config() -> ServerConfig {
    ServerConfig {
        listen: "127.0.0.1:0".parse().unwrap(),
        dispatcher: DispatcherConfig::default(),
        p2p_port: 10333,
        user_agent: "/noderpc-test/".into(),
    }
}

async fn post(body: impl AsRef<[u8]>) -> Response<Bytes> {
    let route = rpc_route(dependency::create(&test_config()).unwrap());

    warp::test::request()
        .method("POST")
        .path("/")
        .body(body)
        .reply(&route)
        .await
}

fn json_body(response: &Response<Bytes>) -> Value {
    serde_json::from_slice(response.body()).unwrap()
}

fn assert_cors(response: &Response<Bytes>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-max-age"], "31536000");
}

#[tokio::test]
async fn test_single_request() {
    let body = json!({ "jsonrpc": "2.0", "id": 1, "method": "getblockcount", "params": [] });

    let response = post(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json-rpc");
    assert_cors(&response);
    assert_eq!(
        json_body(&response),
        json!({ "jsonrpc": "2.0", "id": 1, "result": 1 })
    );
}

#[tokio::test]
async fn test_id_is_echoed_byte_for_byte() {
    let response = post(r#"{"id":1.0,"method":"getblockcount","params":[]}"#).await;

    assert_eq!(
        response.body().as_ref(),
        br#"{"jsonrpc":"2.0","id":1.0,"result":1}"#
    );
}

#[tokio::test]
async fn test_parse_error() {
    let response = post("{\"id\": 1,").await;

    assert_eq!(response.headers()[CONTENT_TYPE], "application/json-rpc");
    assert_eq!(
        json_body(&response),
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": { "code": -32700, "message": "Parse error" }
        })
    );
}

#[tokio::test]
async fn test_empty_batch() {
    let response = post("[]").await;

    let body = json_body(&response);
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["error"]["code"], -32600);
}

#[test_case(r#"{"method":"getblockcount","params":[]}"#; "single notification")]
#[test_case(r#"[{"method":"getblockcount","params":[]},{"method":"getversion","params":[]}]"#; "notification batch")]
#[tokio::test]
async fn test_notifications_produce_empty_body(body: &'static str) {
    let response = post(body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.body().is_empty());
    assert!(response.headers().get(CONTENT_TYPE).is_none());
    assert_cors(&response);
}

#[test_case("GET")]
#[test_case("OPTIONS")]
#[test_case("PUT")]
#[tokio::test]
async fn test_non_post_is_not_processed(method: &str) {
    let route = rpc_route(dependency::create(&test_config()).unwrap());

    let response = warp::test::request()
        .method(method)
        .path("/any/path")
        .body(r#"{"id":1,"method":"getblockcount","params":[]}"#)
        .reply(&route)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.body().is_empty());
    assert_cors(&response);
}

#[tokio::test]
async fn test_batch_mixes_results_and_errors() {
    let body = json!([
        { "id": 1, "method": "getbestblockhash", "params": [] },
        { "id": 2, "method": "getblock", "params": [] },
        { "id": 3, "method": "nosuchmethod", "params": [] },
        { "method": "getblockcount", "params": [] },
    ]);

    let response = post(body.to_string()).await;

    let body = json_body(&response);
    let responses = body.as_array().unwrap();
    assert_eq!(responses.len(), 3);
    let by_id = |id: i64| responses.iter().find(|r| r["id"] == id).unwrap();
    assert_eq!(by_id(1)["result"], genesis::block().hash().to_string());
    assert_eq!(by_id(2)["error"]["code"], -32603);
    assert_eq!(by_id(3)["error"]["code"], -32601);
}

#[tokio::test]
async fn test_submitted_transaction_is_visible_in_mempool() {
    use noderpc_blockchain::{
        transaction::{OutPoint, Transaction, TxOutput},
        Encodable,
    };

    let route = rpc_route(dependency::create(&test_config()).unwrap());
    let tx = Transaction {
        version: 0,
        nonce: 9,
        inputs: vec![OutPoint::new(genesis::block().transactions[0].hash(), 0)],
        outputs: vec![TxOutput {
            asset_id: genesis::GOVERNING_ASSET,
            value: 5,
            script_hash: noderpc_shared::primitives::Address::new([0x55; 20]),
        }],
        script: Vec::new(),
    };
    let send = json!({
        "id": 1,
        "method": "sendrawtransaction",
        "params": [hex::encode(tx.encode())],
    });
    let mempool = json!({ "id": 2, "method": "getrawmempool", "params": [] });

    let sent = warp::test::request()
        .method("POST")
        .body(send.to_string())
        .reply(&route)
        .await;
    let pool = warp::test::request()
        .method("POST")
        .body(mempool.to_string())
        .reply(&route)
        .await;

    assert_eq!(json_body(&sent)["result"], true);
    assert_eq!(json_body(&pool)["result"], json!([tx.hash().to_string()]));
}

#[tokio::test]
async fn test_getversion_reports_configured_node() {
    let response = post(r#"{"id":"v","method":"getversion","params":[]}"#).await;

    let result = &json_body(&response)["result"];
    assert_eq!(result["port"], 10333);
    assert_eq!(result["useragent"], "/noderpc-test/");
    assert!(result["nonce"].is_u64());
}

#[tokio::test]
async fn test_backend_failure_with_diagnostics() {
    let dispatcher = Dispatcher::new(
        UnavailableLedger,
        UnavailableNode,
        DispatcherConfig {
            include_diagnostics: true,
        },
    );
    let route = rpc_route(Arc::new(dispatcher));

    let response = warp::test::request()
        .method("POST")
        .body(r#"{"id":5,"method":"getconnectioncount","params":[]}"#)
        .reply(&route)
        .await;

    let body = json_body(&response);
    assert_eq!(body["id"], 5);
    assert_eq!(body["error"]["code"], -32603);
    assert!(body["error"]["data"]["debug"].is_string());
}
