use {serde_json::Value, std::fmt, thiserror::Error};

pub const JSONRPC_VERSION: &str = "2.0";

/// Media type of every non-empty response body.
pub const CONTENT_TYPE: &str = "application/json-rpc";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INTERNAL_ERROR: i64 = -32603;
pub const UNKNOWN_BLOCK: i64 = -100;
pub const UNKNOWN_TRANSACTION: i64 = -101;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Error)]
#[error("{message}")]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn without_data(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(code: i64, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn parse_error() -> Self {
        Self::without_data(PARSE_ERROR, "Parse error")
    }

    pub fn invalid_request() -> Self {
        Self::without_data(INVALID_REQUEST, "Invalid Request")
    }

    pub fn method_not_found() -> Self {
        Self::without_data(METHOD_NOT_FOUND, "Method not found")
    }

    pub fn unknown_block() -> Self {
        Self::without_data(UNKNOWN_BLOCK, "Unknown block")
    }

    pub fn invalid_height<T: fmt::Display>(height: T) -> Self {
        Self::without_data(UNKNOWN_BLOCK, format!("Invalid Height: {height}"))
    }

    pub fn unknown_transaction() -> Self {
        Self::without_data(UNKNOWN_TRANSACTION, "Unknown transaction")
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    /// Echoed verbatim from the request, or null when it could not be read.
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn new(id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: None,
        }
    }

    pub fn result(id: Value, result: Value) -> Self {
        Self {
            result: Some(result),
            ..Self::new(id)
        }
    }

    pub fn error(id: Value, error: JsonRpcError) -> Self {
        Self {
            error: Some(error),
            ..Self::new(id)
        }
    }
}

/// Parses a raw request body.
///
/// Numbers keep their textual form, so an `id` such as `1.50` is echoed exactly as sent.
pub fn parse_request(body: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(body)
}
