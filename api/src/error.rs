use {
    crate::{
        json_utils::ParamError,
        jsonrpc::{JsonRpcError, INTERNAL_ERROR},
    },
    noderpc_blockchain::DecodeError,
    std::fmt,
    thiserror::Error,
};

/// Failure of a single handler invocation.
///
/// Only the [`Error::Rpc`] variant carries a client-facing code of its own. Every other variant is
/// reported as an internal error with its message.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Rpc(#[from] JsonRpcError),
    #[error("{0}")]
    Params(#[from] ParamError),
    #[error("Invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("Backend unavailable: {0}")]
    Backend(String),
}

/// Wraps a ledger or node failure. Their error types are only required to be [`fmt::Debug`].
pub fn backend_error<E: fmt::Debug>(e: E) -> Error {
    Error::Backend(format!("{e:?}"))
}

impl Error {
    pub fn into_rpc_error(self, include_diagnostics: bool) -> JsonRpcError {
        match self {
            Self::Rpc(e) => e,
            other if include_diagnostics => {
                JsonRpcError::with_data(INTERNAL_ERROR, other.to_string(), other.diagnostics())
            }
            other => JsonRpcError::without_data(INTERNAL_ERROR, other.to_string()),
        }
    }

    fn diagnostics(&self) -> serde_json::Value {
        let mut causes = Vec::new();
        let mut source = std::error::Error::source(self);
        while let Some(e) = source {
            causes.push(e.to_string());
            source = std::error::Error::source(e);
        }
        serde_json::json!({
            "debug": format!("{self:?}"),
            "causes": causes,
        })
    }
}
