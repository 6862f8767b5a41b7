use {crate::jsonrpc::JsonRpcError, std::str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodName {
    GetBestBlockHash,
    GetBlock,
    GetBlockCount,
    GetBlockHash,
    GetConnectionCount,
    GetRawMempool,
    GetRawTransaction,
    GetTxOut,
    GetVersion,
    SendRawTransaction,
    SubmitBlock,
}

impl MethodName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetBestBlockHash => "getbestblockhash",
            Self::GetBlock => "getblock",
            Self::GetBlockCount => "getblockcount",
            Self::GetBlockHash => "getblockhash",
            Self::GetConnectionCount => "getconnectioncount",
            Self::GetRawMempool => "getrawmempool",
            Self::GetRawTransaction => "getrawtransaction",
            Self::GetTxOut => "gettxout",
            Self::GetVersion => "getversion",
            Self::SendRawTransaction => "sendrawtransaction",
            Self::SubmitBlock => "submitblock",
        }
    }

    /// Whether the method hands data to the node for propagation instead of only reading.
    pub fn is_relay(&self) -> bool {
        matches!(self, Self::SendRawTransaction | Self::SubmitBlock)
    }
}

impl FromStr for MethodName {
    type Err = JsonRpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "getbestblockhash" => Self::GetBestBlockHash,
            "getblock" => Self::GetBlock,
            "getblockcount" => Self::GetBlockCount,
            "getblockhash" => Self::GetBlockHash,
            "getconnectioncount" => Self::GetConnectionCount,
            "getrawmempool" => Self::GetRawMempool,
            "getrawtransaction" => Self::GetRawTransaction,
            "gettxout" => Self::GetTxOut,
            "getversion" => Self::GetVersion,
            "sendrawtransaction" => Self::SendRawTransaction,
            "submitblock" => Self::SubmitBlock,
            _ => return Err(JsonRpcError::method_not_found()),
        })
    }
}
