//! Raw transaction and transaction query commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `createrawtx`: build an unsigned transaction offline.
    ///
    /// `tx_type` 0 transfers ETP, 1 deposits ETP, 3 transfers an asset.
    /// `receivers` entries are `address:amount`, amount in asset units when
    /// `symbol` is set. All three core options are mandatory named entries.
    #[allow(clippy::too_many_arguments)]
    pub fn create_raw_tx(
        &self,
        tx_type: u16,
        senders: &[&str],
        receivers: &[&str],
        symbol: Option<&str>,
        deposit: Option<u16>,
        mychange: Option<&str>,
        message: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "createrawtx",
            Params::new()
                .named("type", tx_type)
                .named("senders", senders)
                .named("receivers", receivers)
                .opt("symbol", symbol)
                .opt("deposit", deposit)
                .opt("mychange", mychange)
                .opt("message", message)
                .opt("fee", fee),
        )
    }

    /// `decoderawtx`: decode a Base16-encoded transaction.
    pub fn decode_raw_tx(&self, transaction: &str) -> Result<Value, ClientError> {
        self.call("decoderawtx", Params::new().arg(transaction))
    }

    /// `signrawtx`: sign a Base16-encoded transaction with the account's keys.
    pub fn sign_raw_tx(
        &self,
        account: &str,
        auth: &str,
        transaction: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "signrawtx",
            Params::new().arg(account).arg(auth).arg(transaction),
        )
    }

    /// `sendrawtx`: broadcast a signed Base16-encoded transaction. `fee`
    /// caps the accepted transaction fee.
    pub fn send_raw_tx(&self, transaction: &str, fee: Option<u64>) -> Result<Value, ClientError> {
        self.call("sendrawtx", Params::new().arg(transaction).opt("fee", fee))
    }

    /// `gettx`: fetch a transaction by hash. The leading boolean positional
    /// selects JSON (`true`) or raw (`false`) encoding.
    pub fn get_tx(&self, json: bool, hash: &str) -> Result<Value, ClientError> {
        self.call("gettx", Params::new().arg(json).arg(hash))
    }

    /// `listtxs`: page through the account's transactions. `height` bounds
    /// results to `[start, end)` and travels as a `start:end` string.
    #[allow(clippy::too_many_arguments)]
    pub fn list_txs(
        &self,
        account: &str,
        auth: &str,
        address: Option<&str>,
        height: Option<(u64, u64)>,
        symbol: Option<&str>,
        limit: Option<u64>,
        index: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "listtxs",
            Params::new()
                .arg(account)
                .arg(auth)
                .opt("address", address)
                .opt("height", height.map(|(start, end)| format!("{start}:{end}")))
                .opt("symbol", symbol)
                .opt("limit", limit)
                .opt("index", index),
        )
    }
}
