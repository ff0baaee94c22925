//! MIT (Metaverse Identifiable Token) commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `registermit`: register one MIT (`symbol` + `content`) or a batch
    /// (`mits`, entries of `symbol:content`) under a DID.
    ///
    /// `symbol` is an optional trailing positional on the wire; it is left
    /// out entirely for batch registration.
    #[allow(clippy::too_many_arguments)]
    pub fn register_mit(
        &self,
        account: &str,
        auth: &str,
        to_did: &str,
        symbol: Option<&str>,
        content: Option<&str>,
        mits: Option<&[&str]>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "registermit",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_did)
                .opt_arg(symbol)
                .opt("content", content)
                .opt("mits", mits.map(Value::from))
                .opt("fee", fee),
        )
    }

    /// `transfermit`: move a MIT to another DID.
    pub fn transfer_mit(
        &self,
        account: &str,
        auth: &str,
        to_did: &str,
        symbol: &str,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "transfermit",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_did)
                .arg(symbol)
                .opt("fee", fee),
        )
    }

    /// `getmit`: look up a MIT by symbol (empty symbol lists the whole
    /// network). `trace` returns the transfer history, `current` only the
    /// latest state; `limit`/`index` page the history.
    pub fn get_mit(
        &self,
        symbol: &str,
        trace: bool,
        current: bool,
        limit: Option<u32>,
        index: Option<u32>,
    ) -> Result<Value, ClientError> {
        self.call(
            "getmit",
            Params::new()
                .arg(symbol)
                .flag("--trace", trace)
                .flag("--current", current)
                .opt("limit", limit)
                .opt("index", index),
        )
    }

    /// `listmits`: MITs owned by the account.
    pub fn list_mits(&self, account: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("listmits", Params::new().arg(account).arg(auth))
    }
}
