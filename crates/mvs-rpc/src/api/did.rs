//! Digital identity (DID) commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `registerdid`: bind a DID symbol to an address.
    pub fn register_did(
        &self,
        account: &str,
        auth: &str,
        address: &str,
        symbol: &str,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "registerdid",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(address)
                .arg(symbol)
                .opt("fee", fee),
        )
    }

    /// `didchangeaddress`: rebind a DID symbol to a different address.
    pub fn did_change_address(
        &self,
        account: &str,
        auth: &str,
        to_address: &str,
        symbol: &str,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "didchangeaddress",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_address)
                .arg(symbol)
                .opt("fee", fee),
        )
    }

    /// `getdid`: look up a DID by symbol or address. An empty string lists
    /// the whole network's DIDs.
    pub fn get_did(&self, did_or_address: &str) -> Result<Value, ClientError> {
        self.call("getdid", Params::new().arg(did_or_address))
    }

    /// `listdids`: DIDs owned by the account.
    pub fn list_dids(&self, account: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("listdids", Params::new().arg(account).arg(auth))
    }

    /// `didsend`: pay ETP to a DID or address.
    pub fn did_send(
        &self,
        account: &str,
        auth: &str,
        to: &str,
        amount: u64,
        memo: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "didsend",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to)
                .arg(amount)
                .opt("memo", memo)
                .opt("fee", fee),
        )
    }

    /// `didsendfrom`: pay ETP between specific DIDs/addresses.
    #[allow(clippy::too_many_arguments)]
    pub fn did_send_from(
        &self,
        account: &str,
        auth: &str,
        from: &str,
        to: &str,
        amount: u64,
        memo: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "didsendfrom",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(from)
                .arg(to)
                .arg(amount)
                .opt("memo", memo)
                .opt("fee", fee),
        )
    }

    /// `didsendmore`: pay several receivers (`did_or_address:etp_bits`) in
    /// one transaction.
    pub fn did_send_more(
        &self,
        account: &str,
        auth: &str,
        receivers: &[&str],
        mychange: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "didsendmore",
            Params::new()
                .arg(account)
                .arg(auth)
                .named("receivers", receivers)
                .opt("mychange", mychange)
                .opt("fee", fee),
        )
    }

    /// `didsendasset`: transfer asset volume to a DID or address.
    #[allow(clippy::too_many_arguments)]
    pub fn did_send_asset(
        &self,
        account: &str,
        auth: &str,
        to: &str,
        asset: &str,
        amount: u64,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "didsendasset",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to)
                .arg(asset)
                .arg(amount)
                .opt("model", model)
                .opt("fee", fee),
        )
    }

    /// `didsendassetfrom`: transfer asset volume between specific
    /// DIDs/addresses.
    #[allow(clippy::too_many_arguments)]
    pub fn did_send_asset_from(
        &self,
        account: &str,
        auth: &str,
        from: &str,
        to: &str,
        symbol: &str,
        amount: u64,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "didsendassetfrom",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(from)
                .arg(to)
                .arg(symbol)
                .arg(amount)
                .opt("model", model)
                .opt("fee", fee),
        )
    }
}
