//! MST asset commands, including asset certs.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `createasset`: stage a local asset definition prior to `issue`.
    ///
    /// `symbol`, `issuer` (a DID symbol), and `volume` are mandatory named
    /// options. `rate` is the secondary-issue threshold: 0 forbids it, -1
    /// allows it freely, 1..=100 requires that ownership percentage.
    #[allow(clippy::too_many_arguments)]
    pub fn create_asset(
        &self,
        account: &str,
        auth: &str,
        symbol: &str,
        issuer: &str,
        volume: u64,
        rate: Option<i32>,
        decimal_number: Option<u32>,
        description: Option<&str>,
    ) -> Result<Value, ClientError> {
        self.call(
            "createasset",
            Params::new()
                .arg(account)
                .arg(auth)
                .named("symbol", symbol)
                .named("issuer", issuer)
                .named("volume", volume)
                .opt("rate", rate)
                .opt("decimalnumber", decimal_number)
                .opt("description", description),
        )
    }

    /// `issue`: broadcast a staged asset onto the chain. `model` is the
    /// token offering model string (`TYPE=1;LQ=...;LP=...;UN=...`).
    pub fn issue(
        &self,
        account: &str,
        auth: &str,
        symbol: &str,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "issue",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(symbol)
                .opt("model", model)
                .opt("fee", fee),
        )
    }

    /// `secondaryissue`: issue additional volume of an existing asset to a DID.
    #[allow(clippy::too_many_arguments)]
    pub fn secondary_issue(
        &self,
        account: &str,
        auth: &str,
        to_did: &str,
        symbol: &str,
        volume: u64,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "secondaryissue",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_did)
                .arg(symbol)
                .arg(volume)
                .opt("model", model)
                .opt("fee", fee),
        )
    }

    /// `listassets`: assets owned by the account; `cert` restricts the
    /// listing to asset certs.
    pub fn list_assets(&self, account: &str, auth: &str, cert: bool) -> Result<Value, ClientError> {
        self.call(
            "listassets",
            Params::new().arg(account).arg(auth).flag("--cert", cert),
        )
    }

    /// `getasset`: look up an asset by symbol. An empty symbol lists the
    /// whole network's asset symbols.
    pub fn get_asset(&self, symbol: &str, cert: bool) -> Result<Value, ClientError> {
        self.call("getasset", Params::new().arg(symbol).flag("--cert", cert))
    }

    /// `getaccountasset`: account holdings of one asset.
    pub fn get_account_asset(
        &self,
        account: &str,
        auth: &str,
        symbol: &str,
        cert: bool,
    ) -> Result<Value, ClientError> {
        self.call(
            "getaccountasset",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(symbol)
                .flag("--cert", cert),
        )
    }

    /// `getaddressasset`: asset holdings of one address.
    pub fn get_address_asset(&self, address: &str, cert: bool) -> Result<Value, ClientError> {
        self.call(
            "getaddressasset",
            Params::new().arg(address).flag("--cert", cert),
        )
    }

    /// `deletelocalasset`: drop a staged (not yet issued) asset definition.
    pub fn delete_local_asset(
        &self,
        account: &str,
        auth: &str,
        symbol: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "deletelocalasset",
            Params::new().arg(account).arg(auth).named("symbol", symbol),
        )
    }

    /// `sendasset`: transfer asset volume to an address.
    #[allow(clippy::too_many_arguments)]
    pub fn send_asset(
        &self,
        account: &str,
        auth: &str,
        address: &str,
        symbol: &str,
        amount: u64,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "sendasset",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(address)
                .arg(symbol)
                .arg(amount)
                .opt("model", model)
                .opt("fee", fee),
        )
    }

    /// `sendassetfrom`: transfer asset volume between specific addresses.
    #[allow(clippy::too_many_arguments)]
    pub fn send_asset_from(
        &self,
        account: &str,
        auth: &str,
        from_address: &str,
        to_address: &str,
        symbol: &str,
        amount: u64,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "sendassetfrom",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(from_address)
                .arg(to_address)
                .arg(symbol)
                .arg(amount)
                .opt("model", model)
                .opt("fee", fee),
        )
    }

    /// `burn`: destroy asset volume irrevocably.
    pub fn burn(
        &self,
        account: &str,
        auth: &str,
        symbol: &str,
        amount: u64,
    ) -> Result<Value, ClientError> {
        self.call(
            "burn",
            Params::new().arg(account).arg(auth).arg(symbol).arg(amount),
        )
    }

    // ==========================================================================
    // Asset certs
    // ==========================================================================

    /// `issuecert`: issue an asset cert (`ISSUE`, `DOMAIN`, or `NAMING`)
    /// to a DID.
    pub fn issue_cert(
        &self,
        account: &str,
        auth: &str,
        to_did: &str,
        symbol: &str,
        cert: &str,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "issuecert",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_did)
                .arg(symbol)
                .arg(cert)
                .opt("fee", fee),
        )
    }

    /// `transfercert`: move an asset cert to another DID.
    pub fn transfer_cert(
        &self,
        account: &str,
        auth: &str,
        to_did: &str,
        symbol: &str,
        cert: &str,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "transfercert",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_did)
                .arg(symbol)
                .arg(cert)
                .opt("fee", fee),
        )
    }
}
