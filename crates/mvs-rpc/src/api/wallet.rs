//! ETP balance and transfer commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `getbalance`: account ETP balance summary.
    pub fn get_balance(&self, account: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("getbalance", Params::new().arg(account).arg(auth))
    }

    /// `listbalances`: per-address balances. `nozero` filters empty
    /// addresses; the bounds select addresses by confirmed ETP bits.
    pub fn list_balances(
        &self,
        account: &str,
        auth: &str,
        nozero: bool,
        greater_equal: Option<u64>,
        lesser_equal: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "listbalances",
            Params::new()
                .arg(account)
                .arg(auth)
                .flag("--nozero", nozero)
                .opt("greater_equal", greater_equal)
                .opt("lesser_equal", lesser_equal),
        )
    }

    /// `getaddressetp`: ETP balance of a single address.
    pub fn get_address_etp(&self, address: &str) -> Result<Value, ClientError> {
        self.call("getaddressetp", Params::new().arg(address))
    }

    /// `deposit`: lock ETP for interest. The node supports deposit periods
    /// of 7, 30, 90, 182, or 365 days and defaults to 7.
    pub fn deposit(
        &self,
        account: &str,
        auth: &str,
        amount: u64,
        address: Option<&str>,
        deposit: Option<u16>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "deposit",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(amount)
                .opt("address", address)
                .opt("deposit", deposit)
                .opt("fee", fee),
        )
    }

    /// `send`: pay `amount` ETP bits to `to_address`.
    pub fn send(
        &self,
        account: &str,
        auth: &str,
        to_address: &str,
        amount: u64,
        memo: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "send",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(to_address)
                .arg(amount)
                .opt("memo", memo)
                .opt("fee", fee),
        )
    }

    /// `sendfrom`: pay from a specific address.
    #[allow(clippy::too_many_arguments)]
    pub fn send_from(
        &self,
        account: &str,
        auth: &str,
        from_address: &str,
        to_address: &str,
        amount: u64,
        memo: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "sendfrom",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(from_address)
                .arg(to_address)
                .arg(amount)
                .opt("memo", memo)
                .opt("fee", fee),
        )
    }

    /// `sendmore`: pay several receivers in one transaction. Each receiver
    /// entry is `address:etp_bits`.
    pub fn send_more(
        &self,
        account: &str,
        auth: &str,
        receivers: &[&str],
        mychange: Option<&str>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "sendmore",
            Params::new()
                .arg(account)
                .arg(auth)
                .named("receivers", receivers)
                .opt("mychange", mychange)
                .opt("fee", fee),
        )
    }
}
