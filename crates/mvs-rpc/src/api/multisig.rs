//! Multi-signature account and transaction commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `getnewmultisig`: derive a multisig address from the cosigner set.
    /// `signature_num`-of-`public_key_num`, with `self_public_key` owned by
    /// this account and `public_keys` the cosigners'.
    #[allow(clippy::too_many_arguments)]
    pub fn get_new_multisig(
        &self,
        account: &str,
        auth: &str,
        signature_num: u16,
        public_key_num: u16,
        self_public_key: &str,
        public_keys: Option<&[&str]>,
        description: Option<&str>,
    ) -> Result<Value, ClientError> {
        self.call(
            "getnewmultisig",
            Params::new()
                .arg(account)
                .arg(auth)
                .named("signaturenum", signature_num)
                .named("publickeynum", public_key_num)
                .named("selfpublickey", self_public_key)
                .opt("publickey", public_keys.map(Value::from))
                .opt("description", description),
        )
    }

    /// `listmultisig`: multisig records of the account.
    pub fn list_multisig(&self, account: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("listmultisig", Params::new().arg(account).arg(auth))
    }

    /// `deletemultisig`: drop the record for a multisig address.
    pub fn delete_multisig(
        &self,
        account: &str,
        auth: &str,
        address: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "deletemultisig",
            Params::new().arg(account).arg(auth).arg(address),
        )
    }

    /// `createmultisigtx`: build an unsigned transaction spending from a
    /// multisig address. `tx_type` 0 transfers ETP, 3 transfers an asset
    /// (with `symbol` set).
    #[allow(clippy::too_many_arguments)]
    pub fn create_multisig_tx(
        &self,
        account: &str,
        auth: &str,
        from_address: &str,
        to_address: &str,
        amount: u64,
        symbol: Option<&str>,
        tx_type: Option<u16>,
        fee: Option<u64>,
    ) -> Result<Value, ClientError> {
        self.call(
            "createmultisigtx",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(from_address)
                .arg(to_address)
                .arg(amount)
                .opt("symbol", symbol)
                .opt("type", tx_type)
                .opt("fee", fee),
        )
    }

    /// `signmultisigtx`: add this account's signature to a hex-encoded
    /// multisig transaction; `broadcast` relays it once fully signed.
    pub fn sign_multisig_tx(
        &self,
        account: &str,
        auth: &str,
        transaction: &str,
        self_public_key: Option<&str>,
        broadcast: bool,
    ) -> Result<Value, ClientError> {
        self.call(
            "signmultisigtx",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(transaction)
                .flag("--broadcast", broadcast)
                .opt("selfpublickey", self_public_key),
        )
    }
}
