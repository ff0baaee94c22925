//! Mining control and proof-of-work commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `startmining`: start solo CPU mining. Without `address` the node
    /// generates a fresh one; `number` limits how many blocks to mine
    /// (useful on testnets).
    pub fn start_mining(
        &self,
        account: &str,
        auth: &str,
        address: Option<&str>,
        number: Option<u16>,
    ) -> Result<Value, ClientError> {
        self.call(
            "startmining",
            Params::new()
                .arg(account)
                .arg(auth)
                .opt("address", address)
                .opt("number", number),
        )
    }

    /// `stopmining`: stop solo mining.
    pub fn stop_mining(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("stopmining", Params::new().arg(admin).arg(auth))
    }

    /// `setminingaccount`: set the coinbase payout address.
    pub fn set_mining_account(
        &self,
        account: &str,
        auth: &str,
        address: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "setminingaccount",
            Params::new().arg(account).arg(auth).arg(address),
        )
    }

    /// `getmininginfo`: current mining status and hash rate.
    pub fn get_mining_info(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("getmininginfo", Params::new().arg(admin).arg(auth))
    }

    /// `getwork`: fetch an ethash work package for an external miner.
    pub fn get_work(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("getwork", Params::new().arg(admin).arg(auth))
    }

    /// `submitwork`: submit an ethash solution. `nonce` has no `0x` prefix;
    /// the two hashes keep theirs.
    pub fn submit_work(
        &self,
        nonce: &str,
        header_hash: &str,
        mix_hash: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "submitwork",
            Params::new().arg(nonce).arg(header_hash).arg(mix_hash),
        )
    }
}
