//! Block and chain query commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `getheight`: current chain height. The admin credentials are only
    /// checked when the node runs with `administrator_required`.
    pub fn get_height(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("getheight", Params::new().arg(admin).arg(auth))
    }

    /// `getblock`: fetch a block by hash or height. The boolean positionals
    /// select JSON or raw encoding for the block and its transactions.
    pub fn get_block(
        &self,
        hash_or_height: &str,
        json: bool,
        tx_json: bool,
    ) -> Result<Value, ClientError> {
        self.call(
            "getblock",
            Params::new().arg(hash_or_height).arg(json).arg(tx_json),
        )
    }

    /// `getblockheader`: fetch a header by hash or height; both selectors
    /// are named options and the node picks whichever is given.
    pub fn get_block_header(
        &self,
        hash: Option<&str>,
        height: Option<u32>,
    ) -> Result<Value, ClientError> {
        self.call(
            "getblockheader",
            Params::new().opt("hash", hash).opt("height", height),
        )
    }

    /// `fetchheaderext`: extended header info for a block number, or
    /// `earliest`, `latest`, `pending`.
    pub fn fetch_header_ext(
        &self,
        account: &str,
        auth: &str,
        number: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "fetchheaderext",
            Params::new().arg(account).arg(auth).arg(number),
        )
    }

    /// `getmemorypool`: transactions waiting in the mempool. The node
    /// defaults `json` to true.
    pub fn get_memory_pool(
        &self,
        json: Option<bool>,
        admin: &str,
        auth: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "getmemorypool",
            Params::new().arg(admin).arg(auth).opt("json", json),
        )
    }

    /// `popblock`: discard all blocks at or above `height`. Testnet tooling.
    pub fn pop_block(&self, height: u32) -> Result<Value, ClientError> {
        self.call("popblock", Params::new().arg(height))
    }
}
