//! Node administration and peer commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `getinfo`: node version, protocol, height, and peer count.
    pub fn get_info(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("getinfo", Params::new().arg(admin).arg(auth))
    }

    /// `getpeerinfo`: addresses of currently connected peers.
    pub fn get_peer_info(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("getpeerinfo", Params::new().arg(admin).arg(auth))
    }

    /// `addnode`: add or ban a peer (`operation` is `add` or `ban`, node
    /// default `add`).
    pub fn add_node(
        &self,
        node_address: &str,
        admin: &str,
        auth: &str,
        operation: Option<&str>,
    ) -> Result<Value, ClientError> {
        self.call(
            "addnode",
            Params::new()
                .arg(node_address)
                .arg(admin)
                .arg(auth)
                .opt("operation", operation),
        )
    }

    /// `shutdown`: stop the node process.
    pub fn shutdown(&self, admin: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("shutdown", Params::new().arg(admin).arg(auth))
    }
}
