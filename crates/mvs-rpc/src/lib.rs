//! JSON-RPC client for the Metaverse (MVS) blockchain node.
//!
//! The node exposes its wallet, asset, DID, MIT, multisig, mining, and admin
//! commands over a JSON-RPC 2.0 HTTP endpoint whose argument convention
//! mirrors the `mvs-cli` command line: an ordered list of positional
//! arguments (plus literal `--flag` tokens), followed by a trailing object of
//! named options. [`RpcClient`] owns the transport and liveness tracking;
//! one typed wrapper per node command lives under [`api`].
//!
//! ```no_run
//! use mvs_rpc::RpcClient;
//!
//! let client = RpcClient::new("http://127.0.0.1:8820/rpc/v2", "5s");
//! let did = client.get_did("BIAM")?;
//! println!("{did}");
//! # Ok::<(), mvs_rpc::ClientError>(())
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod health;
pub mod protocol;

pub use client::RpcClient;
pub use error::ClientError;
pub use health::HealthSnapshot;
pub use protocol::Params;
