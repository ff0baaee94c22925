//! Typed wrappers for the node's RPC commands, grouped by category.
//!
//! Each wrapper's only job is argument placement: which values are
//! positional, which become literal `--flag` tokens, and which go into the
//! trailing named-option object. Method names and parameter shapes are
//! dictated by the node's command surface; optional arguments are explicit
//! `Option`s and are omitted from the request when `None`.

mod account;
mod asset;
mod blockchain;
mod did;
mod mining;
mod mit;
mod multisig;
mod node;
mod transaction;
mod wallet;
