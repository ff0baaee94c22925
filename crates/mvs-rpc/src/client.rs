//! Blocking HTTP JSON-RPC transport for an MVS node endpoint.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::header;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::ClientError;
use crate::health::{HealthSnapshot, HealthState};
use crate::protocol::{parse_node_error, JsonRpcRequest, JsonRpcResponse, Params, REQUEST_ID};

/// Parse a duration string such as `"1s"` or `"500ms"`.
///
/// Panics on malformed input: the timeout comes from static configuration,
/// and a client with an unknown timeout must not be constructed.
pub fn must_parse_duration(s: &str) -> Duration {
    match humantime::parse_duration(s) {
        Ok(d) => d,
        Err(e) => panic!("can't parse duration `{s}`: {e}"),
    }
}

/// JSON-RPC client for one MVS node endpoint.
///
/// Calls are synchronous: each [`call`](Self::call) performs one blocking
/// round trip bounded by the timeout given at construction. The client
/// tracks failures per endpoint and flags itself sick after repeated
/// failures; the flag is advisory and never blocks a call. Shared use from
/// multiple threads is safe — health counters sit behind a `RwLock` and the
/// underlying HTTP client is itself shareable.
pub struct RpcClient {
    url: String,
    http: reqwest::blocking::Client,
    health: RwLock<HealthState>,
}

impl RpcClient {
    /// Create a client for `url` with the given request timeout
    /// (duration string, e.g. `"5s"`).
    ///
    /// Panics if the timeout cannot be parsed; see [`must_parse_duration`].
    pub fn new(url: &str, timeout: &str) -> Self {
        let timeout = must_parse_duration(timeout);
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client builder uses valid static config");

        Self {
            url: url.to_owned(),
            http,
            health: RwLock::new(HealthState::default()),
        }
    }

    /// The endpoint URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one JSON-RPC call and return the raw `result` value.
    ///
    /// The result shape varies per method and is left undecoded; an absent
    /// `result` comes back as JSON null. Transport failures, undecodable
    /// bodies, and node-reported errors all count against endpoint health.
    pub fn call(&self, method: &str, params: Params) -> Result<Value, ClientError> {
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params: params.into_values(),
            id: REQUEST_ID,
        };
        let body = serde_json::to_vec(&req).expect("request envelope serializes to JSON");
        debug!(rpc.method = method, body_len = body.len(), "rpc call");

        let response = self
            .http
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .map_err(|e| self.fail(method, ClientError::Transport(e)))?;

        let text = response
            .text()
            .map_err(|e| self.fail(method, ClientError::Transport(e)))?;
        trace!(rpc.method = method, body = %text, "rpc response body");

        let decoded: JsonRpcResponse = serde_json::from_str(&text).map_err(|e| {
            self.fail(
                method,
                ClientError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={text}")),
            )
        })?;

        if let Some(err) = decoded.error {
            return Err(self.fail(method, parse_node_error(err)));
        }

        self.health
            .write()
            .expect("health lock must not be poisoned")
            .record_success();
        Ok(decoded.result.unwrap_or(Value::Null))
    }

    /// Whether this endpoint has been flagged sick.
    pub fn is_sick(&self) -> bool {
        self.health
            .read()
            .expect("health lock must not be poisoned")
            .snapshot()
            .sick
    }

    /// Current health counters.
    pub fn health(&self) -> HealthSnapshot {
        self.health
            .read()
            .expect("health lock must not be poisoned")
            .snapshot()
    }

    /// Clear the failure counters and the sick flag. The transport never
    /// recovers on its own; callers that keep a sick client decide when to
    /// give the endpoint another chance.
    pub fn reset_health(&self) {
        self.health
            .write()
            .expect("health lock must not be poisoned")
            .reset();
    }

    /// Record a failed call against endpoint health and pass the error back.
    fn fail(&self, method: &str, err: ClientError) -> ClientError {
        let crossed = self
            .health
            .write()
            .expect("health lock must not be poisoned")
            .record_failure();
        if crossed {
            warn!(url = %self.url, rpc.method = method, "endpoint flagged sick after repeated failures");
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_duration_strings() {
        assert_eq!(must_parse_duration("1s"), Duration::from_secs(1));
        assert_eq!(must_parse_duration("500ms"), Duration::from_millis(500));
    }

    #[test]
    #[should_panic(expected = "can't parse duration")]
    fn malformed_duration_aborts() {
        must_parse_duration("five seconds");
    }

    #[test]
    fn fresh_client_is_healthy() {
        let client = RpcClient::new("http://127.0.0.1:8820/rpc/v2", "1s");
        assert!(!client.is_sick());
        assert_eq!(client.health().sick_count, 0);
        assert_eq!(client.url(), "http://127.0.0.1:8820/rpc/v2");
    }
}
