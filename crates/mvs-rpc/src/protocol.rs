//! JSON-RPC 2.0 wire envelopes and the node's parameter convention.
//!
//! The MVS node inherits its RPC argument shape from the `mvs-cli` command
//! line: `params` is an array of positional arguments (with boolean filters
//! spelled as literal `--flag` tokens), terminated by an object of named
//! options. The trailing object is always present, even when empty.

use serde_json::Value;

use crate::error::ClientError;

/// Every request carries id 0. The transport is synchronous — one request,
/// one response per call — so no correlation between in-flight ids is needed.
pub(crate) const REQUEST_ID: u64 = 0;

#[derive(serde::Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub(crate) jsonrpc: &'static str,
    pub(crate) method: &'a str,
    pub(crate) params: Vec<Value>,
    pub(crate) id: u64,
}

#[derive(serde::Deserialize)]
pub(crate) struct JsonRpcResponse {
    pub(crate) result: Option<Value>,
    pub(crate) error: Option<Value>,
}

/// Builder for a node call's parameter array.
///
/// Optional named arguments are explicit: `None` omits the key entirely,
/// `Some(v)` serializes it — including `Some(0)` and `Some("")`. The node
/// cannot tell an omitted option from its default, so wrappers never invent
/// a value the caller did not pass.
#[derive(Debug, Default)]
pub struct Params {
    positional: Vec<Value>,
    named: serde_json::Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a positional argument only when present. A few commands
    /// (`registermit`, `dumpkeyfile`) have trailing positionals the node
    /// treats as optional.
    pub fn opt_arg(mut self, value: Option<impl Into<Value>>) -> Self {
        if let Some(v) = value {
            self.positional.push(v.into());
        }
        self
    }

    /// Append a literal flag token (e.g. `"--cert"`) to the positional list
    /// when `enabled`. A disabled flag leaves no trace in the request.
    pub fn flag(mut self, token: &'static str, enabled: bool) -> Self {
        if enabled {
            self.positional.push(Value::from(token));
        }
        self
    }

    /// Insert a named option the node requires on every call.
    pub fn named(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.named.insert(key.to_owned(), value.into());
        self
    }

    /// Insert a named option only when present.
    pub fn opt(mut self, key: &str, value: Option<impl Into<Value>>) -> Self {
        if let Some(v) = value {
            self.named.insert(key.to_owned(), v.into());
        }
        self
    }

    /// Finish the array: positionals first, then the named-option object.
    /// The object is appended even when empty — the node expects it.
    pub(crate) fn into_values(self) -> Vec<Value> {
        let mut values = self.positional;
        values.push(Value::Object(self.named));
        values
    }
}

/// Parse a JSON-RPC error value into a [`ClientError`].
///
/// JSON-RPC defines errors as `{"code": <int>, "message": <string>}`; the node's
/// message text is surfaced verbatim and the code dropped. Anything else
/// becomes `InvalidResponse` carrying the raw JSON.
pub(crate) fn parse_node_error(err: Value) -> ClientError {
    #[derive(serde::Deserialize)]
    struct NodeError {
        #[allow(dead_code)]
        code: i64,
        message: String,
    }

    match serde_json::from_value::<NodeError>(err.clone()) {
        Ok(parsed) => ClientError::Node(parsed.message),
        Err(_) => ClientError::InvalidResponse(format!("non-standard JSON-RPC error: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_params_serialize_to_lone_object() {
        let values = Params::new().into_values();
        assert_eq!(json!(values), json!([{}]));
    }

    #[test]
    fn positionals_precede_named_object() {
        let values = Params::new()
            .arg("alice")
            .arg("secret")
            .arg(10000u64)
            .opt("memo", Some("rent"))
            .into_values();
        assert_eq!(json!(values), json!(["alice", "secret", 10000, {"memo": "rent"}]));
    }

    #[test]
    fn absent_option_leaves_no_key() {
        let values = Params::new().arg("x").opt("fee", None::<u64>).into_values();
        assert_eq!(json!(values), json!(["x", {}]));
    }

    #[test]
    fn present_zero_option_is_serialized() {
        // The explicit Option API deliberately transmits Some(0); only None
        // means "use the node default".
        let values = Params::new().opt("fee", Some(0u64)).into_values();
        assert_eq!(json!(values), json!([{"fee": 0}]));
    }

    #[test]
    fn enabled_flag_is_a_positional_token() {
        let values = Params::new()
            .arg("alice")
            .flag("--cert", true)
            .into_values();
        assert_eq!(json!(values), json!(["alice", "--cert", {}]));
    }

    #[test]
    fn disabled_flag_is_absent_everywhere() {
        let values = Params::new()
            .arg("alice")
            .flag("--cert", false)
            .into_values();
        assert_eq!(json!(values), json!(["alice", {}]));
    }

    #[test]
    fn optional_positional_appended_only_when_present() {
        let with = Params::new().arg("a").opt_arg(Some("SYM")).into_values();
        assert_eq!(json!(with), json!(["a", "SYM", {}]));

        let without = Params::new().arg("a").opt_arg(None::<&str>).into_values();
        assert_eq!(json!(without), json!(["a", {}]));
    }

    #[test]
    fn request_envelope_field_order() {
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            method: "getdid",
            params: Params::new().arg("BIAM").into_values(),
            id: REQUEST_ID,
        };
        let body = serde_json::to_string(&req).expect("envelope must serialize");
        assert_eq!(
            body,
            r#"{"jsonrpc":"2.0","method":"getdid","params":["BIAM",{}],"id":0}"#
        );
    }

    #[test]
    fn parse_node_error_standard_shape() {
        let err = parse_node_error(json!({"code": 3001, "message": "account not found"}));
        assert!(matches!(err, ClientError::Node(msg) if msg == "account not found"));
    }

    #[test]
    fn parse_node_error_non_standard_shape() {
        let err = parse_node_error(json!("boom"));
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
