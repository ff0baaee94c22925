#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network-level failure: connection refused, DNS, TLS, or the request
    /// timeout configured at construction.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a decodable JSON-RPC envelope.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    /// The node answered with a populated `error` field. Displays the
    /// node-supplied message text verbatim; the numeric code is discarded.
    #[error("{0}")]
    Node(String),
}
