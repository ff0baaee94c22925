//! Wire-level tests against a canned-response stub node.
//!
//! The stub accepts one HTTP connection per canned response, records each
//! request body, and answers with `Connection: close` so the blocking client
//! reconnects per call. This pins down the exact request JSON the node sees.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, Once};
use std::thread::JoinHandle;

use serde_json::{json, Value};

use mvs_rpc::{ClientError, RpcClient};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mvs_rpc=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

struct StubNode {
    addr: SocketAddr,
    bodies: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubNode {
    /// Serve one connection per canned response body, in order.
    fn spawn(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("stub must bind a local port");
        let addr = listener.local_addr().expect("stub listener must report its address");
        let bodies = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&bodies);
        let handle = std::thread::spawn(move || {
            for response in responses {
                let (stream, _) = listener.accept().expect("stub must accept a connection");
                let body = serve_one(stream, &response);
                recorded
                    .lock()
                    .expect("stub body log must not be poisoned")
                    .push(body);
            }
        });

        Self { addr, bodies, handle }
    }

    fn url(&self) -> String {
        format!("http://{}/rpc/v2", self.addr)
    }

    /// Wait for the stub to finish and return the request bodies it saw.
    fn finish(self) -> Vec<String> {
        self.handle.join().expect("stub thread must not panic");
        Arc::try_unwrap(self.bodies)
            .expect("all stub body references must be dropped")
            .into_inner()
            .expect("stub body log must not be poisoned")
    }
}

/// Read one HTTP request off the stream, answer with `response`, and return
/// the request body.
fn serve_one(stream: TcpStream, response: &str) -> String {
    let mut reader = BufReader::new(stream);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .expect("stub must read request headers");
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value
                    .trim()
                    .parse()
                    .expect("content-length header must be numeric");
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader
        .read_exact(&mut body)
        .expect("stub must read the full request body");

    let mut stream = reader.into_inner();
    let reply = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response}",
        response.len(),
    );
    stream
        .write_all(reply.as_bytes())
        .expect("stub must write its response");

    String::from_utf8(body).expect("request body must be UTF-8")
}

fn result_response(result: Value) -> String {
    json!({"jsonrpc": "2.0", "id": 0, "result": result}).to_string()
}

fn error_response(code: i64, message: &str) -> String {
    json!({"jsonrpc": "2.0", "id": 0, "error": {"code": code, "message": message}}).to_string()
}

fn params_of(body: &str) -> Value {
    let envelope: Value = serde_json::from_str(body).expect("recorded body must be JSON");
    envelope["params"].clone()
}

#[test]
fn getdid_round_trip_matches_wire_format_exactly() {
    init_tracing();
    let stub = StubNode::spawn(vec![result_response(json!({"k": "v"}))]);
    let client = RpcClient::new(&stub.url(), "5s");

    let result = client.get_did("BIAM").expect("stubbed getdid must succeed");
    assert_eq!(result, json!({"k": "v"}));

    let bodies = stub.finish();
    assert_eq!(
        bodies[0],
        r#"{"jsonrpc":"2.0","method":"getdid","params":["BIAM",{}],"id":0}"#
    );

    let health = client.health();
    assert!(!health.sick);
    assert_eq!(health.success_count, 1);
}

#[test]
fn absent_result_comes_back_as_null() {
    init_tracing();
    let stub = StubNode::spawn(vec![r#"{"jsonrpc":"2.0","id":0}"#.to_owned()]);
    let client = RpcClient::new(&stub.url(), "5s");

    let result = client
        .stop_mining("admin", "pass")
        .expect("result-less response must still succeed");
    assert_eq!(result, Value::Null);
    stub.finish();
}

#[test]
fn omitted_options_leave_no_named_keys() {
    init_tracing();
    let stub = StubNode::spawn(vec![result_response(json!("tx")); 2]);
    let client = RpcClient::new(&stub.url(), "5s");

    client
        .send("Alice", "A123456", "MLasJF", 10000, None, None)
        .expect("send without options must succeed");
    client
        .send("Alice", "A123456", "MLasJF", 10000, Some("rent"), Some(0))
        .expect("send with options must succeed");

    let bodies = stub.finish();
    assert_eq!(
        params_of(&bodies[0]),
        json!(["Alice", "A123456", "MLasJF", 10000, {}])
    );
    // Some(0) is transmitted: only None means "use the node default".
    assert_eq!(
        params_of(&bodies[1]),
        json!(["Alice", "A123456", "MLasJF", 10000, {"fee": 0, "memo": "rent"}])
    );
}

#[test]
fn flag_booleans_are_positional_tokens() {
    init_tracing();
    let stub = StubNode::spawn(vec![result_response(json!([])); 3]);
    let client = RpcClient::new(&stub.url(), "5s");

    client
        .get_account_asset("Alice", "A123456", "MVS.ZGC", true)
        .expect("getaccountasset with cert must succeed");
    client
        .get_account_asset("Alice", "A123456", "MVS.ZGC", false)
        .expect("getaccountasset without cert must succeed");
    client
        .list_balances("Alice", "A123456", true, Some(100), None)
        .expect("listbalances must succeed");

    let bodies = stub.finish();
    assert_eq!(
        params_of(&bodies[0]),
        json!(["Alice", "A123456", "MVS.ZGC", "--cert", {}])
    );
    assert_eq!(
        params_of(&bodies[1]),
        json!(["Alice", "A123456", "MVS.ZGC", {}])
    );
    assert_eq!(
        params_of(&bodies[2]),
        json!(["Alice", "A123456", "--nozero", {"greater_equal": 100}])
    );
}

#[test]
fn mixed_flag_and_named_option_placement() {
    init_tracing();
    let stub = StubNode::spawn(vec![result_response(json!({})); 2]);
    let client = RpcClient::new(&stub.url(), "5s");

    client
        .sign_multisig_tx("Alice", "A123456", "deadbeef", Some("02578a"), true)
        .expect("signmultisigtx must succeed");
    client
        .get_mit("MIT.A", true, false, Some(10), None)
        .expect("getmit must succeed");

    let bodies = stub.finish();
    assert_eq!(
        params_of(&bodies[0]),
        json!(["Alice", "A123456", "deadbeef", "--broadcast", {"selfpublickey": "02578a"}])
    );
    assert_eq!(
        params_of(&bodies[1]),
        json!(["MIT.A", "--trace", {"limit": 10}])
    );
}

#[test]
fn mandatory_named_options_always_serialize() {
    init_tracing();
    let stub = StubNode::spawn(vec![result_response(json!({})); 2]);
    let client = RpcClient::new(&stub.url(), "5s");

    client
        .import_account(
            &["notice", "judge", "certain"],
            "robot",
            "robot123456",
            None,
            Some(10),
        )
        .expect("importaccount must succeed");
    client
        .create_raw_tx(0, &["MA1"], &["MB2:100"], None, None, None, None, None)
        .expect("createrawtx must succeed");

    let bodies = stub.finish();
    assert_eq!(
        params_of(&bodies[0]),
        json!([
            "notice judge certain",
            {"accountname": "robot", "hd_index": 10, "password": "robot123456"}
        ])
    );
    assert_eq!(
        params_of(&bodies[1]),
        json!([{"receivers": ["MB2:100"], "senders": ["MA1"], "type": 0}])
    );
}

#[test]
fn optional_positionals_and_range_options() {
    init_tracing();
    let stub = StubNode::spawn(vec![result_response(json!({})); 3]);
    let client = RpcClient::new(&stub.url(), "5s");

    client
        .register_mit("Alice", "A123456", "BIAM", None, None, Some(&["a:1", "b:2"]), None)
        .expect("batch registermit must succeed");
    client
        .dump_keyfile("Alice", "A123456", "robot", None, true)
        .expect("dumpkeyfile must succeed");
    client
        .list_txs("Alice", "A123456", None, Some((1000, 1001)), None, None, None)
        .expect("listtxs must succeed");

    let bodies = stub.finish();
    assert_eq!(
        params_of(&bodies[0]),
        json!(["Alice", "A123456", "BIAM", {"mits": ["a:1", "b:2"]}])
    );
    assert_eq!(
        params_of(&bodies[1]),
        json!(["Alice", "A123456", "robot", "--data", {}])
    );
    assert_eq!(
        params_of(&bodies[2]),
        json!(["Alice", "A123456", {"height": "1000:1001"}])
    );
}

#[test]
fn node_error_surfaces_message_verbatim_and_counts_against_health() {
    init_tracing();
    let stub = StubNode::spawn(vec![error_response(4003, "account not found or incorrect password")]);
    let client = RpcClient::new(&stub.url(), "5s");

    let err = client
        .get_balance("nobody", "wrong")
        .expect_err("node error must fail the call");
    match err {
        ClientError::Node(message) => {
            assert_eq!(message, "account not found or incorrect password");
        }
        other => panic!("expected node error, got {other:?}"),
    }

    stub.finish();
    let health = client.health();
    assert_eq!(health.sick_count, 1);
    assert!(!health.sick);
}

#[test]
fn undecodable_body_is_an_invalid_response() {
    init_tracing();
    let stub = StubNode::spawn(vec!["<html>not json</html>".to_owned()]);
    let client = RpcClient::new(&stub.url(), "5s");

    let err = client
        .get_height("", "")
        .expect_err("malformed body must fail the call");
    assert!(matches!(err, ClientError::InvalidResponse(_)));

    stub.finish();
    assert_eq!(client.health().sick_count, 1);
}

#[test]
fn fifth_consecutive_failure_flags_the_endpoint_sick() {
    init_tracing();
    let stub = StubNode::spawn(vec![error_response(5001, "internal error"); 5]);
    let client = RpcClient::new(&stub.url(), "5s");

    for round in 1..=5u32 {
        let _ = client
            .get_info("", "")
            .expect_err("stubbed error response must fail the call");
        if round < 5 {
            assert!(!client.is_sick(), "round {round} must not flag the endpoint");
        }
    }
    assert!(client.is_sick(), "fifth failure must flag the endpoint");

    stub.finish();

    // The flag is one-directional; only an explicit reset clears it.
    client.reset_health();
    assert!(!client.is_sick());
    assert_eq!(client.health().sick_count, 0);
}

#[test]
fn transport_failure_counts_against_health() {
    init_tracing();
    // Bind then drop to find a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").expect("probe listener must bind");
    let addr = listener.local_addr().expect("probe listener must report its address");
    drop(listener);

    let client = RpcClient::new(&format!("http://{addr}/rpc/v2"), "1s");
    let err = client
        .get_height("", "")
        .expect_err("connection to a closed port must fail");
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(client.health().sick_count, 1);
}
