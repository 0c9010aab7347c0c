use pocket_quant::feed::types::{AuthorizeRequest, FeedMessage, TicksRequest};

#[test]
fn serialize_authorize_request() {
    let req = AuthorizeRequest {
        authorize: "s3cret".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"authorize":"s3cret"}"#
    );
}

#[test]
fn serialize_ticks_request() {
    let req = TicksRequest {
        ticks: "R_100".to_string(),
    };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"ticks":"R_100"}"#);
}

#[test]
fn deserialize_tick_message() {
    let json = r#"{
        "echo_req": { "ticks": "R_100" },
        "msg_type": "tick",
        "subscription": { "id": "abc123" },
        "tick": {
            "ask": 1690.61,
            "bid": 1690.21,
            "epoch": 1700000000,
            "id": "abc123",
            "quote": 1690.41,
            "symbol": "R_100"
        }
    }"#;
    let msg: FeedMessage = serde_json::from_str(json).unwrap();
    let tick = msg.tick.expect("tick payload");
    assert!((tick.quote - 1690.41).abs() < f64::EPSILON);
    assert_eq!(tick.epoch, 1_700_000_000);
    assert_eq!(tick.symbol, "R_100");
    assert!(msg.error.is_none());
    assert_eq!(msg.msg_type.as_deref(), Some("tick"));
}

#[test]
fn non_tick_messages_carry_no_payload() {
    let json = r#"{
        "echo_req": { "authorize": "<not shown>" },
        "msg_type": "authorize",
        "authorize": { "balance": 10000.0, "loginid": "VRTC1234" }
    }"#;
    let msg: FeedMessage = serde_json::from_str(json).unwrap();
    assert!(msg.tick.is_none());
    assert!(msg.error.is_none());
    assert_eq!(msg.msg_type.as_deref(), Some("authorize"));
}

#[test]
fn deserialize_feed_error() {
    let json = r#"{
        "echo_req": { "authorize": "<not shown>" },
        "msg_type": "authorize",
        "error": { "code": "InvalidToken", "message": "The token is invalid." }
    }"#;
    let msg: FeedMessage = serde_json::from_str(json).unwrap();
    let err = msg.error.expect("error payload");
    assert_eq!(err.code, "InvalidToken");
    assert_eq!(err.message, "The token is invalid.");
    assert!(msg.tick.is_none());
}
