use std::sync::Arc;

use pocket_quant::config::Config;
use pocket_quant::processor;
use pocket_quant::state::SharedState;

#[tokio::test]
async fn missing_token_never_reaches_streaming() {
    // default config carries an empty token, so the session must refuse to
    // start before opening any socket
    let config = Arc::new(Config::default());
    let shared = SharedState::new();
    assert!(shared.try_start());

    processor::run(shared.clone(), config).await;

    let snap = shared.snapshot();
    assert!(!snap.running);
    assert!(snap.prices.is_empty());
    let err = snap.last_error.expect("config error should be recorded");
    assert_eq!(err.kind, "config");
    assert!(err.message.contains("token"));
}

#[tokio::test]
async fn second_start_is_rejected_while_running() {
    let shared = SharedState::new();
    assert!(shared.try_start());
    // the presentation layer checks this before spawning a second loop
    assert!(!shared.try_start());
    shared.request_stop();
    assert!(shared.try_start());
}
