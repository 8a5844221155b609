//! End-to-end tests against a running server.

use std::time::{Duration, Instant};

use emotion_api::http::ANALYZE_PATH;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

mod common;

fn assert_cors(res: &reqwest::Response) {
    let headers = res.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, GET, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn test_analyze_happy_reflection() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;

    let res = common::client()
        .post(format!("http://{}{}", addr, ANALYZE_PATH))
        .json(&json!({"text": "I feel so happy today"}))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_cors(&res);
    assert_eq!(res.headers()["content-type"], "application/json");

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["emotion"], "Happy");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    let confidence = body["confidence"].as_f64().unwrap();
    assert!(confidence <= 0.95);

    shutdown.trigger();
}

#[tokio::test]
async fn test_error_responses() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;
    let client = common::client();
    let url = format!("http://{}{}", addr, ANALYZE_PATH);

    let res = client.post(&url).json(&json!({"text": "   "})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_cors(&res);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": true, "message": "Text input is required", "status": 400}));

    let res = client.post(&url).body("not json").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid JSON format");

    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_cors(&res);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 404);

    let res = client
        .post(format!("http://{}/unknown", addr))
        .json(&json!({"text": "happy"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}

#[tokio::test]
async fn test_preflight() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;

    let res = common::client()
        .request(reqwest::Method::OPTIONS, format!("http://{}{}", addr, ANALYZE_PATH))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_cors(&res);
    assert!(res.bytes().await.unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let mut config = common::test_config();
    config.analysis.processing_delay_ms = 300;
    let (addr, shutdown) = common::start_server(config).await;
    let client = common::client();
    let url = format!("http://{}{}", addr, ANALYZE_PATH);

    let start = Instant::now();
    let (angry, calm) = tokio::join!(
        client.post(&url).json(&json!({"text": "I am so furious right now"})).send(),
        client.post(&url).json(&json!({"text": "A serene walk by the lake"})).send(),
    );

    let angry: Value = angry.unwrap().json().await.unwrap();
    let calm: Value = calm.unwrap().json().await.unwrap();
    assert_eq!(angry["emotion"], "Angry");
    assert_eq!(calm["emotion"], "Calm");

    // Both delays run side by side rather than back to back.
    assert!(start.elapsed() < Duration::from_millis(550), "took {:?}", start.elapsed());

    shutdown.trigger();
}

#[tokio::test]
async fn test_seeded_server_is_reproducible() {
    let mut config = common::test_config();
    config.analysis.rng_seed = Some(2024);
    let (addr, shutdown) = common::start_server(config).await;
    let client = common::client();
    let url = format!("http://{}{}", addr, ANALYZE_PATH);

    let mut seen = Vec::new();
    for _ in 0..3 {
        let res = client.post(&url).json(&json!({"text": "just a regular tuesday"})).send().await.unwrap();
        let body: Value = res.json().await.unwrap();
        seen.push(body);
    }
    assert!(seen.windows(2).all(|w| w[0] == w[1]));

    shutdown.trigger();
}

#[tokio::test]
async fn test_truncated_body_does_not_affect_listener() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;

    // Claims 100 bytes, sends a fragment, then hangs up.
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(
            b"POST /analyze HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"text\": \"hap",
        )
        .await
        .unwrap();
    stream.shutdown().await.unwrap();
    drop(stream);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let res = common::client()
        .post(format!("http://{}{}", addr, ANALYZE_PATH))
        .json(&json!({"text": "I am proud of this"}))
        .send()
        .await
        .expect("listener stopped after a truncated request");
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["emotion"], "Confident");

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_listener() {
    let (addr, shutdown) = common::start_server(common::test_config()).await;
    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = common::client()
        .post(format!("http://{}{}", addr, ANALYZE_PATH))
        .json(&json!({"text": "calm"}))
        .send()
        .await;
    assert!(res.is_err());
}
