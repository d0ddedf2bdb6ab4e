//! Integration tests for the proxied routes.
//!
//! Each test starts a stub upstream on 127.0.0.1 and points the cat/joke
//! URLs at it, then drives the real router.

use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use novelty_api::api::{create_router, AppState};
use novelty_api::config::Config;
use novelty_api::upstream::{UpstreamClient, CAT_PLACEHOLDER_URL};

/// Stub of the cat and joke APIs, one path per scenario.
fn stub_upstream() -> Router {
    Router::new()
        .route("/cat/ok", get(|| async { Json(json!([{"id": "abc", "url": "https://x/y.png"}])) }))
        .route("/cat/mixed", get(|| async {
            Json(json!([{"url": "https://x/1.png"}, {"id": "b"}, {"url": null}]))
        }))
        .route("/cat/no-url", get(|| async { Json(json!([{"id": "a"}, {"url": "https://x/2.png"}])) }))
        .route("/cat/empty", get(|| async { Json(json!([])) }))
        .route("/cat/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/cat/created", get(|| async {
            (StatusCode::CREATED, Json(json!([{"url": "https://x/y.png"}])))
        }))
        .route("/cat/garbage", get(|| async { "not json" }))
        .route("/joke/ok", get(|| async {
            Json(json!({"id": 1, "type": "general", "setup": "Why?", "punchline": "Because."}))
        }))
        .route("/joke/partial", get(|| async { Json(json!({"setup": "Knock knock"})) }))
        .route("/joke/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
}

async fn spawn_stub() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_upstream()).await.unwrap();
    });
    addr
}

/// Router whose upstreams point at `cat_path` / `joke_path` on `addr`.
fn app(addr: SocketAddr, cat_path: &str, joke_path: &str) -> Router {
    let config = Config {
        cat_api_url: format!("http://{}{}", addr, cat_path),
        joke_api_url: format!("http://{}{}", addr, joke_path),
        upstream_timeout_ms: Some(5_000),
        ..Config::default()
    };
    let upstream = UpstreamClient::new(&config).unwrap();
    let state = AppState::new(upstream, "integration-host");
    state.set_ready(true);
    create_router(state)
}

async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn cat_returns_first_image_url() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/ok", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cat_image_url": "https://x/y.png"}));
}

#[tokio::test]
async fn cat_ignores_malformed_later_elements() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/mixed", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cat_image_url": "https://x/1.png"}));
}

#[tokio::test]
async fn cat_first_element_without_url_is_bare_500() {
    let addr = spawn_stub().await;

    let (status, body) = get_raw(app(addr, "/cat/no-url", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"Internal Server Error".to_vec());
}

#[tokio::test]
async fn cat_empty_search_returns_placeholder() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/empty", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cat_image_url": CAT_PLACEHOLDER_URL}));
}

#[tokio::test]
async fn cat_forwards_upstream_404() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/missing", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Failed to fetch cat image"}));
}

#[tokio::test]
async fn cat_treats_other_2xx_as_failure() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/created", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"error": "Failed to fetch cat image"}));
}

#[tokio::test]
async fn cat_undecodable_body_is_bare_500() {
    let addr = spawn_stub().await;

    let (status, body) = get_raw(app(addr, "/cat/garbage", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"Internal Server Error".to_vec());
}

#[tokio::test]
async fn cat_unreachable_upstream_is_bare_500() {
    let addr = spawn_stub().await;
    let mut dead = addr;
    // Bind and drop a listener to get a port nothing is serving.
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    dead.set_port(closed.local_addr().unwrap().port());
    drop(closed);

    let (status, _) = get_raw(app(dead, "/cat/ok", "/joke/ok"), "/cat").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn joke_joins_setup_and_punchline() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/ok", "/joke/ok"), "/joke").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"joke": "Why? - Because."}));
}

#[tokio::test]
async fn joke_missing_punchline_is_empty() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/ok", "/joke/partial"), "/joke").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"joke": "Knock knock - "}));
}

#[tokio::test]
async fn joke_forwards_upstream_500() {
    let addr = spawn_stub().await;

    let (status, body) = get_json(app(addr, "/cat/ok", "/joke/broken"), "/joke").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch joke"}));
}

#[tokio::test]
async fn local_routes_do_not_touch_upstreams() {
    let addr = spawn_stub().await;
    // Upstreams point at failing paths; local routes must still succeed.
    let router = app(addr, "/cat/missing", "/joke/broken");

    for uri in ["/", "/color", "/random-photo", "/time", "/scare", "/lookalike", "/health", "/ready"] {
        let (status, _) = get_json(router.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{} failed", uri);
    }
}

#[tokio::test]
async fn time_is_close_to_wall_clock() {
    let addr = spawn_stub().await;

    let (_, body) = get_json(app(addr, "/cat/ok", "/joke/ok"), "/time").await;

    let served = chrono::NaiveDateTime::parse_from_str(
        body["current_time"].as_str().unwrap(),
        "%Y-%m-%d %H:%M:%S",
    )
    .unwrap();
    let now = chrono::Local::now().naive_local();
    assert!((now - served).num_seconds().abs() <= 5);
}

#[tokio::test]
async fn random_photo_sides_in_range() {
    let addr = spawn_stub().await;
    let router = app(addr, "/cat/ok", "/joke/ok");

    for _ in 0..50 {
        let (_, body) = get_json(router.clone(), "/random-photo").await;
        let url = body["random_photo_url"].as_str().unwrap();
        let rest = url.strip_prefix("https://picsum.photos/").unwrap();
        let (w, h) = rest.split_once('/').unwrap();
        let (w, h): (u32, u32) = (w.parse().unwrap(), h.parse().unwrap());
        assert!((300..=800).contains(&w));
        assert!((300..=800).contains(&h));
    }
}

#[tokio::test]
async fn color_eventually_covers_every_member() {
    let addr = spawn_stub().await;
    let router = app(addr, "/cat/ok", "/joke/ok");

    let mut seen = std::collections::HashSet::new();
    for _ in 0..400 {
        let (_, body) = get_json(router.clone(), "/color").await;
        seen.insert(body["cor"].as_str().unwrap().to_string());
    }
    assert_eq!(seen.len(), novelty_api::catalog::COLORS.len());
}
