// Helpers that boot the check-in server and a stand-in remote store on ephemeral ports.
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use checkin_server::domain::policy::THRESHOLD_METERS;
use checkin_server::interface_adapters::clients::HttpTokenStore;
use checkin_server::interface_adapters::state::AppState;
use serde_json::Value;
use tokio::sync::Mutex;

// Rows received by the fake store, one JSON array per insert call.
pub type ReceivedRows = Arc<Mutex<Vec<Value>>>;

#[derive(Clone)]
struct FakeStoreState {
    rows: ReceivedRows,
    reject: bool,
}

async fn insert_rows(
    State(state): State<FakeStoreState>,
    Json(rows): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if state.reject {
        return (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "message": "duplicate key value" })),
        );
    }
    state.rows.lock().await.push(rows);
    (StatusCode::CREATED, Json(Value::Null))
}

// Start a PostgREST-shaped store that records inserts into `qrcodes`.
pub async fn spawn_fake_store(reject: bool) -> (String, ReceivedRows) {
    let rows: ReceivedRows = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/rest/v1/qrcodes", post(insert_rows))
        .with_state(FakeStoreState {
            rows: rows.clone(),
            reject,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral store port");
    let addr = listener.local_addr().expect("get store addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake store failed");
    });

    (format!("http://{addr}"), rows)
}

// Start the check-in server backed by the store at `store_url`.
pub async fn spawn_server(store_url: &str) -> String {
    let store = HttpTokenStore::new(
        store_url,
        "qrcodes",
        Some("test-key".to_string()),
        Duration::from_secs(2),
    )
    .expect("build store client");
    let state = AppState {
        store: Arc::new(store),
        threshold_m: THRESHOLD_METERS,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral server port");
    let addr = listener.local_addr().expect("get server addr");
    tokio::spawn(async move {
        checkin_server::run(listener, state)
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}
