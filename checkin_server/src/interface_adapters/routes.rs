use crate::interface_adapters::handlers::{health, issue_token, verify_scan};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tokens", post(issue_token))
        .route("/checkins/verify", post(verify_scan))
        .with_state(state)
}
