use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let generator = state.service.generator();
    Json(json!({
        "status": "ok",
        "generator": generator.name(),
        "model": generator.model_hint(),
    }))
}
