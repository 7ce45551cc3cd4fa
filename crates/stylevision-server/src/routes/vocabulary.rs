use axum::extract::State;
use axum::{routing::get, Json, Router};
use stylevision_core::Vocabulary;
use stylevision_service::EntryService;

use super::{to_error, ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/vocabulary", get(vocabulary))
}

async fn vocabulary(State(state): State<AppState>) -> Result<Json<Vocabulary>, ApiError> {
    state.service.vocabulary().await.map(Json).map_err(to_error)
}
