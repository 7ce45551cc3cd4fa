use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use stylevision_core::DraftUpdate;
use stylevision_service::{EntryService, SaveResult, SessionView, UpdateResult};

use super::{to_error, ApiError, AppState};

/// Filename offered for the per-session download.
const EXPORT_FILENAME: &str = "saved_product.csv";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_session))
        .route("/api/sessions/{id}/draft", put(update_draft))
        .route("/api/sessions/{id}/image", put(upload_image))
        .route("/api/sessions/{id}/description", post(generate_description))
        .route("/api/sessions/{id}/save", post(save))
        .route("/api/sessions/{id}/clear", post(clear))
        .route("/api/sessions/{id}/export", get(export_csv))
}

async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    state
        .service
        .create_session()
        .await
        .map(|s| (StatusCode::CREATED, Json(s)))
        .map_err(to_error)
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    state.service.get_session(&id).await.map(Json).map_err(to_error)
}

async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<DraftUpdate>,
) -> Result<Json<UpdateResult>, ApiError> {
    state
        .service
        .update_draft(&id, &update)
        .await
        .map(Json)
        .map_err(to_error)
}

async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, ApiError> {
    state
        .service
        .upload_image(&id, body)
        .await
        .map(Json)
        .map_err(to_error)
}

async fn generate_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .service
        .generate_description(&id)
        .await
        .map(Json)
        .map_err(to_error)
}

async fn save(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SaveResult>, ApiError> {
    state.service.save(&id).await.map(Json).map_err(to_error)
}

async fn clear(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    state.service.clear(&id).await.map(Json).map_err(to_error)
}

async fn export_csv(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = state.service.export_csv(&id).await.map_err(to_error)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
