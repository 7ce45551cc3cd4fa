pub mod health;
pub mod sessions;
pub mod vocabulary;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::{json, Value};
use stylevision_service::image::MAX_IMAGE_BYTES;
use stylevision_service::{LocalService, ServiceError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct InnerAppState {
    pub service: LocalService,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(service: LocalService) -> Router {
    let state = Arc::new(InnerAppState { service });

    Router::new()
        .merge(health::routes())
        .merge(vocabulary::routes())
        .merge(sessions::routes())
        // Leave headroom so oversized images get the service's 400, not a bare 413.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) type ApiError = (StatusCode, Json<Value>);

pub(crate) fn to_error(e: ServiceError) -> ApiError {
    match &e {
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))),
        ServiceError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
        }
        ServiceError::Validation(v) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": e.to_string(),
                "missing": v.missing,
                "labels": v.labels(),
            })),
        ),
        ServiceError::Conflict(_) => (StatusCode::CONFLICT, Json(json!({ "error": e.to_string() }))),
        ServiceError::Internal(_) => {
            tracing::error!("request failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylevision_core::{Field, ValidationError};

    #[test]
    fn validation_maps_to_422_with_missing_fields() {
        let (status, Json(body)) = to_error(ServiceError::Validation(ValidationError {
            missing: vec![Field::Name, Field::Image],
        }));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["labels"], json!(["Product Name", "Product Image"]));
        assert_eq!(body["missing"].as_array().unwrap().len(), 2);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Please fill in all mandatory fields:"));
    }

    #[test]
    fn status_codes_per_error_kind() {
        let cases = [
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                ServiceError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(to_error(err).0, expected);
        }
    }
}
