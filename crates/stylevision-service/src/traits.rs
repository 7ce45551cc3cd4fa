use async_trait::async_trait;
use bytes::Bytes;
use stylevision_core::{DraftUpdate, StylevisionError, ValidationError, Vocabulary};
use stylevision_store::StoreError;
use thiserror::Error;

use crate::session::{SaveResult, SessionView, UpdateResult};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Validation(ValidationError),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StylevisionError> for ServiceError {
    fn from(e: StylevisionError) -> Self {
        match e {
            StylevisionError::InvalidInput(msg) => ServiceError::InvalidInput(msg),
            StylevisionError::Validation(v) => ServiceError::Validation(v),
            StylevisionError::Conflict(msg) => ServiceError::Conflict(msg),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::Validation(e)
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

/// Product entry operations behind the form.
///
/// `LocalService` runs the pipeline in-process.
/// `HttpService` talks to a running stylevision-server.
#[async_trait]
pub trait EntryService: Send + Sync {
    // -- Form vocabulary --
    async fn vocabulary(&self) -> Result<Vocabulary, ServiceError>;

    // -- Sessions --
    async fn create_session(&self) -> Result<SessionView, ServiceError>;
    async fn get_session(&self, session_id: &str) -> Result<SessionView, ServiceError>;
    /// Discard the draft and start over with a new product id.
    async fn clear(&self, session_id: &str) -> Result<SessionView, ServiceError>;

    // -- Draft editing --
    async fn update_draft(
        &self,
        session_id: &str,
        update: &DraftUpdate,
    ) -> Result<UpdateResult, ServiceError>;
    async fn upload_image(&self, session_id: &str, data: Bytes)
        -> Result<SessionView, ServiceError>;
    async fn generate_description(&self, session_id: &str) -> Result<SessionView, ServiceError>;

    // -- Persistence --
    async fn save(&self, session_id: &str) -> Result<SaveResult, ServiceError>;
    /// Rows saved from this session, as a CSV document with header.
    async fn export_csv(&self, session_id: &str) -> Result<String, ServiceError>;
}
