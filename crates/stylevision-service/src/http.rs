use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use stylevision_core::{DraftUpdate, Field, ValidationError, Vocabulary};

use crate::session::{SaveResult, SessionView, UpdateResult};
use crate::{EntryService, ServiceError};

/// Async HTTP client implementation of EntryService.
/// Connects to a running stylevision-server.
pub struct HttpService {
    base_url: String,
    client: Client,
}

impl HttpService {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Check if the server is reachable.
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        let resp = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::Internal(format!("connection failed: {e}")))?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ServiceError::Internal(format!(
                "health check failed: {}",
                resp.status()
            )))
        }
    }

    fn session_path(session_id: &str, rest: &str) -> String {
        format!("/api/sessions/{session_id}{rest}")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        handle_response(resp).await
    }

    async fn get_text(&self, path: &str) -> Result<String, ServiceError> {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            resp.text()
                .await
                .map_err(|e| ServiceError::Internal(format!("read body: {e}")))
        } else {
            Err(parse_error_with_status(status, resp).await)
        }
    }

    async fn post_empty<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let resp = self
            .client
            .post(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        handle_response(resp).await
    }

    async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let resp = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        handle_response(resp).await
    }

    async fn put_bytes<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        body: Bytes,
    ) -> Result<T, ServiceError> {
        let resp = self
            .client
            .put(format!("{}{path}", self.base_url))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        handle_response(resp).await
    }
}

async fn handle_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::Internal(format!("json decode: {e}")))
    } else {
        Err(parse_error_with_status(status, resp).await)
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> ServiceError {
    let body = resp.text().await.unwrap_or_default();
    let value = serde_json::from_str::<serde_json::Value>(&body).ok();
    let msg = value
        .as_ref()
        .and_then(|v| v["error"].as_str().map(String::from))
        .unwrap_or(body);

    match status {
        StatusCode::NOT_FOUND => ServiceError::NotFound(msg),
        StatusCode::BAD_REQUEST => ServiceError::InvalidInput(msg),
        StatusCode::CONFLICT => ServiceError::Conflict(msg),
        StatusCode::UNPROCESSABLE_ENTITY => {
            let missing = value
                .and_then(|v| serde_json::from_value::<Vec<Field>>(v["missing"].clone()).ok());
            match missing {
                Some(missing) => ServiceError::Validation(ValidationError { missing }),
                None => ServiceError::InvalidInput(msg),
            }
        }
        _ => ServiceError::Internal(msg),
    }
}

#[async_trait]
impl EntryService for HttpService {
    async fn vocabulary(&self) -> Result<Vocabulary, ServiceError> {
        self.get_json("/api/vocabulary").await
    }

    async fn create_session(&self) -> Result<SessionView, ServiceError> {
        self.post_empty("/api/sessions").await
    }

    async fn get_session(&self, session_id: &str) -> Result<SessionView, ServiceError> {
        self.get_json(&Self::session_path(session_id, "")).await
    }

    async fn clear(&self, session_id: &str) -> Result<SessionView, ServiceError> {
        self.post_empty(&Self::session_path(session_id, "/clear"))
            .await
    }

    async fn update_draft(
        &self,
        session_id: &str,
        update: &DraftUpdate,
    ) -> Result<UpdateResult, ServiceError> {
        self.put_json(&Self::session_path(session_id, "/draft"), update)
            .await
    }

    async fn upload_image(
        &self,
        session_id: &str,
        data: Bytes,
    ) -> Result<SessionView, ServiceError> {
        self.put_bytes(&Self::session_path(session_id, "/image"), "image/jpeg", data)
            .await
    }

    async fn generate_description(&self, session_id: &str) -> Result<SessionView, ServiceError> {
        self.post_empty(&Self::session_path(session_id, "/description"))
            .await
    }

    async fn save(&self, session_id: &str) -> Result<SaveResult, ServiceError> {
        self.post_empty(&Self::session_path(session_id, "/save"))
            .await
    }

    async fn export_csv(&self, session_id: &str) -> Result<String, ServiceError> {
        self.get_text(&Self::session_path(session_id, "/export"))
            .await
    }
}
