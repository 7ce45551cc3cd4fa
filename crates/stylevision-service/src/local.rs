use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use stylevision_core::{
    validate, DraftState, DraftUpdate, GenerationOutcome, ProductDraft, ProductId, ProductRecord,
    Vocabulary,
};
use stylevision_generator::TextGenerator;
use stylevision_prompts::DescriptionRequest;
use stylevision_store::{product_image_key, render_csv, ObjectStore, ProductCatalog};
use tracing::{debug, info, warn};

use crate::image::check_jpeg;
use crate::session::{SaveResult, SessionView, UpdateResult};
use crate::{EntryService, ServiceError};

type Sessions = Mutex<HashMap<String, Session>>;

/// Sessions untouched for this long are dropped when a new one is created.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

struct Session {
    draft: ProductDraft,
    last_seen: Instant,
    /// A save for this session is in flight.
    saving: bool,
    /// Records saved from this session, oldest first.
    saved: Vec<ProductRecord>,
}

impl Session {
    fn ensure_idle(&self) -> Result<(), ServiceError> {
        if self.saving {
            Err(ServiceError::Conflict(
                "a save is already in progress for this session".into(),
            ))
        } else {
            Ok(())
        }
    }

    fn view(&self, session_id: &str) -> SessionView {
        SessionView::new(session_id, &self.draft, self.saved.len())
    }
}

/// Clears the busy flag however the save ends.
struct SavingGuard<'a> {
    sessions: &'a Sessions,
    session_id: &'a str,
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut sessions) = self.sessions.lock() {
            if let Some(session) = sessions.get_mut(self.session_id) {
                session.saving = false;
            }
        }
    }
}

/// In-process implementation: drafts live in memory, images and rows go to
/// the configured stores.
pub struct LocalService {
    sessions: Sessions,
    images: Arc<dyn ObjectStore>,
    catalog: Arc<dyn ProductCatalog>,
    generator: Arc<dyn TextGenerator>,
    session_ttl: Duration,
}

impl LocalService {
    pub fn new(
        images: Arc<dyn ObjectStore>,
        catalog: Arc<dyn ProductCatalog>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            images,
            catalog,
            generator,
            session_ttl: SESSION_IDLE_TTL,
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Session>>, ServiceError> {
        self.sessions
            .lock()
            .map_err(|_| ServiceError::Internal("session lock poisoned".into()))
    }

    fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| ServiceError::NotFound(format!("session {session_id}")))?;
        session.last_seen = Instant::now();
        f(session)
    }

    /// A fresh product id that is not already in the catalog and is not `current`.
    async fn next_product_id(&self, current: Option<ProductId>) -> Result<ProductId, ServiceError> {
        let catalog = self.catalog.clone();
        let id = tokio::task::spawn_blocking(move || {
            ProductId::generate_unique(|candidate| {
                if current.as_ref() == Some(candidate) {
                    return true;
                }
                match catalog.contains_id(candidate.as_str()) {
                    Ok(true) => {
                        warn!(p_id = %candidate, "product id already in catalog, regenerating");
                        true
                    }
                    Ok(false) => false,
                    Err(e) => {
                        warn!("could not check product id against catalog: {e}");
                        false
                    }
                }
            })
        })
        .await
        .map_err(|e| ServiceError::Internal(format!("id generation task failed: {e}")))??;
        Ok(id)
    }
}

#[async_trait]
impl EntryService for LocalService {
    async fn vocabulary(&self) -> Result<Vocabulary, ServiceError> {
        Ok(Vocabulary::standard())
    }

    async fn create_session(&self) -> Result<SessionView, ServiceError> {
        let p_id = self.next_product_id(None).await?;
        let session_id = uuid::Uuid::new_v4().to_string();
        let session = Session {
            draft: ProductDraft::new(p_id),
            last_seen: Instant::now(),
            saving: false,
            saved: Vec::new(),
        };
        let view = session.view(&session_id);

        let mut sessions = self.lock()?;
        let before = sessions.len();
        let ttl = self.session_ttl;
        sessions.retain(|_, s| s.saving || s.last_seen.elapsed() < ttl);
        if sessions.len() < before {
            debug!(evicted = before - sessions.len(), "dropped idle sessions");
        }
        sessions.insert(session_id.clone(), session);
        drop(sessions);
        info!(session = %session_id, p_id = %view.draft.id, "session created");
        Ok(view)
    }

    async fn get_session(&self, session_id: &str) -> Result<SessionView, ServiceError> {
        self.with_session(session_id, |s| Ok(s.view(session_id)))
    }

    async fn clear(&self, session_id: &str) -> Result<SessionView, ServiceError> {
        let current = self.with_session(session_id, |s| {
            s.ensure_idle()?;
            Ok(s.draft.id.clone())
        })?;
        let p_id = self.next_product_id(Some(current)).await?;
        self.with_session(session_id, |s| {
            s.ensure_idle()?;
            s.draft = ProductDraft::new(p_id);
            info!(session = %session_id, p_id = %s.draft.id, "draft cleared");
            Ok(s.view(session_id))
        })
    }

    async fn update_draft(
        &self,
        session_id: &str,
        update: &DraftUpdate,
    ) -> Result<UpdateResult, ServiceError> {
        self.with_session(session_id, |s| {
            s.ensure_idle()?;
            let price_error = s.draft.apply(update.clone())?;
            if let Some(e) = &price_error {
                debug!(session = %session_id, input = %e.input, "price rejected and cleared");
            }
            Ok(UpdateResult {
                session: s.view(session_id),
                price_error,
            })
        })
    }

    async fn upload_image(
        &self,
        session_id: &str,
        data: Bytes,
    ) -> Result<SessionView, ServiceError> {
        check_jpeg(&data)?;
        let p_id = self.with_session(session_id, |s| {
            s.ensure_idle()?;
            Ok(s.draft.id.clone())
        })?;

        let key = product_image_key(p_id.as_str());
        let size = data.len();
        self.images.put(&key, data).await?;
        info!(session = %session_id, key = %key, bytes = size, "image stored");

        self.with_session(session_id, |s| {
            if s.draft.id != p_id {
                return Err(ServiceError::Conflict(
                    "draft was replaced while the image was uploading".into(),
                ));
            }
            s.draft.image = Some(key);
            Ok(s.view(session_id))
        })
    }

    async fn generate_description(&self, session_id: &str) -> Result<SessionView, ServiceError> {
        let (snapshot, request) = self.with_session(session_id, |s| {
            s.ensure_idle()?;
            validate(&s.draft)?;
            Ok((s.draft.clone(), DescriptionRequest::from_draft(&s.draft)))
        })?;

        let outcome = self.generator.generate(&request).await;
        match &outcome {
            GenerationOutcome::Generated(_) => {
                info!(session = %session_id, generator = self.generator.name(), "description generated")
            }
            GenerationOutcome::Failed(reason) => {
                warn!(session = %session_id, generator = self.generator.name(), "description failed: {reason}")
            }
        }

        self.with_session(session_id, |s| {
            if s.draft.id != snapshot.id {
                return Err(ServiceError::Conflict(
                    "draft was replaced while the description was generating".into(),
                ));
            }
            // Edits made during the call leave the new text already out of date.
            s.draft.description_stale = !s.draft.same_attributes(&snapshot);
            s.draft.description = Some(outcome);
            Ok(s.view(session_id))
        })
    }

    async fn save(&self, session_id: &str) -> Result<SaveResult, ServiceError> {
        let (record, description_failed) = self.with_session(session_id, |s| {
            s.ensure_idle()?;
            let valid = validate(&s.draft)?;
            let record = ProductRecord::assemble(valid);
            let failed = s
                .draft
                .description
                .as_ref()
                .is_some_and(GenerationOutcome::is_failure);
            s.saving = true;
            Ok((record, failed))
        })?;
        let _guard = SavingGuard {
            sessions: &self.sessions,
            session_id,
        };

        let saved_id = ProductId::parse(&record.p_id)?;
        let next_id = self.next_product_id(Some(saved_id)).await?;

        let catalog = self.catalog.clone();
        let row = record.clone();
        tokio::task::spawn_blocking(move || catalog.append(&row))
            .await
            .map_err(|e| ServiceError::Internal(format!("catalog task failed: {e}")))??;

        if description_failed {
            warn!(p_id = %record.p_id, "saved with a generation failure as the description");
        }
        info!(session = %session_id, p_id = %record.p_id, "product saved");

        let session = self.with_session(session_id, |s| {
            s.saved.push(record.clone());
            s.draft = ProductDraft::new(next_id);
            Ok(s.view(session_id))
        })?;

        Ok(SaveResult {
            state: DraftState::Saved,
            record,
            description_failed,
            session,
        })
    }

    async fn export_csv(&self, session_id: &str) -> Result<String, ServiceError> {
        let saved = self.with_session(session_id, |s| Ok(s.saved.clone()))?;
        Ok(render_csv(&saved)?)
    }
}
