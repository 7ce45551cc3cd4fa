use serde::{Deserialize, Serialize};
use stylevision_core::summary::render_preview;
use stylevision_core::{DraftState, PriceFormatError, ProductDraft, ProductRecord};

/// What a form needs to render one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    pub draft: ProductDraft,
    pub state: DraftState,
    /// Live summary of the current selections.
    pub preview: String,
    /// Products saved from this session so far.
    pub saved_count: usize,
}

impl SessionView {
    pub(crate) fn new(session_id: &str, draft: &ProductDraft, saved_count: usize) -> Self {
        Self {
            session_id: session_id.to_string(),
            draft: draft.clone(),
            state: draft.state(),
            preview: render_preview(draft),
            saved_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub session: SessionView,
    /// Set when the submitted price was rejected and cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_error: Option<PriceFormatError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResult {
    /// State of the draft that was written; always `Saved`.
    pub state: DraftState,
    pub record: ProductRecord,
    /// The stored description is a generation failure message.
    pub description_failed: bool,
    /// The fresh draft that replaced the saved one.
    pub session: SessionView,
}
