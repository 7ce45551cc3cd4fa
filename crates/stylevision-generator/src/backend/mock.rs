use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use stylevision_core::GenerationOutcome;
use stylevision_prompts::DescriptionRequest;

use super::TextGenerator;

/// A mock generator for testing that returns a preconfigured outcome and
/// remembers the requests it was given.
pub struct MockGenerator {
    outcome: GenerationOutcome,
    calls: AtomicUsize,
    requests: Mutex<Vec<DescriptionRequest>>,
}

impl MockGenerator {
    /// Create a mock that returns the given description.
    pub fn success(text: &str) -> Self {
        Self::with_outcome(GenerationOutcome::Generated(text.to_string()))
    }

    /// Create a mock that fails with the given reason.
    pub fn failure(reason: &str) -> Self {
        Self::with_outcome(GenerationOutcome::Failed(reason.to_string()))
    }

    fn with_outcome(outcome: GenerationOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<DescriptionRequest> {
        self.requests.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &DescriptionRequest) -> GenerationOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone()
    }
}
