use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::{PuppyId, PuppyRecord, PuppyRepository};

use super::scope::ViewModelScope;

/// State holder for the puppy detail screen.
///
/// Exposes three independent signals:
/// - `record`: the looked-up puppy, `None` until a lookup finds one
/// - `adopted`: whether the adoption confirmation is showing
/// - `reset`: set once the confirmation is dismissed; the screen then leaves
///
/// Operations are fire-and-forget and report only through the signals.
pub struct PuppyDetailViewModel {
    repo: Arc<dyn PuppyRepository>,
    record: Arc<watch::Sender<Option<PuppyRecord>>>,
    adopted: Arc<watch::Sender<bool>>,
    reset: Arc<watch::Sender<bool>>,
    scope: ViewModelScope,
}

impl PuppyDetailViewModel {
    pub fn new(repo: Arc<dyn PuppyRepository>) -> Self {
        Self {
            repo,
            record: Arc::new(watch::channel(None).0),
            adopted: Arc::new(watch::channel(false).0),
            reset: Arc::new(watch::channel(false).0),
            scope: ViewModelScope::new("puppy_detail"),
        }
    }

    pub fn subscribe_record(&self) -> watch::Receiver<Option<PuppyRecord>> {
        self.record.subscribe()
    }

    pub fn subscribe_adopted(&self) -> watch::Receiver<bool> {
        self.adopted.subscribe()
    }

    pub fn subscribe_reset(&self) -> watch::Receiver<bool> {
        self.reset.subscribe()
    }

    /// Look up `id` and publish the result. An unknown id publishes `None`.
    pub fn load_puppy(&self, id: PuppyId) {
        let repo = Arc::clone(&self.repo);
        let record = Arc::clone(&self.record);
        self.scope.launch("load_puppy", async move {
            let found = repo.find_by_id(id);
            if found.is_none() {
                tracing::debug!(%id, "Puppy not found");
            }
            record.send_replace(found);
        });
    }

    /// Show the adoption confirmation. Nothing is persisted.
    pub fn adopt(&self, id: PuppyId) {
        let adopted = Arc::clone(&self.adopted);
        self.scope.launch("adopt", async move {
            tracing::info!(%id, "Adopted in a parallel universe");
            adopted.send_replace(true);
        });
    }

    /// Dismiss the confirmation, then ask the screen to leave.
    pub fn reset(&self) {
        let adopted = Arc::clone(&self.adopted);
        let reset = Arc::clone(&self.reset);
        self.scope.launch("reset", async move {
            adopted.send_replace(false);
            reset.send_replace(true);
        });
    }

    pub fn scope(&self) -> &ViewModelScope {
        &self.scope
    }
}
