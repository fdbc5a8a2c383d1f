use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::watch;

use crate::catalog::{PuppyRecord, PuppyRepository};

use super::scope::ViewModelScope;

/// How the list view-model orders the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// Fresh random order for every view-model instance.
    #[default]
    Random,
    /// Reproducible order derived from the seed.
    Seeded(u64),
}

impl ShuffleMode {
    /// A fresh generator for this mode. Seeded modes return the same
    /// sequence on every call.
    pub fn rng(self) -> StdRng {
        match self {
            ShuffleMode::Random => StdRng::from_entropy(),
            ShuffleMode::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }

    fn shuffle(self, records: &mut [PuppyRecord]) {
        records.shuffle(&mut self.rng());
    }
}

/// State holder for the puppy list screen.
///
/// Starts with an empty list and publishes the shuffled catalog once,
/// shortly after construction. No further updates follow.
pub struct PuppyListViewModel {
    records: Arc<watch::Sender<Vec<PuppyRecord>>>,
    scope: ViewModelScope,
}

impl PuppyListViewModel {
    /// Create the view-model and start loading. Requires a Tokio runtime.
    pub fn new(repo: Arc<dyn PuppyRepository>, shuffle: ShuffleMode) -> Self {
        let (records, _) = watch::channel(Vec::new());
        let records = Arc::new(records);
        let scope = ViewModelScope::new("puppy_list");

        let publisher = Arc::clone(&records);
        scope.launch("load_puppies", async move {
            let mut puppies = repo.list_all();
            shuffle.shuffle(&mut puppies);
            tracing::debug!(count = puppies.len(), "Publishing puppy list");
            publisher.send_replace(puppies);
        });

        Self { records, scope }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<PuppyRecord>> {
        self.records.subscribe()
    }

    /// Snapshot of the currently published list.
    pub fn records(&self) -> Vec<PuppyRecord> {
        self.records.borrow().clone()
    }

    pub fn scope(&self) -> &ViewModelScope {
        &self.scope
    }
}
