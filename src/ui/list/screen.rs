use std::sync::Arc;

use rand::seq::SliceRandom;
use tokio::sync::watch;

use crate::catalog::{PuppyRecord, PuppyRepository};
use crate::ui::list::intent::ListIntent;
use crate::ui::list::reducer::ListReducer;
use crate::ui::list::state::{ListScreenState, PuppyCard};
use crate::ui::mvi::dispatch_mvi;
use crate::viewmodel::{PuppyListViewModel, ShuffleMode};

/// Sounds a card can show under the puppy's name.
pub const CARD_SOUNDS: [&str; 4] = ["Bark", "Woff", "Rawr", "Moompf"];

/// List destination: owns its view-model for as long as it sits on the
/// back stack.
pub struct ListScreen {
    view_model: PuppyListViewModel,
    records: watch::Receiver<Vec<PuppyRecord>>,
    shuffle: ShuffleMode,
    columns: usize,
    pub(crate) state: ListScreenState,
}

impl ListScreen {
    pub fn new(repo: Arc<dyn PuppyRepository>, shuffle: ShuffleMode, columns: usize) -> Self {
        let view_model = PuppyListViewModel::new(repo, shuffle);
        let records = view_model.subscribe();
        tracing::info!(columns, "List screen created");
        Self {
            view_model,
            records,
            shuffle,
            columns,
            state: ListScreenState::default(),
        }
    }

    pub fn state(&self) -> &ListScreenState {
        &self.state
    }

    pub fn view_model(&self) -> &PuppyListViewModel {
        &self.view_model
    }

    /// Pull the latest published list into screen state.
    pub fn sync(&mut self) {
        if !self.records.has_changed().unwrap_or(false) {
            return;
        }
        let records = self.records.borrow_and_update().clone();
        let mut rng = self.shuffle.rng();
        let cards = records
            .into_iter()
            .map(|record| PuppyCard {
                record,
                sound: CARD_SOUNDS.choose(&mut rng).copied().unwrap_or(CARD_SOUNDS[0]),
            })
            .collect();
        self.dispatch(ListIntent::Loaded {
            cards,
            columns: self.columns,
        });
    }

    pub fn dispatch(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, state, ListReducer, intent);
    }
}
