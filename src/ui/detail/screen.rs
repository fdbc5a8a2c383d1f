use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::{PuppyId, PuppyRecord, PuppyRepository};
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::reducer::DetailReducer;
use crate::ui::detail::state::DetailScreenState;
use crate::ui::mvi::dispatch_mvi;
use crate::viewmodel::PuppyDetailViewModel;

/// Detail destination for one puppy id.
///
/// The lookup starts on creation. Whether a result has been published at
/// all is read from the record channel's version, so "still loading" and
/// "not found" stay apart without changing the view-model's signal.
pub struct DetailScreen {
    id: PuppyId,
    view_model: PuppyDetailViewModel,
    record: watch::Receiver<Option<PuppyRecord>>,
    adopted: watch::Receiver<bool>,
    reset: watch::Receiver<bool>,
    pub(crate) state: DetailScreenState,
}

impl DetailScreen {
    pub fn new(id: PuppyId, repo: Arc<dyn PuppyRepository>) -> Self {
        let view_model = PuppyDetailViewModel::new(repo);
        let record = view_model.subscribe_record();
        let adopted = view_model.subscribe_adopted();
        let reset = view_model.subscribe_reset();
        view_model.load_puppy(id);
        tracing::info!(%id, "Detail screen created");
        Self {
            id,
            view_model,
            record,
            adopted,
            reset,
            state: DetailScreenState::default(),
        }
    }

    pub fn id(&self) -> PuppyId {
        self.id
    }

    pub fn state(&self) -> &DetailScreenState {
        &self.state
    }

    pub fn view_model(&self) -> &PuppyDetailViewModel {
        &self.view_model
    }

    /// Pull every changed signal into screen state.
    pub fn sync(&mut self) {
        if self.record.has_changed().unwrap_or(false) {
            let record = *self.record.borrow_and_update();
            self.dispatch(DetailIntent::RecordPublished { record });
        }
        if self.adopted.has_changed().unwrap_or(false) {
            let adopted = *self.adopted.borrow_and_update();
            self.dispatch(DetailIntent::AdoptedChanged { adopted });
        }
        if self.reset.has_changed().unwrap_or(false) {
            let reset = *self.reset.borrow_and_update();
            self.dispatch(DetailIntent::ResetChanged { reset });
        }
    }

    /// Adopt button. Ignored until the record is on screen.
    pub fn adopt(&self) {
        if let Some(record) = self.state.record {
            self.view_model.adopt(record.id);
        }
    }

    /// Dismiss the adoption dialog.
    pub fn dismiss_dialog(&self) {
        self.view_model.reset();
    }

    pub fn dispatch(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, state, DetailReducer, intent);
    }
}
