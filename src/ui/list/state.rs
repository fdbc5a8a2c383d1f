use crate::catalog::{PuppyId, PuppyRecord};
use crate::ui::mvi::UiState;

/// One card on the list grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuppyCard {
    pub record: PuppyRecord,
    /// Sound shown under the name, picked once when the card is created.
    pub sound: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListScreenState {
    /// Nothing published yet.
    #[default]
    Loading,
    Ready {
        cards: Vec<PuppyCard>,
        selected: usize,
        columns: usize,
    },
}

impl UiState for ListScreenState {}

impl ListScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn selected_card(&self) -> Option<&PuppyCard> {
        match self {
            Self::Ready {
                cards, selected, ..
            } => cards.get(*selected),
            Self::Loading => None,
        }
    }

    pub fn selected_id(&self) -> Option<PuppyId> {
        self.selected_card().map(|card| card.record.id)
    }
}
