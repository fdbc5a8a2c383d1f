use crate::catalog::PuppyRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailScreenState {
    /// Latest published record.
    pub record: Option<PuppyRecord>,
    /// True once the view-model has published a lookup result, found or not.
    pub looked_up: bool,
    /// Adoption dialog visible.
    pub adopted: bool,
    /// The dialog was dismissed; the screen should leave.
    pub reset: bool,
    pub scroll: u16,
}

impl UiState for DetailScreenState {}

impl DetailScreenState {
    /// Leave after a dismissed adoption, or when the lookup came back empty.
    pub fn should_navigate_up(&self) -> bool {
        self.reset || (self.looked_up && self.record.is_none())
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.adopted && self.record.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_waits_for_lookup() {
        let state = DetailScreenState::default();
        assert!(!state.should_navigate_up());
        assert!(!state.is_dialog_visible());
    }

    #[test]
    fn empty_lookup_navigates_up() {
        let state = DetailScreenState {
            looked_up: true,
            ..Default::default()
        };
        assert!(state.should_navigate_up());
    }
}
