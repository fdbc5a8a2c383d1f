use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailScreenState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailScreenState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::RecordPublished { record } => DetailScreenState {
                record,
                looked_up: true,
                ..state
            },
            DetailIntent::AdoptedChanged { adopted } => DetailScreenState { adopted, ..state },
            DetailIntent::ResetChanged { reset } => DetailScreenState { reset, ..state },
            DetailIntent::ScrollUp => DetailScreenState {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
            DetailIntent::ScrollDown { max } => DetailScreenState {
                scroll: state.scroll.saturating_add(1).min(max),
                ..state
            },
        }
    }
}
