use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListScreenState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListScreenState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Loaded { cards, columns } => {
                if cards.is_empty() {
                    return ListScreenState::Loading;
                }
                ListScreenState::Ready {
                    cards,
                    selected: 0,
                    columns: columns.max(1),
                }
            }
            ListIntent::MoveLeft => move_selection(state, |selected, _, _| {
                selected.saturating_sub(1)
            }),
            ListIntent::MoveRight => move_selection(state, |selected, _, len| {
                (selected + 1).min(len - 1)
            }),
            ListIntent::MoveUp => move_selection(state, |selected, columns, _| {
                selected.checked_sub(columns).unwrap_or(selected)
            }),
            ListIntent::MoveDown => move_selection(state, |selected, columns, len| {
                let next = selected + columns;
                if next < len {
                    next
                } else {
                    selected
                }
            }),
        }
    }
}

/// Apply `step(selected, columns, len)` to a ready grid; other states pass through.
fn move_selection(
    state: ListScreenState,
    step: impl Fn(usize, usize, usize) -> usize,
) -> ListScreenState {
    match state {
        ListScreenState::Ready {
            cards,
            selected,
            columns,
        } => {
            let selected = step(selected, columns, cards.len());
            ListScreenState::Ready {
                cards,
                selected,
                columns,
            }
        }
        other => other,
    }
}
