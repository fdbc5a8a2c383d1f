//! Model-View-Intent (MVI) primitives for screen-local UI state.
//!
//! View-models publish domain signals; each screen folds those signals and
//! key presses into its own state through a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Run `$reducer` on the state stored in `$self.$field` and store the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
