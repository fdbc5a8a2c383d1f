//! Puppy list screen.
//!
//! - `state.rs` - grid state (Loading → Ready with selection)
//! - `intent.rs` - catalog published, selection moves
//! - `reducer.rs` - state transitions (pure)
//! - `screen.rs` - binds the list view-model to the state
//! - `view.rs` - card grid rendering

mod intent;
mod reducer;
mod screen;
mod state;
mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use screen::{ListScreen, CARD_SOUNDS};
pub use state::{ListScreenState, PuppyCard};
pub use view::render_list;
