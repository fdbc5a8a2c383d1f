//! Puppy detail screen with the adoption dialog.
//!
//! - `state.rs` - snapshot of the view-model signals plus scroll offset
//! - `intent.rs` - signal updates and scrolling
//! - `reducer.rs` - state transitions (pure)
//! - `screen.rs` - binds the detail view-model to the state
//! - `view.rs` / `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod screen;
mod state;
mod view;

pub use dialog::{adoption_message, render_adoption_dialog};
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use screen::DetailScreen;
pub use state::DetailScreenState;
pub use view::{render_detail, story_scroll_limit};
