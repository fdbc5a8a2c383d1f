//! View-models: own a screen's observable state and mediate between the
//! catalog and the UI.
//!
//! Every signal is a `tokio::sync::watch` channel. The sending half stays
//! private to the owning view-model, so each signal has exactly one writer;
//! screens hold receivers and only read.

mod detail;
mod list;
mod scope;

pub use detail::PuppyDetailViewModel;
pub use list::{PuppyListViewModel, ShuffleMode};
pub use scope::ViewModelScope;
