/// Marker trait for screen state: cloneable, comparable, with a sensible
/// starting value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
