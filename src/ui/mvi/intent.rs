/// Marker trait for intents: key presses, navigation events, and signal
/// updates forwarded from a view-model.
pub trait Intent: Send + 'static {}
