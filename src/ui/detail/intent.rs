use crate::catalog::PuppyRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// The view-model published a lookup result.
    RecordPublished { record: Option<PuppyRecord> },
    /// The `adopted` signal changed.
    AdoptedChanged { adopted: bool },
    /// The `reset` signal changed.
    ResetChanged { reset: bool },
    ScrollUp,
    /// Scroll one line, never past `max`.
    ScrollDown { max: u16 },
}

impl Intent for DetailIntent {}
