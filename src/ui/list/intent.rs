use crate::ui::list::state::PuppyCard;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// The view-model published its list. Cards arrive in display order.
    Loaded { cards: Vec<PuppyCard>, columns: usize },
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

impl Intent for ListIntent {}
