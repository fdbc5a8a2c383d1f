use crate::ui::theme::{CARD_BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LIST_HINTS: &str = " ←↑↓→: Move │ Enter: Open │ q: Quit";
pub const DETAIL_HINTS: &str = " a: Adopt │ ↑↓: Scroll │ Esc: Back │ q: Quit";
pub const DIALOG_HINTS: &str = " Enter/Esc: Cool!";

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(hints: &'static str) -> Self {
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain arrows.
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER)),
        )
    }
}
