use crate::ui::theme::{ACCENT, CARD_BORDER, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const APP_TITLE: &str = "Wonderfluff";

/// App bar. Shows the app title on the list and the puppy name on detail.
pub struct Header<'a> {
    title: &'a str,
    show_back: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, show_back: bool) -> Self {
        Self { title, show_back }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let mut spans = vec![Span::raw("  ")];
        if self.show_back {
            spans.push(Span::styled("← ", Style::default().fg(ACCENT)));
        }
        spans.push(Span::styled(
            self.title,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(CARD_BORDER)),
        )
    }
}
