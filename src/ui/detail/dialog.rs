use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::PuppyRecord;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, DIALOG_BORDER, TEXT};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 9;

pub fn adoption_message(name: &str) -> String {
    format!("You successfully adopted {} in a parallel universe!", name)
}

pub fn render_adoption_dialog(frame: &mut Frame<'_>, area: Rect, puppy: &PuppyRecord) {
    let dialog_area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(adoption_message(puppy.name), Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "[ Cool! ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
    ];

    let block = Block::default()
        .title(Span::styled(
            "Congratulations.",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        dialog_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_puppy() {
        assert_eq!(
            adoption_message("Yodaag"),
            "You successfully adopted Yodaag in a parallel universe!"
        );
    }
}
