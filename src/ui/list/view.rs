use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::Gender;
use crate::ui::list::state::{ListScreenState, PuppyCard};
use crate::ui::theme::{ACCENT, CARD_BORDER, FEMALE_TAG, MALE_TAG, MUTED_TEXT, TAG_TEXT, TEXT};

/// Card height including borders.
const CARD_HEIGHT: u16 = 5;

pub fn render_list(frame: &mut Frame<'_>, area: Rect, state: &ListScreenState) {
    let ListScreenState::Ready {
        cards,
        selected,
        columns,
    } = state
    else {
        let loading = Paragraph::new("Fetching puppies…")
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    };

    let columns = (*columns).max(1);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (col, card_area) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            let Some(card) = cards.get(index) else {
                return;
            };
            render_card(frame, *card_area, card, index == *selected);
        }
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, card: &PuppyCard, selected: bool) {
    let border_style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CARD_BORDER)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            card.record.name,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.sound,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
    ];
    if let Some(gender) = card.record.gender {
        lines.push(gender_tag(gender));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn gender_tag(gender: Gender) -> Line<'static> {
    let background = match gender {
        Gender::Female => FEMALE_TAG,
        Gender::Male => MALE_TAG,
    };
    Line::from(Span::styled(
        format!(" {} ", gender.label()),
        Style::default().fg(TAG_TEXT).bg(background),
    ))
}
