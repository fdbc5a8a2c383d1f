use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::PuppyRecord;
use crate::ui::detail::dialog::render_adoption_dialog;
use crate::ui::detail::state::DetailScreenState;
use crate::ui::theme::{ACCENT, CARD_BORDER, GAUGE, HEART, MUTED_TEXT, TEXT};

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &DetailScreenState) {
    let Some(puppy) = state.record.as_ref() else {
        let loader = Paragraph::new("Sniffing around…")
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(loader, area);
        return;
    };

    let [upper, pupistics] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(11)]).areas(area);
    let scroll = state.scroll.min(story_scroll_limit(puppy, upper.width));
    render_story(frame, upper, puppy, scroll);
    render_pupistics(frame, pupistics, puppy);

    if state.is_dialog_visible() {
        render_adoption_dialog(frame, area, puppy);
    }
}

/// Story lines other than the description: two headings, two spacers and
/// the adopt hint.
const STORY_FIXED_LINES: u16 = 5;

/// Largest useful scroll offset for the story card at `width` columns:
/// the last wrapped line sits at the top.
pub fn story_scroll_limit(puppy: &PuppyRecord, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let hint = format!("Press a to adopt {}", puppy.name);
    let lines = STORY_FIXED_LINES - 1
        + wrapped_line_count(puppy.description, inner)
        + wrapped_line_count(&hint, inner);
    lines.saturating_sub(1)
}

/// Greedy word wrap line count, splitting words longer than the width.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1usize;
    let mut column = 0usize;
    for word in text.split_whitespace() {
        let mut len = word.chars().count();
        if column > 0 && column + 1 + len <= width {
            column += 1 + len;
            continue;
        }
        if column > 0 {
            lines += 1;
        }
        while len > width {
            lines += 1;
            len -= width;
        }
        column = len;
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn render_story(frame: &mut Frame<'_>, area: Rect, puppy: &PuppyRecord, scroll: u16) {
    let heading = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("♥ ", Style::default().fg(HEART)),
            Span::styled("Looking for a new home", heading),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("🐾 ", Style::default().fg(MUTED_TEXT)),
            Span::styled("Pawerful fact", heading),
        ]),
        Line::from(Span::styled(puppy.description, Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Press a to adopt {}", puppy.name),
            Style::default().fg(ACCENT),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        area,
    );
}

fn render_pupistics(frame: &mut Frame<'_>, area: Rect, puppy: &PuppyRecord) {
    let block = Block::default()
        .title(Span::styled(
            "Pupistics",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(3); 3]).split(inner);
    let stats = [
        ("Barkability", puppy.barkability),
        ("Cuddliness", puppy.cuddliness),
        ("Guardability", puppy.guardability),
    ];
    for ((label, score), row) in stats.into_iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(label))
            .gauge_style(Style::default().fg(GAUGE))
            .ratio(f64::from(score).clamp(0.0, 1.0));
        frame.render_widget(gauge, *row);
    }
}
