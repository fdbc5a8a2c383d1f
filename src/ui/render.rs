use crate::ui::app::{App, Screen};
use crate::ui::detail::render_detail;
use crate::ui::footer::{Footer, DETAIL_HINTS, DIALOG_HINTS, LIST_HINTS};
use crate::ui::header::{Header, APP_TITLE};
use crate::ui::layout::layout_regions;
use crate::ui::list::render_list;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Clear, body);

    let hints = match app.screen() {
        Screen::List(list) => {
            frame.render_widget(Header::new(APP_TITLE, false).widget(), header);
            render_list(frame, body, list.state());
            LIST_HINTS
        }
        Screen::Detail(detail) => {
            let state = detail.state();
            let title = state.record.as_ref().map_or(APP_TITLE, |puppy| puppy.name);
            frame.render_widget(Header::new(title, true).widget(), header);
            render_detail(frame, body, state);
            if state.is_dialog_visible() {
                DIALOG_HINTS
            } else {
                DETAIL_HINTS
            }
        }
    };

    frame.render_widget(Footer::new(hints).widget(footer), footer);
}
