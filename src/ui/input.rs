use crate::navigation::Route;
use crate::ui::app::{App, Screen};
use crate::ui::detail::{story_scroll_limit, DetailIntent, DetailScreen};
use crate::ui::list::{ListIntent, ListScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Story width assumed before the first resize event.
const DEFAULT_WIDTH: u16 = 80;

/// Navigation requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled by the screen itself.
    None,
    Open(Route),
    Back,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return InputAction::None;
    }

    let width = app.size().map_or(DEFAULT_WIDTH, |(cols, _)| cols);
    let action = match app.screen_mut() {
        Screen::List(list) => handle_list_key(list, key),
        Screen::Detail(detail) => handle_detail_key(detail, key, width),
    };

    match action {
        InputAction::Open(route) => app.navigate(route),
        InputAction::Back => {
            app.navigate_up();
        }
        InputAction::None => {}
    }
    action
}

fn handle_list_key(list: &mut ListScreen, key: KeyEvent) -> InputAction {
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => ListIntent::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => ListIntent::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => ListIntent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => ListIntent::MoveDown,
        KeyCode::Enter => {
            return match list.state().selected_id() {
                Some(id) => InputAction::Open(Route::PuppyDetail { id }),
                None => InputAction::None,
            };
        }
        _ => return InputAction::None,
    };
    list.dispatch(intent);
    InputAction::None
}

fn handle_detail_key(detail: &mut DetailScreen, key: KeyEvent, width: u16) -> InputAction {
    if detail.state().is_dialog_visible() {
        // The dialog is modal: only dismissal gets through.
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            detail.dismiss_dialog();
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => detail.adopt(),
        KeyCode::Up | KeyCode::Char('k') => detail.dispatch(DetailIntent::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => {
            let max = detail
                .state()
                .record
                .map_or(0, |puppy| story_scroll_limit(&puppy, width));
            detail.dispatch(DetailIntent::ScrollDown { max });
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            return InputAction::Back;
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
