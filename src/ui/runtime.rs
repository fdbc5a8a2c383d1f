use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Drive the TUI until the user quits. Must run inside an entered Tokio
/// runtime so screens can start their view-models.
pub fn run(app: &mut App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = app.settings().tick_rate;
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        app.sync();
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => {
                let action = handle_key(app, key);
                tracing::trace!(?action, "Key handled");
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
