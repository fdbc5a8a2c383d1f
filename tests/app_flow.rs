mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wonderfluff::catalog::{PuppyId, PuppyRecord};
use wonderfluff::navigation::Route;
use wonderfluff::ui::app::{App, Screen};
use wonderfluff::ui::detail::story_scroll_limit;
use wonderfluff::ui::input::{handle_key, InputAction};
use wonderfluff::ui::list::ListScreenState;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn list_state(app: &App) -> Option<&ListScreenState> {
    match app.screen() {
        Screen::List(list) => Some(list.state()),
        Screen::Detail(_) => None,
    }
}

fn list_ready(app: &App) -> bool {
    list_state(app).is_some_and(|state| !state.is_loading())
}

fn list_order(app: &App) -> Vec<PuppyId> {
    match list_state(app) {
        Some(ListScreenState::Ready { cards, .. }) => cards.iter().map(|c| c.record.id).collect(),
        _ => Vec::new(),
    }
}

fn list_sounds(app: &App) -> Vec<&'static str> {
    match list_state(app) {
        Some(ListScreenState::Ready { cards, .. }) => cards.iter().map(|c| c.sound).collect(),
        _ => Vec::new(),
    }
}

fn detail_record(app: &App) -> Option<PuppyRecord> {
    match app.screen() {
        Screen::Detail(detail) => detail.state().record,
        Screen::List(_) => None,
    }
}

fn dialog_visible(app: &App) -> bool {
    match app.screen() {
        Screen::Detail(detail) => detail.state().is_dialog_visible(),
        Screen::List(_) => false,
    }
}

#[tokio::test]
async fn list_loads_then_enter_opens_selected_puppy() {
    let mut app = common::make_app();
    common::settle(&mut app, list_ready).await;
    let selected = list_state(&app).and_then(|s| s.selected_id()).expect("selection");

    let action = handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(action, InputAction::Open(Route::PuppyDetail { id: selected }));
    assert_eq!(app.depth(), 2);

    common::settle(&mut app, |app| detail_record(app).is_some()).await;
    assert_eq!(detail_record(&app).map(|p| p.id), Some(selected));
}

#[tokio::test]
async fn back_from_detail_keeps_list_order() {
    let mut app = common::make_app();
    common::settle(&mut app, list_ready).await;
    let before = list_order(&app);

    handle_key(&mut app, press(KeyCode::Right));
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(matches!(app.current_route(), Route::PuppyDetail { .. }));

    assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), InputAction::Back);
    assert_eq!(app.current_route(), Route::PuppyList);
    app.sync();
    assert_eq!(list_order(&app), before);
}

#[tokio::test]
async fn unknown_puppy_navigates_back_to_list() {
    let mut app = common::make_app();
    app.navigate_to_path("puppyDetail/999").unwrap();
    assert_eq!(app.depth(), 2);

    common::settle(&mut app, |app| app.current_route() == Route::PuppyList).await;
    assert_eq!(app.depth(), 1);
}

#[tokio::test]
async fn adopt_then_dismiss_returns_to_list() {
    let mut app = common::make_app();
    app.navigate(Route::PuppyDetail { id: PuppyId(7) });
    common::settle(&mut app, |app| detail_record(app).is_some()).await;
    assert_eq!(detail_record(&app).map(|p| p.name), Some("Yodaag"));
    assert!(!dialog_visible(&app));

    handle_key(&mut app, press(KeyCode::Char('a')));
    common::settle(&mut app, dialog_visible).await;

    // The dialog is modal, so Back is swallowed.
    assert_eq!(handle_key(&mut app, press(KeyCode::Left)), InputAction::None);
    assert_eq!(app.depth(), 2);

    handle_key(&mut app, press(KeyCode::Enter));
    common::settle(&mut app, |app| app.current_route() == Route::PuppyList).await;
    assert_eq!(app.depth(), 1);
}

#[tokio::test]
async fn adopt_before_lookup_is_ignored() {
    let mut app = common::make_app();
    app.navigate(Route::PuppyDetail { id: PuppyId(3) });
    handle_key(&mut app, press(KeyCode::Char('a')));

    common::settle(&mut app, |app| detail_record(app).is_some()).await;
    assert!(!dialog_visible(&app));
}

#[tokio::test]
async fn back_at_list_root_stays_put() {
    let mut app = common::make_app();
    assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), InputAction::None);
    assert_eq!(app.current_route(), Route::PuppyList);
    assert!(!app.navigate_up());
}

#[tokio::test]
async fn quit_keys_request_exit() {
    let mut app = common::make_app();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());

    let mut app = common::make_app();
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[tokio::test]
async fn key_release_is_ignored() {
    let mut app = common::make_app();
    let mut key = press(KeyCode::Char('q'));
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert!(!app.should_quit());
}

#[tokio::test]
async fn seeded_apps_show_the_same_order() {
    let mut a = common::make_app_with(common::seeded_settings(7));
    let mut b = common::make_app_with(common::seeded_settings(7));
    common::settle(&mut a, list_ready).await;
    common::settle(&mut b, list_ready).await;
    assert_eq!(list_order(&a), list_order(&b));
    assert_eq!(list_order(&a).len(), 12);
    assert_eq!(list_sounds(&a), list_sounds(&b));
}

#[tokio::test]
async fn holding_down_does_not_scroll_past_the_story() {
    let mut app = common::make_app();
    app.on_resize(80, 24);
    app.navigate(Route::PuppyDetail { id: PuppyId(8) });
    common::settle(&mut app, |app| detail_record(app).is_some()).await;
    let puppy = detail_record(&app).expect("record");

    for _ in 0..100 {
        handle_key(&mut app, press(KeyCode::Down));
    }
    let scroll = match app.screen() {
        Screen::Detail(detail) => detail.state().scroll,
        Screen::List(_) => panic!("expected detail"),
    };
    assert_eq!(scroll, story_scroll_limit(&puppy, 80));

    handle_key(&mut app, press(KeyCode::Up));
    let scroll_after_up = match app.screen() {
        Screen::Detail(detail) => detail.state().scroll,
        Screen::List(_) => panic!("expected detail"),
    };
    assert_eq!(scroll_after_up, scroll - 1);
}
