use wonderfluff::catalog::{CatalogStore, PuppyId, PuppyRepository};
use wonderfluff::ui::detail::{story_scroll_limit, DetailIntent, DetailReducer, DetailScreenState};
use wonderfluff::ui::mvi::Reducer;

fn published(id: u32) -> DetailScreenState {
    let record = CatalogStore::new().find_by_id(PuppyId(id));
    DetailReducer::reduce(
        DetailScreenState::default(),
        DetailIntent::RecordPublished { record },
    )
}

#[test]
fn found_record_is_shown_without_dialog() {
    let state = published(5);
    assert_eq!(state.record.map(|p| p.name), Some("Puppia"));
    assert!(state.looked_up);
    assert!(!state.is_dialog_visible());
    assert!(!state.should_navigate_up());
}

#[test]
fn missing_record_requests_navigate_up() {
    let state = published(999);
    assert!(state.record.is_none());
    assert!(state.should_navigate_up());
}

#[test]
fn adopted_shows_dialog_only_with_record() {
    let state = DetailReducer::reduce(published(5), DetailIntent::AdoptedChanged { adopted: true });
    assert!(state.is_dialog_visible());

    let orphan = DetailReducer::reduce(
        DetailScreenState::default(),
        DetailIntent::AdoptedChanged { adopted: true },
    );
    assert!(!orphan.is_dialog_visible());
}

#[test]
fn reset_requests_navigate_up() {
    let state = DetailReducer::reduce(published(5), DetailIntent::AdoptedChanged { adopted: true });
    let state = DetailReducer::reduce(state, DetailIntent::AdoptedChanged { adopted: false });
    let state = DetailReducer::reduce(state, DetailIntent::ResetChanged { reset: true });
    assert!(!state.is_dialog_visible());
    assert!(state.should_navigate_up());
}

#[test]
fn scroll_never_goes_negative() {
    let state = DetailReducer::reduce(published(1), DetailIntent::ScrollUp);
    assert_eq!(state.scroll, 0);
    let state = DetailReducer::reduce(state, DetailIntent::ScrollDown { max: 10 });
    let state = DetailReducer::reduce(state, DetailIntent::ScrollDown { max: 10 });
    assert_eq!(state.scroll, 2);
    let state = DetailReducer::reduce(state, DetailIntent::ScrollUp);
    assert_eq!(state.scroll, 1);
}

#[test]
fn scroll_stops_at_the_limit() {
    let mut state = published(1);
    for _ in 0..50 {
        state = DetailReducer::reduce(state, DetailIntent::ScrollDown { max: 3 });
    }
    assert_eq!(state.scroll, 3);
    let state = DetailReducer::reduce(state, DetailIntent::ScrollUp);
    assert_eq!(state.scroll, 2);
}

#[test]
fn narrow_story_scrolls_further() {
    let puppy = CatalogStore::new().find_by_id(PuppyId(1)).expect("puppy 1");
    let wide = story_scroll_limit(&puppy, 200);
    let narrow = story_scroll_limit(&puppy, 30);
    assert_eq!(wide, 5);
    assert!(narrow > wide);
}
