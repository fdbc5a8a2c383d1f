#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use wonderfluff::catalog::{CatalogStore, PuppyRepository};
use wonderfluff::ui::app::{App, AppSettings};
use wonderfluff::viewmodel::ShuffleMode;

pub fn store() -> Arc<dyn PuppyRepository> {
    Arc::new(CatalogStore::new())
}

pub fn make_app() -> App {
    make_app_with(AppSettings::default())
}

pub fn make_app_with(settings: AppSettings) -> App {
    App::new(store(), settings)
}

pub fn seeded_settings(seed: u64) -> AppSettings {
    AppSettings {
        shuffle: ShuffleMode::Seeded(seed),
        ..AppSettings::default()
    }
}

/// Sync the app until `done` holds, yielding to view-model jobs between
/// attempts. Panics after two seconds.
pub async fn settle(app: &mut App, done: impl Fn(&App) -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        app.sync();
        if done(app) {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "app did not settle, route = {}",
            app.current_route()
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
