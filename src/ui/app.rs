use std::sync::Arc;
use std::time::Duration;

use crate::catalog::PuppyRepository;
use crate::config::Config;
use crate::navigation::{BackStack, NavigationError, Route};
use crate::ui::detail::DetailScreen;
use crate::ui::list::ListScreen;
use crate::viewmodel::ShuffleMode;

/// Runtime settings derived from config and command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub shuffle: ShuffleMode,
    pub grid_columns: usize,
    pub tick_rate: Duration,
}

impl AppSettings {
    /// `seed_override` (from `--seed`) wins over `catalog.shuffle_seed`.
    pub fn from_config(config: &Config, seed_override: Option<u64>) -> Self {
        let shuffle = match seed_override.or(config.catalog.shuffle_seed) {
            Some(seed) => ShuffleMode::Seeded(seed),
            None => ShuffleMode::Random,
        };
        Self {
            shuffle,
            grid_columns: config.ui.grid_columns,
            tick_rate: config.ui.tick_rate(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

/// A destination on the back stack together with the state it owns.
pub enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::List(_) => Route::PuppyList,
            Screen::Detail(detail) => Route::PuppyDetail { id: detail.id() },
        }
    }
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    repo: Arc<dyn PuppyRepository>,
    settings: AppSettings,
    stack: BackStack<Screen>,
}

impl App {
    /// Start on the puppy list. Requires a Tokio runtime.
    pub fn new(repo: Arc<dyn PuppyRepository>, settings: AppSettings) -> Self {
        let root = Screen::List(ListScreen::new(
            Arc::clone(&repo),
            settings.shuffle,
            settings.grid_columns,
        ));
        Self {
            should_quit: false,
            size: None,
            repo,
            settings,
            stack: BackStack::new(root),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn screen(&self) -> &Screen {
        self.stack.current()
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        self.stack.current_mut()
    }

    pub fn current_route(&self) -> Route {
        self.stack.current().route()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Push a new destination. Each push creates a fresh screen and
    /// view-model.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(route = %route, "Navigate");
        let screen = match route {
            Route::PuppyList => Screen::List(ListScreen::new(
                Arc::clone(&self.repo),
                self.settings.shuffle,
                self.settings.grid_columns,
            )),
            Route::PuppyDetail { id } => {
                Screen::Detail(DetailScreen::new(id, Arc::clone(&self.repo)))
            }
        };
        self.stack.push(screen);
    }

    /// Resolve and push a path such as `puppyDetail/7`.
    pub fn navigate_to_path(&mut self, path: &str) -> Result<(), NavigationError> {
        let route = Route::parse(path)?;
        self.navigate(route);
        Ok(())
    }

    /// Pop the current destination, dropping its view-model. No-op at the
    /// start destination.
    pub fn navigate_up(&mut self) -> bool {
        match self.stack.pop() {
            Some(screen) => {
                tracing::info!(from = %screen.route(), to = %self.current_route(), "Navigate up");
                true
            }
            None => false,
        }
    }

    /// Fold published view-model signals into the current screen and apply
    /// any navigation they call for.
    pub fn sync(&mut self) {
        let leave = match self.stack.current_mut() {
            Screen::List(list) => {
                list.sync();
                false
            }
            Screen::Detail(detail) => {
                detail.sync();
                detail.state().should_navigate_up()
            }
        };
        if leave {
            self.navigate_up();
        }
    }

    pub fn on_tick(&mut self) {
        self.sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, PuppyId};

    fn make_app() -> App {
        App::new(Arc::new(CatalogStore::new()), AppSettings::default())
    }

    #[tokio::test]
    async fn starts_on_the_list() {
        let app = make_app();
        assert_eq!(app.current_route(), Route::PuppyList);
        assert_eq!(app.depth(), 1);
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn navigate_up_at_root_is_noop() {
        let mut app = make_app();
        assert!(!app.navigate_up());
        assert_eq!(app.current_route(), Route::PuppyList);
    }

    #[tokio::test]
    async fn navigate_to_detail_path() {
        let mut app = make_app();
        app.navigate_to_path("puppyDetail/3").unwrap();
        assert_eq!(app.current_route(), Route::PuppyDetail { id: PuppyId(3) });
        assert!(app.navigate_up());
        assert_eq!(app.current_route(), Route::PuppyList);
    }

    #[tokio::test]
    async fn bad_path_leaves_stack_alone() {
        let mut app = make_app();
        assert!(app.navigate_to_path("puppyDetail/x").is_err());
        assert_eq!(app.depth(), 1);
    }

    #[test]
    fn seed_override_beats_config() {
        let mut config = Config::default();
        config.catalog.shuffle_seed = Some(1);
        assert_eq!(
            AppSettings::from_config(&config, Some(9)).shuffle,
            ShuffleMode::Seeded(9)
        );
        assert_eq!(
            AppSettings::from_config(&config, None).shuffle,
            ShuffleMode::Seeded(1)
        );
        assert_eq!(AppSettings::default().shuffle, ShuffleMode::Random);
    }
}
