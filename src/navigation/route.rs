use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::PuppyId;

const LIST_PATH: &str = "puppyList";
const DETAIL_PREFIX: &str = "puppyDetail";

/// Errors produced when resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown destination '{path}'")]
    UnknownDestination { path: String },

    #[error("Destination '{path}' requires a puppy id")]
    MissingId { path: String },

    #[error("Invalid puppy id '{value}' in '{path}'")]
    InvalidId { path: String, value: String },
}

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PuppyList,
    PuppyDetail { id: PuppyId },
}

impl Route {
    /// Path form, e.g. `puppyList` or `puppyDetail/7`.
    pub fn path(&self) -> String {
        match self {
            Route::PuppyList => LIST_PATH.to_string(),
            Route::PuppyDetail { id } => format!("{}/{}", DETAIL_PREFIX, id),
        }
    }

    pub fn parse(path: &str) -> Result<Self, NavigationError> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed == LIST_PATH {
            return Ok(Route::PuppyList);
        }

        let mut segments = trimmed.splitn(2, '/');
        if segments.next() != Some(DETAIL_PREFIX) {
            return Err(NavigationError::UnknownDestination {
                path: path.to_string(),
            });
        }

        let Some(raw_id) = segments.next().filter(|s| !s.is_empty()) else {
            return Err(NavigationError::MissingId {
                path: path.to_string(),
            });
        };

        raw_id
            .parse::<u32>()
            .map(|id| Route::PuppyDetail { id: PuppyId(id) })
            .map_err(|_| NavigationError::InvalidId {
                path: path.to_string(),
                value: raw_id.to_string(),
            })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
