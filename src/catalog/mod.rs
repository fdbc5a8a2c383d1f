//! Read-only puppy catalog.
//!
//! The catalog is a fixed table built into the binary. It is exposed through
//! the [`PuppyRepository`] trait so view-models stay independent of where
//! records come from.

mod record;
mod store;

pub use record::{Gender, ImageRef, PuppyId, PuppyRecord};
pub use store::{CatalogStore, PuppyRepository, CATALOG_SIZE};
