//! Wonderfluff: browse a fixed catalog of adoptable puppies in the terminal.
//!
//! - [`catalog`] - immutable puppy records and the repository trait
//! - [`viewmodel`] - list/detail state holders publishing watch signals
//! - [`navigation`] - routes and the back stack
//! - [`ui`] - MVI screens and the ratatui runtime

pub mod catalog;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod ui;
pub mod viewmodel;
