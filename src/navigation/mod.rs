//! Two-destination navigation graph: the puppy list (start destination) and
//! a puppy detail parameterized by id.

mod back_stack;
mod route;

pub use back_stack::BackStack;
pub use route::{NavigationError, Route};
