//! Contains domain models: customers, tours, directed ids and problem definitions.

pub mod common;
pub mod directed;

mod problem;
pub use self::problem::*;

mod tour;
pub use self::tour::Tour;
