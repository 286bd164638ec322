// Common types shared across the application

pub mod fetch_state;
pub mod resolution;

pub use fetch_state::{Availability, FetchError, FetchState};
pub use resolution::{resolve, resolve_category, Categorized, Category, Resolved};
