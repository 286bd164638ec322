//! Member domain - the pet sitter directory

pub mod actions;
pub mod fallback;
pub mod models;

pub use fallback::FALLBACK_MEMBERS;
pub use models::member::Member;
