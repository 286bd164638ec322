// HTTP routes
pub mod directory;
pub mod health;
pub mod mutations;

pub use directory::*;
pub use health::*;
pub use mutations::*;
