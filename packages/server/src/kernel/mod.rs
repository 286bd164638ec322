//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod query;
pub mod query_client;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, SupabaseStore};
pub use query::Query;
pub use query_client::DirectoryQueries;
pub use test_dependencies::{MockDirectoryStore, StoreCall, TestDependencies};
pub use traits::*;
