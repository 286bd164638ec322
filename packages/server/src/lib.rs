// PetSitter Network NZ - Directory API Core
//
// Serves the landing page, member directory, emergency alerts and pricing
// tiers. Each category resolves to live data from the hosted data service or
// to static fallback records when live data is unusable.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
