pub mod member;

pub use member::{AvailabilityUpdate, Member};
