//! Member domain actions
//!
//! Writes go to the directory store, then invalidate the cached `members`
//! read so the next resolution reflects them.

mod queries;
mod update_availability;

pub use queries::{get_member, list_members};
pub use update_availability::update_member_availability;
