//! Member query actions

use anyhow::Result;
use tracing::info;

use crate::common::Resolved;
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

/// Resolved member directory: live rows, fallback rows, or loading.
pub fn list_members(deps: &ServerDeps) -> Resolved<Member> {
    deps.queries.members()
}

/// Look up a single member straight from the store, bypassing the cache.
pub async fn get_member(id: &str, deps: &ServerDeps) -> Result<Option<Member>> {
    info!(member_id = id, "Getting member");
    deps.store.find_member(id).await
}
