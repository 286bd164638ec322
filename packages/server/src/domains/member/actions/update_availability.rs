//! Update member availability action

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

/// Toggle whether a member is taking bookings.
///
/// On success the `members` query is re-fetched before returning.
pub async fn update_member_availability(
    member_id: &str,
    available: bool,
    deps: &ServerDeps,
) -> Result<Member> {
    info!(member_id, available, "Updating member availability");

    let updated = deps
        .store
        .update_member_availability(member_id, available)
        .await
        .map_err(|e| {
            error!(member_id, error = %e, "Failed to update member availability");
            e
        })
        .with_context(|| format!("Failed to update availability for member {}", member_id))?;

    deps.queries.invalidate_members().await;

    Ok(updated)
}
