//! Bulk scope materialization

use super::filter::ScopeFilter;
use crate::core::models::{ActorInfo, UserId};
use crate::storage::Directory;
use crate::utils::error::Result;
use sea_orm::{ColumnTrait, Condition};
use std::collections::BTreeSet;
use tracing::debug;

/// Every user `actor_id` has authority over.
///
/// An actor missing from the directory has an empty scope. Lookup failures
/// are returned to the caller.
pub async fn users_under_authority(
    directory: &dyn Directory,
    actor_id: UserId,
) -> Result<BTreeSet<UserId>> {
    let Some(actor) = directory.get_actor_info(actor_id).await? else {
        debug!("Actor {} not found, scope is empty", actor_id);
        return Ok(BTreeSet::new());
    };

    scope_of(directory, &actor).await
}

/// Scope of an already resolved actor
pub async fn scope_of(directory: &dyn Directory, actor: &ActorInfo) -> Result<BTreeSet<UserId>> {
    match ScopeFilter::for_actor(actor) {
        Some(filter) => directory.find_user_ids(&filter).await,
        None => Ok(BTreeSet::new()),
    }
}

/// Owner restriction for list queries over user-owned resources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerFilter {
    owners: BTreeSet<UserId>,
}

impl OwnerFilter {
    /// Restrict to `scope`, optionally widened with the actor's own records
    pub fn new(scope: BTreeSet<UserId>, include_self: Option<UserId>) -> Self {
        let mut owners = scope;
        owners.extend(include_self);
        Self { owners }
    }

    /// Whether a record owned by `owner` is visible
    pub fn allows(&self, owner: UserId) -> bool {
        self.owners.contains(&owner)
    }

    /// Whether nothing is visible
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Visible owner IDs
    pub fn owners(&self) -> &BTreeSet<UserId> {
        &self.owners
    }

    /// `column IN (...)` condition. An empty filter renders as an always-false
    /// predicate, so it never widens to an unrestricted query.
    pub fn to_condition<C: ColumnTrait>(&self, column: C) -> Condition {
        Condition::all().add(column.is_in(self.owners.iter().copied()))
    }
}
