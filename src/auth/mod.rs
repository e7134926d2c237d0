//! Authority and scoping engine
//!
//! This module answers two questions for every protected operation: whether
//! one user has authority over another, and which users an actor may see or
//! act on. Team administration gates are built on the same role hierarchy.

pub mod authority;
pub mod hierarchy;
pub mod teams;

pub use authority::{OwnerFilter, ScopeFilter};
pub use hierarchy::Role;

use crate::config::AuthorityConfig;
use crate::core::models::{ActorInfo, TeamId, TeamInfo, UserId};
use crate::storage::Directory;
use crate::utils::error::{AuthzError, Result};
use crate::utils::logging::AuthzLogger;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// Main authority engine
#[derive(Clone)]
pub struct AuthorityEngine {
    /// User, team and department lookups
    directory: Arc<dyn Directory>,
    /// Policy switches
    config: Arc<AuthorityConfig>,
}

impl AuthorityEngine {
    /// Create a new engine over `directory`
    pub fn new(directory: Arc<dyn Directory>, config: &AuthorityConfig) -> Self {
        info!(
            "Initializing authority engine (require_target_in_team_department: {})",
            config.require_target_in_team_department
        );

        Self {
            directory,
            config: Arc::new(config.clone()),
        }
    }

    /// Directory handle
    pub fn directory(&self) -> &Arc<dyn Directory> {
        &self.directory
    }

    /// Policy configuration
    pub fn config(&self) -> &AuthorityConfig {
        &self.config
    }

    /// Look up a user
    pub async fn actor(&self, user_id: UserId) -> Result<Option<ActorInfo>> {
        self.directory.get_actor_info(user_id).await
    }

    /// Whether `actor` has authority over `target`
    pub fn has_authority_over(&self, actor: &ActorInfo, target: &ActorInfo) -> bool {
        let granted = authority::has_authority_over(actor, target);
        self.log(actor.id, "authority_over", Some(target.id), granted);
        granted
    }

    /// `Forbidden` unless `actor` has authority over `target`.
    ///
    /// The error message never says why.
    pub fn ensure_authority_over(&self, actor: &ActorInfo, target: &ActorInfo) -> Result<()> {
        if self.has_authority_over(actor, target) {
            Ok(())
        } else {
            Err(AuthzError::forbidden("Insufficient authority"))
        }
    }

    /// Every user `actor_id` has authority over
    pub async fn users_under_authority(&self, actor_id: UserId) -> Result<BTreeSet<UserId>> {
        authority::users_under_authority(self.directory.as_ref(), actor_id).await
    }

    /// Like [`Self::users_under_authority`], but a failed lookup yields the
    /// empty scope
    pub async fn scope_or_deny(&self, actor_id: UserId) -> BTreeSet<UserId> {
        match self.users_under_authority(actor_id).await {
            Ok(scope) => scope,
            Err(e) => {
                AuthzLogger::log_fail_closed(actor_id, "users_under_authority", &e);
                BTreeSet::new()
            }
        }
    }

    /// Owner restriction for list queries, optionally including the actor's
    /// own records
    pub async fn owner_filter(&self, actor_id: UserId, include_self: bool) -> Result<OwnerFilter> {
        let scope = self.users_under_authority(actor_id).await?;
        Ok(OwnerFilter::new(scope, include_self.then_some(actor_id)))
    }

    /// Whether `actor` may administer teams
    pub fn can_manage_teams(&self, actor: &ActorInfo) -> bool {
        let granted = teams::can_manage_teams(actor);
        self.log(actor.id, "manage_teams", None, granted);
        granted
    }

    /// Whether `actor` may appoint `target_user_id` as leader of `team_id`
    pub async fn can_assign_onsite_leader(
        &self,
        actor: &ActorInfo,
        target_user_id: UserId,
        team_id: TeamId,
    ) -> Result<bool> {
        let granted = teams::can_assign_onsite_leader(
            self.directory.as_ref(),
            actor,
            target_user_id,
            team_id,
            &self.config,
        )
        .await?;
        self.log(actor.id, "assign_onsite_leader", Some(team_id), granted);
        Ok(granted)
    }

    /// Roles `actor` may grant
    pub fn assignable_roles(&self, actor: &ActorInfo) -> BTreeSet<Role> {
        teams::assignable_roles(actor)
    }

    /// Active teams `actor_id` may administer
    pub async fn manageable_teams(&self, actor_id: UserId) -> Result<Vec<TeamInfo>> {
        teams::manageable_teams(self.directory.as_ref(), actor_id).await
    }

    /// Whether `actor` may change the members of `team_id`
    pub fn can_modify_team_membership(&self, actor: &ActorInfo, team_id: TeamId) -> bool {
        let granted = teams::can_modify_team_membership(actor, team_id);
        self.log(actor.id, "modify_team_membership", Some(team_id), granted);
        granted
    }

    /// Whether `actor` may remove `member_id` from `team`
    pub fn can_remove_team_member(
        &self,
        actor: &ActorInfo,
        team: &TeamInfo,
        member_id: UserId,
    ) -> bool {
        let granted = teams::can_remove_team_member(actor, team, member_id);
        self.log(actor.id, "remove_team_member", Some(member_id), granted);
        granted
    }

    fn log(&self, actor_id: UserId, action: &str, subject: Option<i64>, granted: bool) {
        if self.config.log_decisions {
            AuthzLogger::log_decision(actor_id, action, subject, granted);
        }
    }
}
