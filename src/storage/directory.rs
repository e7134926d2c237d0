//! Directory trait

use crate::auth::authority::ScopeFilter;
use crate::core::models::{ActorInfo, DepartmentId, TeamId, TeamInfo, UserId};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// Filter for team listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    /// Restrict to one department
    pub department_id: Option<DepartmentId>,
    /// Skip inactive teams
    pub active_only: bool,
}

impl TeamFilter {
    /// Every active team
    pub fn active() -> Self {
        Self {
            department_id: None,
            active_only: true,
        }
    }

    /// Active teams of one department
    pub fn active_in(department_id: DepartmentId) -> Self {
        Self {
            department_id: Some(department_id),
            active_only: true,
        }
    }

    /// Whether `team` passes the filter
    pub fn matches(&self, team: &TeamInfo) -> bool {
        (!self.active_only || team.is_active)
            && self
                .department_id
                .is_none_or(|department_id| team.department_id == department_id)
    }
}

/// Read access to the user, team and department directory.
///
/// Implementations must evaluate [`ScopeFilter`] exactly as
/// [`ScopeFilter::matches`] does; the authority engine relies on that to keep
/// bulk scopes and pointwise checks in agreement.
#[async_trait::async_trait]
pub trait Directory: Send + Sync {
    /// Look up a user's identity and placement
    async fn get_actor_info(&self, user_id: UserId) -> Result<Option<ActorInfo>>;

    /// Look up a team
    async fn get_team_info(&self, team_id: TeamId) -> Result<Option<TeamInfo>>;

    /// Resolve a department name to its ID
    async fn get_department_id_by_name(&self, name: &str) -> Result<Option<DepartmentId>>;

    /// IDs of every user selected by `filter`
    async fn find_user_ids(&self, filter: &ScopeFilter) -> Result<BTreeSet<UserId>>;

    /// Teams selected by `filter`, ordered by name
    async fn find_teams(&self, filter: &TeamFilter) -> Result<Vec<TeamInfo>>;
}
