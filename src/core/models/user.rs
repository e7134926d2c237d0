//! Actor identity

use super::{DepartmentId, TeamId, UserId};
use crate::auth::hierarchy::Role;
use serde::{Deserialize, Serialize};

/// Identity and organizational placement of a user.
///
/// Used both for the actor of a decision and for its target. `department_id`
/// is authoritative when present; `department_name` only covers rows that
/// predate department normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorInfo {
    /// User ID
    pub id: UserId,
    /// Role, unknown stored values already degraded to `user`
    pub role: Role,
    /// Department name (legacy placement)
    #[serde(default)]
    pub department_name: Option<String>,
    /// Department ID
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

impl ActorInfo {
    /// Create an actor with no organizational placement
    pub fn new(id: UserId, role: Role) -> Self {
        Self {
            id,
            role,
            department_name: None,
            department_id: None,
            team_id: None,
        }
    }

    /// Set the department ID
    pub fn with_department_id(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Set the legacy department name
    pub fn with_department_name(mut self, name: impl Into<String>) -> Self {
        self.department_name = Some(name.into());
        self
    }

    /// Set the team ID
    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Role level shortcut
    pub fn level(&self) -> u8 {
        self.role.level()
    }
}
