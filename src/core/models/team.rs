//! Team records

use super::{DepartmentId, TeamId, UserId, default_true};
use serde::{Deserialize, Serialize};

/// A team and its placement in a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    /// Team ID
    pub id: TeamId,
    /// Team name
    #[serde(default)]
    pub name: String,
    /// Owning department
    pub department_id: DepartmentId,
    /// Designated on-site leader
    #[serde(default)]
    pub leader_id: Option<UserId>,
    /// Inactive teams are hidden from management listings
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TeamInfo {
    /// Create an active team without a leader
    pub fn new(id: TeamId, name: impl Into<String>, department_id: DepartmentId) -> Self {
        Self {
            id,
            name: name.into(),
            department_id,
            leader_id: None,
            is_active: true,
        }
    }

    /// Set the designated leader
    pub fn with_leader(mut self, leader_id: UserId) -> Self {
        self.leader_id = Some(leader_id);
        self
    }

    /// Mark the team inactive
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether `user_id` is the designated leader
    pub fn is_led_by(&self, user_id: UserId) -> bool {
        self.leader_id == Some(user_id)
    }
}
