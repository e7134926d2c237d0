//! Authority policy configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Policy switches for the authority engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityConfig {
    /// When assigning an on-site leader, also require the appointed user to
    /// belong to the team's department
    #[serde(default)]
    pub require_target_in_team_department: bool,
    /// Emit a structured event for every gated decision
    #[serde(default = "default_true")]
    pub log_decisions: bool,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            require_target_in_team_department: false,
            log_decisions: true,
        }
    }
}
