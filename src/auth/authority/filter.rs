//! Per-actor scope filter
//!
//! The compiled form of an actor's authority rule. Directories evaluate it
//! either row by row through [`ScopeFilter::matches`] or by translating it into
//! a query; both must select the same users.

use super::department::DepartmentKey;
use super::rules::{AuthorityRule, Reach};
use crate::auth::hierarchy::Role;
use crate::core::models::{ActorInfo, TeamId, UserId};

/// Organizational restriction of a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// No restriction
    Anywhere,
    /// Same department
    Department(DepartmentKey),
    /// Same team
    Team(TeamId),
}

impl Placement {
    /// Whether `target` is placed inside this restriction
    pub fn contains(&self, target: &ActorInfo) -> bool {
        match self {
            Placement::Anywhere => true,
            Placement::Department(key) => key.matches(target),
            Placement::Team(team_id) => target.team_id == Some(*team_id),
        }
    }
}

/// Filter selecting every user an actor has authority over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFilter {
    /// The actor, never part of its own scope
    pub actor_id: UserId,
    /// Organizational restriction
    pub placement: Placement,
    /// Target roles that are out of reach
    pub excluded_roles: Vec<Role>,
}

impl ScopeFilter {
    /// Compile the rule for `actor`.
    ///
    /// Returns `None` when the actor has authority over nobody, including a
    /// department-scoped actor without a department and a team-scoped actor
    /// without a team.
    pub fn for_actor(actor: &ActorInfo) -> Option<Self> {
        let rule = AuthorityRule::for_role(actor.role)?;

        let placement = match rule.reach {
            Reach::Everyone => Placement::Anywhere,
            Reach::Department => Placement::Department(DepartmentKey::for_actor(actor)?),
            Reach::Team => Placement::Team(actor.team_id?),
        };

        Some(Self {
            actor_id: actor.id,
            placement,
            excluded_roles: rule.ceiling.excluded_roles(),
        })
    }

    /// Whether `target` is inside the scope
    pub fn matches(&self, target: &ActorInfo) -> bool {
        target.id != self.actor_id
            && !self.excluded_roles.contains(&target.role)
            && self.placement.contains(target)
    }

    /// Stored names of the excluded roles
    pub fn excluded_role_names(&self) -> Vec<&'static str> {
        self.excluded_roles.iter().map(|role| role.as_str()).collect()
    }
}
