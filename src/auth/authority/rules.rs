//! Authority rule table
//!
//! One row per role that holds authority over others. Roles without a row
//! (`user`, `approver`) have authority over nobody.

use crate::auth::hierarchy::Role;

/// Which part of the organization an actor reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Every user
    Everyone,
    /// Users in the actor's department
    Department,
    /// Users in the actor's team
    Team,
}

/// Which target roles are out of reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ceiling {
    /// No role is excluded
    Unbounded,
    /// The listed roles are excluded
    Excluding(&'static [Role]),
    /// Roles at or above the given level are excluded
    Below(Role),
}

impl Ceiling {
    /// Whether a target with `role` is within the ceiling
    pub fn admits(&self, role: Role) -> bool {
        match self {
            Ceiling::Unbounded => true,
            Ceiling::Excluding(excluded) => !excluded.contains(&role),
            Ceiling::Below(limit) => role.level() < limit.level(),
        }
    }

    /// Roles rejected by the ceiling, lowest first
    pub fn excluded_roles(&self) -> Vec<Role> {
        match self {
            Ceiling::Unbounded => Vec::new(),
            Ceiling::Excluding(excluded) => {
                let mut roles = excluded.to_vec();
                roles.sort();
                roles
            }
            Ceiling::Below(limit) => limit.and_above().collect(),
        }
    }
}

/// Authority held by one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityRule {
    /// Organizational reach
    pub reach: Reach,
    /// Target role ceiling
    pub ceiling: Ceiling,
}

/// The rule table
pub const AUTHORITY_RULES: [(Role, AuthorityRule); 4] = [
    (
        Role::Admin,
        AuthorityRule {
            reach: Reach::Everyone,
            ceiling: Ceiling::Unbounded,
        },
    ),
    (
        Role::Bod,
        AuthorityRule {
            reach: Reach::Everyone,
            ceiling: Ceiling::Excluding(&[Role::Admin]),
        },
    ),
    (
        Role::Gm,
        AuthorityRule {
            reach: Reach::Department,
            ceiling: Ceiling::Excluding(&[Role::Admin, Role::Bod, Role::Gm]),
        },
    ),
    (
        Role::OnsiteLeader,
        AuthorityRule {
            reach: Reach::Team,
            ceiling: Ceiling::Below(Role::OnsiteLeader),
        },
    ),
];

impl AuthorityRule {
    /// Rule for `role`, if the role holds authority over anyone
    pub fn for_role(role: Role) -> Option<Self> {
        AUTHORITY_RULES
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, rule)| *rule)
    }
}
