//! Team administration gates
//!
//! Admission checks for team mutations: creating and editing teams, managing
//! members and appointing on-site leaders.

mod gate;

pub use gate::{
    assignable_roles, can_assign_onsite_leader, can_manage_teams, can_modify_team_membership,
    can_remove_team_member, manageable_teams,
};
