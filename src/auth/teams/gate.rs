//! Team management decisions

use crate::auth::authority::DepartmentKey;
use crate::auth::hierarchy::Role;
use crate::config::AuthorityConfig;
use crate::core::models::{ActorInfo, TeamId, TeamInfo, UserId};
use crate::storage::{Directory, TeamFilter};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use tracing::debug;

/// Whether `actor` may administer teams at all
pub fn can_manage_teams(actor: &ActorInfo) -> bool {
    actor.role >= Role::Gm
}

/// Whether `actor` may appoint `target_user_id` as on-site leader of `team_id`.
///
/// Admins and board members may appoint anywhere, a GM only within their own
/// department. With `require_target_in_team_department` set, the appointee
/// must also belong to the team's department.
pub async fn can_assign_onsite_leader(
    directory: &dyn Directory,
    actor: &ActorInfo,
    target_user_id: UserId,
    team_id: TeamId,
    config: &AuthorityConfig,
) -> Result<bool> {
    if !can_manage_teams(actor) {
        return Ok(false);
    }

    let Some(team) = directory.get_team_info(team_id).await? else {
        debug!("Team {} not found", team_id);
        return Ok(false);
    };

    let actor_allowed = match actor.role {
        Role::Admin | Role::Bod => true,
        Role::Gm => in_department(directory, actor, &team).await?,
        _ => false,
    };

    if !actor_allowed || !config.require_target_in_team_department {
        return Ok(actor_allowed);
    }

    match directory.get_actor_info(target_user_id).await? {
        Some(target) => in_department(directory, &target, &team).await,
        None => {
            debug!("Appointee {} not found", target_user_id);
            Ok(false)
        }
    }
}

/// Roles `actor` may grant.
///
/// Everything for an admin; otherwise the roles strictly below the actor's
/// own, never including admin.
pub fn assignable_roles(actor: &ActorInfo) -> BTreeSet<Role> {
    if actor.role == Role::Admin {
        return Role::User.and_above().collect();
    }

    actor
        .role
        .below()
        .filter(|role| *role != Role::Admin)
        .collect()
}

/// Active teams `actor_id` may administer, ordered by name
pub async fn manageable_teams(
    directory: &dyn Directory,
    actor_id: UserId,
) -> Result<Vec<TeamInfo>> {
    let Some(actor) = directory.get_actor_info(actor_id).await? else {
        return Ok(Vec::new());
    };

    match actor.role {
        Role::Admin | Role::Bod => directory.find_teams(&TeamFilter::active()).await,
        Role::Gm => {
            let Some(key) = DepartmentKey::for_actor(&actor) else {
                return Ok(Vec::new());
            };
            match key.resolve_id(directory).await? {
                Some(department_id) => {
                    directory
                        .find_teams(&TeamFilter::active_in(department_id))
                        .await
                }
                None => Ok(Vec::new()),
            }
        }
        _ => Ok(Vec::new()),
    }
}

/// Whether `actor` may add or remove members of `team_id`
pub fn can_modify_team_membership(actor: &ActorInfo, team_id: TeamId) -> bool {
    can_manage_teams(actor) || (actor.role == Role::OnsiteLeader && actor.team_id == Some(team_id))
}

/// Whether `actor` may remove `member_id` from `team`.
///
/// The designated leader cannot be removed as a plain member.
pub fn can_remove_team_member(actor: &ActorInfo, team: &TeamInfo, member_id: UserId) -> bool {
    can_modify_team_membership(actor, team.id) && !team.is_led_by(member_id)
}

async fn in_department(
    directory: &dyn Directory,
    user: &ActorInfo,
    team: &TeamInfo,
) -> Result<bool> {
    let Some(key) = DepartmentKey::for_actor(user) else {
        return Ok(false);
    };

    Ok(key.resolve_id(directory).await? == Some(team.department_id))
}
