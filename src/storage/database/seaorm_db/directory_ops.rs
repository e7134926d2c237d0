use crate::auth::authority::{DepartmentKey, Placement, ScopeFilter};
use crate::core::models::{ActorInfo, DepartmentId, TeamId, TeamInfo, UserId};
use crate::storage::directory::{Directory, TeamFilter};
use crate::storage::memory::DirectorySnapshot;
use crate::utils::error::{AuthzError, Result};
use sea_orm::*;
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::super::entities::{self, department, team, user};
use super::types::SeaOrmDatabase;

/// SQL rendering of a [`ScopeFilter`] over the `users` table.
///
/// Mirrors [`ScopeFilter::matches`]: stored roles outside the known set pass
/// `NOT IN`, exactly as they parse to `user` in memory.
pub fn scope_condition(filter: &ScopeFilter) -> Condition {
    let mut condition = Condition::all().add(user::Column::Id.ne(filter.actor_id));

    if !filter.excluded_roles.is_empty() {
        condition = condition.add(user::Column::Role.is_not_in(filter.excluded_role_names()));
    }

    match &filter.placement {
        Placement::Anywhere => condition,
        Placement::Department(DepartmentKey::Id(id)) => {
            condition.add(user::Column::DepartmentId.eq(*id))
        }
        Placement::Department(DepartmentKey::Name(name)) => {
            condition.add(user::Column::Department.eq(name.as_str()))
        }
        Placement::Team(team_id) => condition.add(user::Column::TeamId.eq(*team_id)),
    }
}

fn team_condition(filter: &TeamFilter) -> Condition {
    let mut condition = Condition::all();
    if filter.active_only {
        condition = condition.add(team::Column::IsActive.eq(true));
    }
    if let Some(department_id) = filter.department_id {
        condition = condition.add(team::Column::DepartmentId.eq(department_id));
    }
    condition
}

#[async_trait::async_trait]
impl Directory for SeaOrmDatabase {
    async fn get_actor_info(&self, user_id: UserId) -> Result<Option<ActorInfo>> {
        debug!("Finding actor by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(user_model.map(|model| model.to_actor_info()))
    }

    async fn get_team_info(&self, team_id: TeamId) -> Result<Option<TeamInfo>> {
        debug!("Finding team by ID: {}", team_id);

        let team_model = entities::Team::find_by_id(team_id)
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(team_model.map(|model| model.to_team_info()))
    }

    async fn get_department_id_by_name(&self, name: &str) -> Result<Option<DepartmentId>> {
        debug!("Finding department by name: {}", name);

        let department_model = entities::Department::find()
            .filter(department::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(department_model.map(|model| model.id))
    }

    async fn find_user_ids(&self, filter: &ScopeFilter) -> Result<BTreeSet<UserId>> {
        debug!("Materializing scope for actor {}", filter.actor_id);

        let ids = entities::User::find()
            .select_only()
            .column(user::Column::Id)
            .filter(scope_condition(filter))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(ids.into_iter().collect())
    }

    async fn find_teams(&self, filter: &TeamFilter) -> Result<Vec<TeamInfo>> {
        let teams = entities::Team::find()
            .filter(team_condition(filter))
            .order_by_asc(team::Column::Name)
            .order_by_asc(team::Column::Id)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(teams.iter().map(team::Model::to_team_info).collect())
    }
}

impl SeaOrmDatabase {
    /// Create a department
    pub async fn insert_department(&self, id: DepartmentId, name: &str) -> Result<()> {
        insert_department(&self.db, id, name).await
    }

    /// Create a user from an actor record
    pub async fn insert_user(&self, actor: &ActorInfo, name: &str) -> Result<()> {
        insert_user(&self.db, actor, name).await
    }

    /// Create a team
    pub async fn insert_team(&self, team: &TeamInfo) -> Result<()> {
        insert_team(&self.db, team).await
    }

    /// Load a directory snapshot in one transaction.
    ///
    /// Explicit IDs are kept, so the snapshot must not collide with existing rows.
    pub async fn import_snapshot(&self, snapshot: &DirectorySnapshot) -> Result<()> {
        info!(
            "Importing {} departments, {} users, {} teams",
            snapshot.departments.len(),
            snapshot.users.len(),
            snapshot.teams.len()
        );

        let txn = self.db.begin().await.map_err(AuthzError::Database)?;

        for (id, name) in &snapshot.departments {
            insert_department(&txn, *id, name).await?;
        }
        for actor in &snapshot.users {
            insert_user(&txn, actor, &format!("user-{}", actor.id)).await?;
        }
        for team_info in &snapshot.teams {
            insert_team(&txn, team_info).await?;
        }

        txn.commit().await.map_err(AuthzError::Database)?;
        Ok(())
    }

    /// Overwrite the stored role string of a user, bypassing role parsing
    pub async fn set_raw_role(&self, user_id: UserId, role: &str) -> Result<()> {
        let model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?
            .ok_or_else(|| AuthzError::NotFound(format!("User {}", user_id)))?;

        let mut active_model: user::ActiveModel = model.into();
        active_model.role = Set(role.to_string());
        active_model.updated_at = Set(chrono::Utc::now().into());
        active_model
            .update(&self.db)
            .await
            .map_err(AuthzError::Database)?;
        Ok(())
    }
}

async fn insert_department<C: ConnectionTrait>(db: &C, id: DepartmentId, name: &str) -> Result<()> {
    let active_model = department::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        created_at: Set(chrono::Utc::now().into()),
    };

    entities::Department::insert(active_model)
        .exec(db)
        .await
        .map_err(AuthzError::Database)?;
    Ok(())
}

async fn insert_user<C: ConnectionTrait>(db: &C, actor: &ActorInfo, name: &str) -> Result<()> {
    entities::User::insert(user::Model::from_actor_info(actor, name))
        .exec(db)
        .await
        .map_err(AuthzError::Database)?;
    Ok(())
}

async fn insert_team<C: ConnectionTrait>(db: &C, team_info: &TeamInfo) -> Result<()> {
    entities::Team::insert(team::Model::from_team_info(team_info))
        .exec(db)
        .await
        .map_err(AuthzError::Database)?;
    Ok(())
}
