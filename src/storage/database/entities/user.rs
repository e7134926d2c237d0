use crate::auth::hierarchy::Role;
use crate::core::models::ActorInfo;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Stored role. Values outside the known roles are tolerated.
    pub role: String,

    /// Legacy department name
    pub department: Option<String>,

    /// Normalized department ID
    pub department_id: Option<i64>,

    /// Team ID
    pub team_id: Option<i64>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to the actor record used by the engine
    pub fn to_actor_info(&self) -> ActorInfo {
        ActorInfo {
            id: self.id,
            role: Role::from_stored(&self.role),
            department_name: self.department.clone(),
            department_id: self.department_id,
            team_id: self.team_id,
        }
    }

    /// Build an active model from an actor record
    pub fn from_actor_info(actor: &ActorInfo, name: &str) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            id: Set(actor.id),
            name: Set(name.to_string()),
            role: Set(actor.role.as_str().to_string()),
            department: Set(actor.department_name.clone()),
            department_id: Set(actor.department_id),
            team_id: Set(actor.team_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
