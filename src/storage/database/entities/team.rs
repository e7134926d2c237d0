use crate::core::models::TeamInfo;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Team database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    /// Team ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Team name
    pub name: String,

    /// Owning department
    pub department_id: i64,

    /// Designated on-site leader
    pub leader_id: Option<i64>,

    /// Whether the team is active
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Team entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning department
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the team record used by the engine
    pub fn to_team_info(&self) -> TeamInfo {
        TeamInfo {
            id: self.id,
            name: self.name.clone(),
            department_id: self.department_id,
            leader_id: self.leader_id,
            is_active: self.is_active,
        }
    }

    /// Build an active model from a team record
    pub fn from_team_info(team: &TeamInfo) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            id: Set(team.id),
            name: Set(team.name.clone()),
            department_id: Set(team.department_id),
            leader_id: Set(team.leader_id),
            is_active: Set(team.is_active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
