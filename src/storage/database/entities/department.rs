use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Department database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    /// Department ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Department name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Department entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Teams of the department
    #[sea_orm(has_many = "super::team::Entity")]
    Teams,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
