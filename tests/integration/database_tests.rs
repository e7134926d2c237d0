//! Database integration tests
//!
//! Runs the SQL directory against a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::database::test_db_config;
    use crate::common::{DirectoryFactory, TestDatabase};
    use org_authority::config::DatabaseConfig;
    use org_authority::storage::database::{Database, DatabaseBackendType};
    use org_authority::storage::database::entities::{User, user};
    use org_authority::{
        ActorInfo, AuthzError, Directory, DirectorySnapshot, OwnerFilter, Role, TeamFilter,
        TeamInfo, users_under_authority,
    };
    use sea_orm::{EntityTrait, QueryFilter};
    use std::collections::{BTreeMap, BTreeSet};

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;

        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
        let health = db.db().health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    #[tokio::test]
    async fn test_migration_is_idempotent() {
        let db = Database::new(&test_db_config()).await.expect("Failed to create database");

        assert!(db.migrate().await.is_ok());
        let again = db.migrate().await;
        assert!(again.is_ok(), "Second migration failed: {:?}", again.err());
    }

    #[tokio::test]
    async fn test_unsupported_url_is_rejected() {
        let config = DatabaseConfig {
            url: "mysql://localhost/org".to_string(),
            ..test_db_config()
        };

        let result = Database::new(&config).await;
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[tokio::test]
    async fn test_actor_round_trip() {
        let db = TestDatabase::new().await;
        db.db().insert_department(1, "Sales").await.unwrap();

        let actor = ActorInfo::new(42, Role::OnsiteLeader)
            .with_department_id(1)
            .with_department_name("Sales")
            .with_team(7);
        db.db().insert_user(&actor, "Hanako").await.unwrap();

        assert_eq!(db.db().get_actor_info(42).await.unwrap(), Some(actor));
        assert_eq!(db.db().get_actor_info(43).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_legacy_role_degrades_to_user() {
        let db = TestDatabase::new().await;
        db.db().insert_user(&ActorInfo::new(1, Role::Gm), "Legacy").await.unwrap();
        db.db().set_raw_role(1, "department_head").await.unwrap();

        let actor = db.db().get_actor_info(1).await.unwrap().unwrap();
        assert_eq!(actor.role, Role::User);
    }

    #[tokio::test]
    async fn test_set_raw_role_on_missing_user() {
        let db = TestDatabase::new().await;
        let result = db.db().set_raw_role(9, "admin").await;
        assert!(matches!(result, Err(AuthzError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_department_lookup_is_exact() {
        let db = TestDatabase::with_snapshot(&DirectoryFactory::organization()).await;

        assert_eq!(db.db().get_department_id_by_name("Ops").await.unwrap(), Some(2));
        assert_eq!(db.db().get_department_id_by_name("ops").await.unwrap(), None);
        assert_eq!(db.db().get_department_id_by_name("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_team_queries() {
        let db = TestDatabase::with_snapshot(&DirectoryFactory::organization()).await;

        let team = db.db().get_team_info(10).await.unwrap().unwrap();
        assert_eq!(team, TeamInfo::new(10, "Field Sales", 1).with_leader(5));
        assert!(db.db().get_team_info(99).await.unwrap().is_none());

        let all: Vec<i64> = db
            .db()
            .find_teams(&TeamFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(all, vec![15, 10, 11]);

        let sales: Vec<i64> = db
            .db()
            .find_teams(&TeamFilter::active_in(1))
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(sales, vec![10]);
    }

    #[tokio::test]
    async fn test_import_rejects_duplicate_ids() {
        let db = TestDatabase::with_snapshot(&DirectoryFactory::organization()).await;

        // A new department followed by a user id that is already taken
        let colliding = DirectorySnapshot {
            departments: BTreeMap::from([(99, "Research".to_string())]),
            users: vec![ActorInfo::new(5, Role::User).with_department_id(99)],
            teams: Vec::new(),
        };
        let result = db.db().import_snapshot(&colliding).await;
        assert!(matches!(result, Err(AuthzError::Database(_))));

        // The department inserted before the collision was rolled back
        assert_eq!(db.db().get_department_id_by_name("Research").await.unwrap(), None);
        assert_eq!(db.db().get_department_id_by_name("Sales").await.unwrap(), Some(1));
        assert!(db.db().get_team_info(11).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_owner_filter_condition() {
        let db = TestDatabase::with_snapshot(&DirectoryFactory::organization()).await;
        let visible = |filter: OwnerFilter| {
            let db = db.clone();
            async move {
                User::find()
                    .filter(filter.to_condition(user::Column::Id))
                    .all(db.db().connection())
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|model| model.id)
                    .collect::<BTreeSet<_>>()
            }
        };

        let scope = users_under_authority(db.db(), 5).await.unwrap();
        assert_eq!(visible(OwnerFilter::new(scope, Some(5))).await, BTreeSet::from([5, 7, 8, 9]));
        assert!(visible(OwnerFilter::new(BTreeSet::new(), None)).await.is_empty());
    }
}
