//! Organization scenario tests
//!
//! Drives the engine facade over the fixed organization fixture, once per
//! directory implementation.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{DirectoryFactory, TestDatabase};
    use org_authority::{
        ActorInfo, AuthorityConfig, AuthorityEngine, Directory, InMemoryDirectory, Role, UserId,
    };
    use std::collections::BTreeSet;
    use std::sync::Arc;

    async fn engines(config: &AuthorityConfig) -> Vec<AuthorityEngine> {
        let snapshot = DirectoryFactory::organization();
        let memory: Arc<dyn Directory> =
            Arc::new(InMemoryDirectory::from_snapshot(snapshot.clone()));
        let sql: Arc<dyn Directory> = TestDatabase::with_snapshot(&snapshot).await.db_arc();

        vec![
            AuthorityEngine::new(memory, config),
            AuthorityEngine::new(sql, config),
        ]
    }

    async fn actor(engine: &AuthorityEngine, id: UserId) -> ActorInfo {
        assert_ok!(engine.actor(id).await).expect("fixture user")
    }

    #[tokio::test]
    async fn test_scopes() {
        let expected: [(UserId, &[UserId]); 8] = [
            (1, &[2, 3, 4, 5, 6, 7, 8, 9, 12, 13, 14]),
            (2, &[3, 4, 5, 6, 7, 8, 9, 12, 13, 14]),
            (3, &[5, 7, 8, 9, 14]),
            (4, &[6, 12, 13]),
            (5, &[7, 8, 9]),
            (6, &[12, 13]),
            (7, &[]),
            (404, &[]),
        ];

        for engine in engines(&AuthorityConfig::default()).await {
            for (actor_id, users) in expected {
                let scope = assert_ok!(engine.users_under_authority(actor_id).await);
                let expected_scope = users.iter().copied().collect::<BTreeSet<_>>();
                assert_eq!(scope, expected_scope, "actor {}", actor_id);
            }
        }
    }

    #[tokio::test]
    async fn test_gm_never_reaches_peers() {
        for engine in engines(&AuthorityConfig::default()).await {
            let sales_gm = actor(&engine, 3).await;
            let ops_gm = actor(&engine, 4).await;
            let board = actor(&engine, 2).await;

            assert!(!engine.has_authority_over(&sales_gm, &ops_gm));
            assert!(!engine.has_authority_over(&sales_gm, &board));
            assert!(engine.ensure_authority_over(&board, &sales_gm).is_ok());
            assert!(engine.ensure_authority_over(&sales_gm, &board).is_err());
        }
    }

    #[tokio::test]
    async fn test_manageable_teams() {
        for engine in engines(&AuthorityConfig::default()).await {
            let names = |teams: Vec<org_authority::TeamInfo>| {
                teams.into_iter().map(|t| t.name).collect::<Vec<_>>()
            };

            assert_eq!(
                names(assert_ok!(engine.manageable_teams(1).await)),
                vec!["Field Sales", "Night Shift"]
            );
            assert_eq!(names(assert_ok!(engine.manageable_teams(3).await)), vec!["Field Sales"]);
            assert_eq!(names(assert_ok!(engine.manageable_teams(4).await)), vec!["Night Shift"]);
            assert!(assert_ok!(engine.manageable_teams(5).await).is_empty());
        }
    }

    #[tokio::test]
    async fn test_leader_assignment() {
        for engine in engines(&AuthorityConfig::default()).await {
            let admin = actor(&engine, 1).await;
            let sales_gm = actor(&engine, 3).await;
            let ops_gm = actor(&engine, 4).await;
            let leader = actor(&engine, 5).await;

            assert!(assert_ok!(engine.can_assign_onsite_leader(&admin, 12, 10).await));
            assert!(assert_ok!(engine.can_assign_onsite_leader(&sales_gm, 12, 10).await));
            assert!(!assert_ok!(engine.can_assign_onsite_leader(&sales_gm, 12, 11).await));
            assert!(assert_ok!(engine.can_assign_onsite_leader(&ops_gm, 13, 11).await));
            assert!(!assert_ok!(engine.can_assign_onsite_leader(&leader, 7, 10).await));
            assert!(!assert_ok!(engine.can_assign_onsite_leader(&admin, 7, 99).await));
        }
    }

    #[tokio::test]
    async fn test_leader_assignment_requires_target_department() {
        let config = AuthorityConfig {
            require_target_in_team_department: true,
            ..AuthorityConfig::default()
        };

        for engine in engines(&config).await {
            let admin = actor(&engine, 1).await;
            let ops_gm = actor(&engine, 4).await;

            assert!(assert_ok!(engine.can_assign_onsite_leader(&admin, 14, 10).await));
            assert!(!assert_ok!(engine.can_assign_onsite_leader(&admin, 12, 10).await));
            // 12 has only the legacy department name
            assert!(assert_ok!(engine.can_assign_onsite_leader(&ops_gm, 12, 11).await));
            assert!(!assert_ok!(engine.can_assign_onsite_leader(&ops_gm, 404, 11).await));
        }
    }

    #[tokio::test]
    async fn test_membership_and_roles() {
        for engine in engines(&AuthorityConfig::default()).await {
            let leader = actor(&engine, 5).await;
            let team = assert_ok!(engine.directory().get_team_info(10).await).expect("team 10");

            assert!(engine.can_modify_team_membership(&leader, 10));
            assert!(!engine.can_modify_team_membership(&leader, 11));
            assert!(engine.can_remove_team_member(&leader, &team, 7));
            assert!(!engine.can_remove_team_member(&leader, &team, 5));

            let board = actor(&engine, 2).await;
            assert_eq!(
                engine.assignable_roles(&board),
                BTreeSet::from([Role::User, Role::Approver, Role::OnsiteLeader, Role::Gm])
            );
        }
    }
}
