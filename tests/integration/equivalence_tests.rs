//! Scope equivalence tests
//!
//! For every actor, the materialized scope must equal the set of users the
//! pointwise check admits, on every directory implementation.

#[cfg(test)]
mod tests {
    use crate::common::{DirectoryFactory, TestDatabase};
    use org_authority::{
        ActorInfo, Directory, InMemoryDirectory, UserId, has_authority_over, users_under_authority,
    };
    use std::collections::BTreeSet;

    /// Every user as the directory reports it
    async fn load_users(
        directory: &dyn Directory,
        ids: impl Iterator<Item = UserId>,
    ) -> Vec<ActorInfo> {
        let mut users = Vec::new();
        for id in ids {
            if let Some(user) = directory.get_actor_info(id).await.unwrap() {
                users.push(user);
            }
        }
        users
    }

    async fn assert_equivalent(directory: &dyn Directory, users: &[ActorInfo]) {
        for actor in users {
            let expected: BTreeSet<UserId> = users
                .iter()
                .filter(|target| has_authority_over(actor, target))
                .map(|target| target.id)
                .collect();

            let scope = users_under_authority(directory, actor.id).await.unwrap();
            assert_eq!(scope, expected, "actor {:?}", actor);
        }
    }

    #[tokio::test]
    async fn test_in_memory_scope_matches_pointwise() {
        for seed in 0..20 {
            let snapshot = DirectoryFactory::random(seed, 60);
            let directory = InMemoryDirectory::from_snapshot(snapshot.clone());
            assert_equivalent(&directory, &snapshot.users).await;
        }
    }

    #[tokio::test]
    async fn test_sql_scope_matches_pointwise() {
        for seed in 100..108 {
            let snapshot = DirectoryFactory::random(seed, 50);
            let db = TestDatabase::with_snapshot(&snapshot).await;

            let users = load_users(db.db(), snapshot.users.iter().map(|u| u.id)).await;
            assert_eq!(users.len(), snapshot.users.len());
            assert_equivalent(db.db(), &users).await;
        }
    }

    #[tokio::test]
    async fn test_sql_and_memory_scopes_agree() {
        let snapshot = DirectoryFactory::random(7, 80);
        let memory = InMemoryDirectory::from_snapshot(snapshot.clone());
        let db = TestDatabase::with_snapshot(&snapshot).await;

        for user in &snapshot.users {
            let from_memory = users_under_authority(&memory, user.id).await.unwrap();
            let from_sql = users_under_authority(db.db(), user.id).await.unwrap();
            assert_eq!(from_memory, from_sql, "actor {}", user.id);
        }
    }

    #[tokio::test]
    async fn test_sql_scope_with_legacy_role_strings() {
        let snapshot = DirectoryFactory::random(3, 40);
        let db = TestDatabase::with_snapshot(&snapshot).await;

        for (id, raw) in [(1, "manager"), (2, "ADMIN"), (3, ""), (4, "super_admin")] {
            db.db().set_raw_role(id, raw).await.unwrap();
        }

        let users = load_users(db.db(), snapshot.users.iter().map(|u| u.id)).await;
        assert_equivalent(db.db(), &users).await;
    }
}
