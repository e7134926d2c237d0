//! Configuration integration tests
//!
//! Loads a YAML file and wires the resulting configuration into a working
//! engine.

#[cfg(test)]
mod tests {
    use crate::common::DirectoryFactory;
    use org_authority::storage::database::Database;
    use org_authority::{AuthorityEngine, AuthzError, Config, Directory};
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_engine_from_config_file() {
        let file = write_config(
            r#"
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
authority:
  require_target_in_team_department: true
  log_decisions: false
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let db = Database::new(&config.storage().database).await.unwrap();
        db.migrate().await.unwrap();
        db.import_snapshot(&DirectoryFactory::organization()).await.unwrap();

        let directory: Arc<dyn Directory> = Arc::new(db);
        let engine = AuthorityEngine::new(directory, config.authority());
        let admin = engine.actor(1).await.unwrap().unwrap();

        assert!(engine.config().require_target_in_team_department);
        assert!(!engine.can_assign_onsite_leader(&admin, 12, 10).await.unwrap());
        assert!(engine.can_assign_onsite_leader(&admin, 14, 10).await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_log_level_is_rejected() {
        let file = write_config("logging:\n  level: \"  \"\n");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[tokio::test]
    async fn test_zero_connections_is_rejected() {
        let file = write_config("storage:\n  database:\n    max_connections: 0\n");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_rejected() {
        let file = write_config("storage: [unclosed");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }
}
