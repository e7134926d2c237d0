//! Command execution

use super::Command;
use anyhow::{Context, Result};
use org_authority::{AuthorityEngine, Config, Database, Directory, DirectorySnapshot};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Execute `command` against the configured database
pub async fn run(command: Command, config: &Config) -> Result<()> {
    let database = Database::new(&config.storage().database)
        .await
        .context("connecting to the directory database")?;

    let output = match command {
        Command::Migrate => {
            database.migrate().await?;
            json!({ "migrated": true })
        }
        Command::Import { file } => {
            let snapshot = read_snapshot(&file).await?;
            database.migrate().await?;
            database.import_snapshot(&snapshot).await?;
            info!("Imported snapshot from {}", file.display());
            json!({
                "users": snapshot.users.len(),
                "teams": snapshot.teams.len(),
                "departments": snapshot.departments.len(),
            })
        }
        command => {
            let directory: Arc<dyn Directory> = Arc::new(database);
            let engine = AuthorityEngine::new(directory, config.authority());
            query(&engine, command).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn query(engine: &AuthorityEngine, command: Command) -> Result<Value> {
    let value = match command {
        Command::Check { actor, target } => {
            let granted = match (engine.actor(actor).await?, engine.actor(target).await?) {
                (Some(a), Some(t)) => engine.has_authority_over(&a, &t),
                _ => false,
            };
            json!({ "actor": actor, "target": target, "granted": granted })
        }
        Command::Scope {
            actor,
            include_self,
        } => {
            let filter = engine.owner_filter(actor, include_self).await?;
            json!({ "actor": actor, "users": filter.owners() })
        }
        Command::AssignableRoles { actor } => {
            let roles = match engine.actor(actor).await? {
                Some(a) => engine.assignable_roles(&a),
                None => Default::default(),
            };
            json!({ "actor": actor, "roles": roles })
        }
        Command::CanAssignLeader {
            actor,
            target,
            team,
        } => {
            let granted = match engine.actor(actor).await? {
                Some(a) => engine.can_assign_onsite_leader(&a, target, team).await?,
                None => false,
            };
            json!({ "actor": actor, "target": target, "team": team, "granted": granted })
        }
        Command::Teams { actor } => {
            let teams = engine.manageable_teams(actor).await?;
            json!({ "actor": actor, "teams": teams })
        }
        Command::Migrate | Command::Import { .. } => {
            anyhow::bail!("not a query command")
        }
    };

    Ok(value)
}

async fn read_snapshot(path: &Path) -> Result<DirectorySnapshot> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
