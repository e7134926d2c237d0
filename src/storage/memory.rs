//! In-memory directory
//!
//! Backs embedded deployments and tests. Scope queries run
//! [`ScopeFilter::matches`] over every stored user.

use super::directory::{Directory, TeamFilter};
use crate::auth::authority::ScopeFilter;
use crate::core::models::{ActorInfo, DepartmentId, TeamId, TeamInfo, UserId};
use crate::utils::error::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Serializable directory snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    /// Users
    #[serde(default)]
    pub users: Vec<ActorInfo>,
    /// Teams
    #[serde(default)]
    pub teams: Vec<TeamInfo>,
    /// Department names by ID
    #[serde(default)]
    pub departments: BTreeMap<DepartmentId, String>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<UserId, ActorInfo>,
    teams: BTreeMap<TeamId, TeamInfo>,
    departments: BTreeMap<DepartmentId, String>,
}

/// Directory held in process memory
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    inner: RwLock<Inner>,
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory from a snapshot
    pub fn from_snapshot(snapshot: DirectorySnapshot) -> Self {
        let directory = Self::new();
        {
            let mut inner = directory.inner.write();
            inner.users = snapshot.users.into_iter().map(|u| (u.id, u)).collect();
            inner.teams = snapshot.teams.into_iter().map(|t| (t.id, t)).collect();
            inner.departments = snapshot.departments;
        }
        directory
    }

    /// Insert or replace a user
    pub fn upsert_user(&self, user: ActorInfo) {
        self.inner.write().users.insert(user.id, user);
    }

    /// Insert or replace a team
    pub fn upsert_team(&self, team: TeamInfo) {
        self.inner.write().teams.insert(team.id, team);
    }

    /// Insert or replace a department
    pub fn upsert_department(&self, id: DepartmentId, name: impl Into<String>) {
        self.inner.write().departments.insert(id, name.into());
    }

    /// Remove a user
    pub fn remove_user(&self, user_id: UserId) -> Option<ActorInfo> {
        self.inner.write().users.remove(&user_id)
    }

    /// Every stored user, ordered by ID
    pub fn users(&self) -> Vec<ActorInfo> {
        self.inner.read().users.values().cloned().collect()
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> DirectorySnapshot {
        let inner = self.inner.read();
        DirectorySnapshot {
            users: inner.users.values().cloned().collect(),
            teams: inner.teams.values().cloned().collect(),
            departments: inner.departments.clone(),
        }
    }
}

#[async_trait::async_trait]
impl Directory for InMemoryDirectory {
    async fn get_actor_info(&self, user_id: UserId) -> Result<Option<ActorInfo>> {
        Ok(self.inner.read().users.get(&user_id).cloned())
    }

    async fn get_team_info(&self, team_id: TeamId) -> Result<Option<TeamInfo>> {
        Ok(self.inner.read().teams.get(&team_id).cloned())
    }

    async fn get_department_id_by_name(&self, name: &str) -> Result<Option<DepartmentId>> {
        Ok(self
            .inner
            .read()
            .departments
            .iter()
            .find(|(_, department)| department.as_str() == name)
            .map(|(id, _)| *id))
    }

    async fn find_user_ids(&self, filter: &ScopeFilter) -> Result<BTreeSet<UserId>> {
        Ok(self
            .inner
            .read()
            .users
            .values()
            .filter(|user| filter.matches(user))
            .map(|user| user.id)
            .collect())
    }

    async fn find_teams(&self, filter: &TeamFilter) -> Result<Vec<TeamInfo>> {
        let mut teams: Vec<TeamInfo> = self
            .inner
            .read()
            .teams
            .values()
            .filter(|team| filter.matches(team))
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(teams)
    }
}
