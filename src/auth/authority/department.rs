//! Two-tier department resolution
//!
//! `department_id` is authoritative. A department name is consulted only when
//! the actor has no id, which is the case for rows created before departments
//! were normalized.

use crate::core::models::{ActorInfo, DepartmentId};
use crate::storage::Directory;
use crate::utils::error::Result;
use tracing::debug;

/// Key identifying an actor's department
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepartmentKey {
    /// Normalized department ID
    Id(DepartmentId),
    /// Legacy department name, compared exactly
    Name(String),
}

impl DepartmentKey {
    /// Key for `actor`: the id when set, else a non-empty name, else none
    pub fn for_actor(actor: &ActorInfo) -> Option<Self> {
        if let Some(id) = actor.department_id {
            return Some(Self::Id(id));
        }

        actor
            .department_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| Self::Name(name.to_string()))
    }

    /// Whether `target` belongs to this department
    pub fn matches(&self, target: &ActorInfo) -> bool {
        match self {
            Self::Id(id) => target.department_id == Some(*id),
            Self::Name(name) => target.department_name.as_deref() == Some(name.as_str()),
        }
    }

    /// Resolve the key to a department ID, looking names up in the directory
    pub async fn resolve_id(&self, directory: &dyn Directory) -> Result<Option<DepartmentId>> {
        match self {
            Self::Id(id) => Ok(Some(*id)),
            Self::Name(name) => {
                debug!("Resolving department by legacy name: {}", name);
                directory.get_department_id_by_name(name).await
            }
        }
    }
}
