//! Role definitions and levels

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Every role, lowest level first
pub const ROLE_HIERARCHY: [Role; 6] = [
    Role::User,
    Role::Approver,
    Role::OnsiteLeader,
    Role::Gm,
    Role::Bod,
    Role::Admin,
];

/// Organizational role
///
/// Variants are declared in level order, so the derived `Ord` agrees with
/// [`Role::level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Regular user
    User,
    /// Application approver
    Approver,
    /// On-site team leader
    OnsiteLeader,
    /// General manager of a department
    Gm,
    /// Board of directors
    Bod,
    /// System administrator
    Admin,
}

impl Role {
    /// Integer level of the role, higher meaning more authority
    pub const fn level(self) -> u8 {
        match self {
            Role::User => 0,
            Role::Approver => 1,
            Role::OnsiteLeader => 2,
            Role::Gm => 3,
            Role::Bod => 4,
            Role::Admin => 5,
        }
    }

    /// Stored representation of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Approver => "approver",
            Role::OnsiteLeader => "onsite_leader",
            Role::Gm => "gm",
            Role::Bod => "bod",
            Role::Admin => "admin",
        }
    }

    /// Label shown to end users
    pub const fn display_name(self) -> &'static str {
        match self {
            Role::User => "一般ユーザー",
            Role::Approver => "承認者",
            Role::OnsiteLeader => "オンサイトリーダー",
            Role::Gm => "GM（部門長）",
            Role::Bod => "BOD（取締役）",
            Role::Admin => "システム管理者",
        }
    }

    /// Parse a role read from storage.
    ///
    /// Unknown values degrade to [`Role::User`], the least privileged role,
    /// instead of failing.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!(role = value, "Unrecognized role in directory data, treating as user");
            Role::User
        })
    }

    /// Roles whose level is at least `self`'s
    pub fn and_above(self) -> impl Iterator<Item = Role> {
        ROLE_HIERARCHY
            .into_iter()
            .filter(move |role| role.level() >= self.level())
    }

    /// Roles whose level is strictly below `self`'s
    pub fn below(self) -> impl Iterator<Item = Role> {
        ROLE_HIERARCHY
            .into_iter()
            .filter(move |role| role.level() < self.level())
    }
}

/// Level of a raw role string. Unknown roles are level 0.
pub fn level_of(value: &str) -> u8 {
    value.parse::<Role>().map(Role::level).unwrap_or(0)
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "approver" => Ok(Role::Approver),
            "onsite_leader" => Ok(Role::OnsiteLeader),
            "gm" => Ok(Role::Gm),
            "bod" => Ok(Role::Bod),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Role::from_stored(&value))
    }
}
