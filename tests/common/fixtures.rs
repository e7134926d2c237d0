//! Directory fixtures
//!
//! Snapshots load equally into [`InMemoryDirectory`] and the SQL directory.
//!
//! [`InMemoryDirectory`]: org_authority::InMemoryDirectory

use org_authority::{ActorInfo, DirectorySnapshot, ROLE_HIERARCHY, Role, TeamInfo, UserId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Legacy department names, including the empty placeholder older rows carry
const DEPARTMENT_NAMES: [Option<&str>; 5] =
    [None, Some(""), Some("Sales"), Some("Ops"), Some("Legal")];

/// Factory for directory snapshots
pub struct DirectoryFactory;

impl DirectoryFactory {
    /// Departments used by every fixture
    pub fn departments() -> BTreeMap<i64, String> {
        BTreeMap::from([
            (1, "Sales".to_string()),
            (2, "Ops".to_string()),
            (3, "Legal".to_string()),
        ])
    }

    /// A small organization.
    ///
    /// - 1 admin, 2 board member
    /// - 3 GM of Sales (by id), 4 GM of Ops (legacy name only)
    /// - 5 and 6 lead teams 10 (Sales) and 11 (Ops)
    /// - 7..=9 staff of team 10, 12..=13 staff of team 11
    /// - 14 a Sales user without a team
    pub fn organization() -> DirectorySnapshot {
        let users = vec![
            ActorInfo::new(1, Role::Admin),
            ActorInfo::new(2, Role::Bod),
            ActorInfo::new(3, Role::Gm).with_department_id(1).with_department_name("Sales"),
            ActorInfo::new(4, Role::Gm).with_department_name("Ops"),
            ActorInfo::new(5, Role::OnsiteLeader).with_department_id(1).with_team(10),
            ActorInfo::new(6, Role::OnsiteLeader).with_department_name("Ops").with_team(11),
            ActorInfo::new(7, Role::User).with_department_id(1).with_team(10),
            ActorInfo::new(8, Role::Approver).with_department_id(1).with_team(10),
            ActorInfo::new(9, Role::User)
                .with_department_id(1)
                .with_department_name("Sales")
                .with_team(10),
            ActorInfo::new(12, Role::User).with_department_name("Ops").with_team(11),
            ActorInfo::new(13, Role::Approver)
                .with_department_id(2)
                .with_department_name("Ops")
                .with_team(11),
            ActorInfo::new(14, Role::User).with_department_id(1),
        ];

        let teams = vec![
            TeamInfo::new(10, "Field Sales", 1).with_leader(5),
            TeamInfo::new(11, "Night Shift", 2).with_leader(6),
            TeamInfo::new(15, "Archive", 1).inactive(),
        ];

        DirectorySnapshot {
            users,
            teams,
            departments: Self::departments(),
        }
    }

    /// A random organization of `size` users, reproducible from `seed`
    pub fn random(seed: u64, size: i64) -> DirectorySnapshot {
        let mut rng = StdRng::seed_from_u64(seed);
        let users = (1..=size).map(|id| random_user(&mut rng, id)).collect();
        let teams = (1..=4)
            .map(|id| TeamInfo::new(id, format!("Team {}", id), rng.gen_range(1..=3)))
            .collect();

        DirectorySnapshot {
            users,
            teams,
            departments: Self::departments(),
        }
    }
}

fn random_user(rng: &mut StdRng, id: UserId) -> ActorInfo {
    let role = ROLE_HIERARCHY[rng.gen_range(0..ROLE_HIERARCHY.len())];
    let mut user = ActorInfo::new(id, role);

    if rng.gen_bool(0.6) {
        user.department_id = Some(rng.gen_range(1..=3));
    }
    user.department_name =
        DEPARTMENT_NAMES[rng.gen_range(0..DEPARTMENT_NAMES.len())].map(str::to_string);
    if rng.gen_bool(0.7) {
        user.team_id = Some(rng.gen_range(1..=4));
    }

    user
}
