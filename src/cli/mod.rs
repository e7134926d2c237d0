//! Command-line interface
//!
//! Every command prints a single JSON document on stdout.

mod commands;

pub use commands::run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ")"
);

/// Hierarchical authority and scoping engine
#[derive(Parser, Debug)]
#[command(name = "org-authority")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// YAML configuration file (defaults to ORG_AUTHORITY_* variables)
    #[arg(short, long, value_name = "FILE", env = "ORG_AUTHORITY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending database migrations
    Migrate,

    /// Load a directory snapshot (YAML) into the database
    Import {
        /// Snapshot file with `users`, `teams` and `departments`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check whether one user has authority over another
    Check {
        /// Acting user
        #[arg(long)]
        actor: i64,
        /// Target user
        #[arg(long)]
        target: i64,
    },

    /// List every user under an actor's authority
    Scope {
        /// Acting user
        #[arg(long)]
        actor: i64,
        /// Also include the actor's own ID
        #[arg(long)]
        include_self: bool,
    },

    /// List the roles an actor may grant
    AssignableRoles {
        /// Acting user
        #[arg(long)]
        actor: i64,
    },

    /// Check whether an actor may appoint a team's on-site leader
    CanAssignLeader {
        /// Acting user
        #[arg(long)]
        actor: i64,
        /// User to appoint
        #[arg(long)]
        target: i64,
        /// Team
        #[arg(long)]
        team: i64,
    },

    /// List the active teams an actor may administer
    Teams {
        /// Acting user
        #[arg(long)]
        actor: i64,
    },
}
