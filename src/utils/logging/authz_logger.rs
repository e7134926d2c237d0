//! Authorization decision events
//!
//! Events carry the actor, the action and the outcome. They never carry the
//! reason for a denial, which stays out of responses and logs alike.

use crate::core::models::UserId;
use tracing::{debug, warn};

/// Structured logger for authorization decisions
pub struct AuthzLogger;

impl AuthzLogger {
    /// Log a gated decision
    pub fn log_decision(actor_id: UserId, action: &str, subject: Option<i64>, granted: bool) {
        if granted {
            debug!(
                target: "authz",
                actor_id,
                action,
                subject,
                granted,
                "Authorization granted: {}",
                action
            );
        } else {
            warn!(
                target: "authz",
                actor_id,
                action,
                subject,
                granted,
                "Authorization denied: {}",
                action
            );
        }
    }

    /// Log a directory failure that was collapsed into a denial
    pub fn log_fail_closed(actor_id: UserId, action: &str, error: &dyn std::fmt::Display) {
        warn!(
            target: "authz",
            actor_id,
            action,
            error = %error,
            "Directory lookup failed, denying"
        );
    }
}
