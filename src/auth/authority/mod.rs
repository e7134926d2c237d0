//! Hierarchical authority and resource scoping
//!
//! Both the pointwise check ([`has_authority_over`]) and the bulk scope
//! ([`users_under_authority`]) are derived from the single rule table in
//! [`rules`], compiled per actor into a [`ScopeFilter`].

mod department;
mod filter;
mod resolver;
pub mod rules;
mod scope;

pub use department::DepartmentKey;
pub use filter::{Placement, ScopeFilter};
pub use resolver::has_authority_over;
pub use rules::{AuthorityRule, Ceiling, Reach};
pub use scope::{OwnerFilter, scope_of, users_under_authority};
