//! Pointwise authority check

use super::filter::ScopeFilter;
use crate::core::models::ActorInfo;

/// Whether `actor` has authority over `target`.
///
/// Total over all inputs: nobody has authority over themself, and missing
/// placement or a role without a rule yields `false`.
pub fn has_authority_over(actor: &ActorInfo, target: &ActorInfo) -> bool {
    if actor.id == target.id {
        return false;
    }

    ScopeFilter::for_actor(actor).is_some_and(|filter| filter.matches(target))
}
