//! Decision policy: lowest-id unassigned variable, assigned true.
//!
//! Deterministic and complete; any complete policy could be substituted
//! without changing observable correctness.

use kestrel_base::Lit;

use crate::trail::Trail;

/// Picks the next branch literal, or `None` when every variable is assigned.
#[must_use]
pub fn pick_branch_lit(trail: &Trail) -> Option<Lit> {
    (1..=trail.num_vars())
        .find(|&var| trail.value(var).is_unassigned())
        .map(Lit::positive)
}
