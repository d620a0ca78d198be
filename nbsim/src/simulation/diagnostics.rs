//! Detection hook for numeric degeneracy
//!
//! The kernel never guards against coincident bodies; non-finite values
//! simply propagate. Callers that want to know can scan the state here.

use crate::simulation::states::System;

/// Index of the first body whose position or velocity is not finite
pub fn first_non_finite(sys: &System) -> Option<usize> {
    sys.bodies.iter().position(|b| {
        !(b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite()))
    })
}
