//! Fixed-step explicit Euler integrator
//!
//! The accumulated force is used directly as the acceleration (no division
//! by the receiving body's mass). The position update uses the velocity from
//! before this step's kick, so positions trail velocities by one step.

use super::states::{System, NVec2};

/// Advance every body of `sys` by one step of size `dt` using `forces`
///
/// v_n+1 = v_n + dt * f_n
/// x_n+1 = x_n + dt * v_n
pub fn euler_step(sys: &mut System, forces: &[NVec2], dt: f64) {
    debug_assert_eq!(sys.bodies.len(), forces.len());

    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        // velocity before the kick
        let v_prev = b.v;

        b.v += dt * *f;
        b.x += dt * v_prev;
    }
}
