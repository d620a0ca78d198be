//! Force contributors for the n-body kernel
//!
//! Defines the [`ForceKernel`] trait and its two gravity variants:
//! - [`DirectGravity`]: every ordered pair, N(N-1) evaluations
//! - [`SymmetricGravity`]: every unordered pair once, mirrored onto the
//!   second body with Newton's third law, N(N-1)/2 evaluations
//!
//! Neither variant applies softening. Coincident bodies give non-finite forces.

use crate::simulation::cache::{pair_count, PairwiseForceCache};
use crate::simulation::params::SimulationRun;
use crate::simulation::states::{NVec2, System};

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body;
/// zeroing `out` is the caller's job (see [`accumulate_forces`])
pub trait ForceKernel {
    fn accumulate(&mut self, sys: &System, out: &mut [NVec2]);

    /// Pairwise evaluations performed by one call to `accumulate` for `n` bodies
    fn pair_evaluations(&self, n: usize) -> u64;

    /// Pairwise cache, if this kernel keeps one
    fn pair_cache(&self) -> Option<&PairwiseForceCache> {
        None
    }
}

/// Zero the accumulator then let `kernel` fill it
pub fn accumulate_forces(kernel: &mut dyn ForceKernel, sys: &System, out: &mut [NVec2]) {
    // Zero buffer
    for f in out.iter_mut() {
        *f = NVec2::zeros();
    }
    kernel.accumulate(sys, out);
}

/// Force exerted on a body at `xi` by a body of mass `mj` at `xj`
///
/// The receiving body's mass is not a factor: `G * m_j * r / |r|^3`
#[allow(non_snake_case)]
#[inline]
pub fn pair_force(G: f64, xi: NVec2, xj: NVec2, mj: f64) -> NVec2 {
    // r is the displacement vector from i to j
    let r = xj - xi;

    // |r|, no softening
    let r_len = r.dot(&r).sqrt();

    // G * m_j / |r|^3
    let coef = G * mj / (r_len * r_len * r_len);

    coef * r
}

/// Brute-force gravity over every ordered pair
#[allow(non_snake_case)]
pub struct DirectGravity {
    pub G: f64, // gravitational constant
}

impl ForceKernel for DirectGravity {
    fn accumulate(&mut self, sys: &System, out: &mut [NVec2]) {
        let bodies = &sys.bodies;

        for (i, bi) in bodies.iter().enumerate() {
            let mut acc = out[i];
            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                // force of j on i, computed afresh for every ordered pair
                acc += pair_force(self.G, bi.x, bj.x, bj.m);
            }
            out[i] = acc;
        }
    }

    fn pair_evaluations(&self, n: usize) -> u64 {
        (n as u64) * (n as u64).saturating_sub(1)
    }
}

/// Gravity over every unordered pair, mirrored with Newton's third law
///
/// When built with [`SymmetricGravity::recording`] every pair's force is kept
/// in a [`PairwiseForceCache`] for inspection after the step; otherwise the
/// pair value only lives for the duration of the inner loop body
#[allow(non_snake_case)]
pub struct SymmetricGravity {
    pub G: f64, // gravitational constant
    cache: Option<PairwiseForceCache>,
}

impl SymmetricGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G, cache: None }
    }

    /// Keep every pair's force, sized for `n` bodies
    #[allow(non_snake_case)]
    pub fn recording(G: f64, n: usize) -> Self {
        Self {
            G,
            cache: Some(PairwiseForceCache::new(n)),
        }
    }
}

impl ForceKernel for SymmetricGravity {
    fn accumulate(&mut self, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Resize if the population differs from the one we were built for
        if let Some(cache) = self.cache.as_mut() {
            if cache.population() != n {
                *cache = PairwiseForceCache::new(n);
            }
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = sys.bodies[i].x;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Force of j on i, computed once for the pair
                let f = pair_force(self.G, xi, bj.x, bj.m);

                if let Some(cache) = self.cache.as_mut() {
                    cache.store(i, j, f);
                }

                // i feels the pull along +r
                out[i] += f;

                // j gets the same vector negated (equal and opposite)
                out[j] -= f;
            }
        }
    }

    fn pair_evaluations(&self, n: usize) -> u64 {
        pair_count(n) as u64
    }

    fn pair_cache(&self) -> Option<&PairwiseForceCache> {
        self.cache.as_ref()
    }
}

/// Pick the variant selected by `run.use_third_law`
pub fn gravity_kernel(run: &SimulationRun) -> Box<dyn ForceKernel> {
    if run.use_third_law {
        if run.record_pairs {
            Box::new(SymmetricGravity::recording(run.G, run.body_count))
        } else {
            Box::new(SymmetricGravity::new(run.G))
        }
    } else {
        Box::new(DirectGravity { G: run.G })
    }
}
