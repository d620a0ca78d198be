//! Step loop of the force/integration kernel
//!
//! A [`Kernel`] owns the force variant selected by a [`SimulationRun`] and the
//! per-body force accumulator. Each step zeroes the accumulator, fills it
//! with pairwise gravity and integrates with [`euler_step`].

use log::debug;

use crate::error::Result;
use crate::simulation::cache::PairwiseForceCache;
use crate::simulation::forces::{accumulate_forces, gravity_kernel, ForceKernel};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::SimulationRun;
use crate::simulation::states::{NVec2, System};

/// Read-only progress hook, called with the step index and current state
pub trait StepObserver {
    fn on_step(&mut self, step: u64, sys: &System);
}

impl<F> StepObserver for F
where
    F: FnMut(u64, &System),
{
    fn on_step(&mut self, step: u64, sys: &System) {
        (self)(step, sys)
    }
}

/// Observer that ignores every call
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _step: u64, _sys: &System) {}
}

/// Work performed by one call to [`Kernel::advance`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KernelStats {
    pub steps: u64,
    pub pair_evaluations: u64,
}

pub struct Kernel {
    run: SimulationRun,
    forces: Box<dyn ForceKernel>,
    accumulator: Vec<NVec2>,
}

impl Kernel {
    /// Validate `run` and build the force variant it selects
    pub fn new(run: SimulationRun) -> Result<Self> {
        run.validate()?;
        let forces = gravity_kernel(&run);
        Ok(Self {
            accumulator: vec![NVec2::zeros(); run.body_count],
            run,
            forces,
        })
    }

    pub fn run(&self) -> &SimulationRun {
        &self.run
    }

    /// Force accumulator of the last computed step
    pub fn forces(&self) -> &[NVec2] {
        &self.accumulator
    }

    /// Pairwise forces of the last step, when the run records them
    pub fn pair_cache(&self) -> Option<&PairwiseForceCache> {
        self.forces.pair_cache()
    }

    /// Fill the accumulator for the current state of `sys` without integrating
    pub fn compute_forces(&mut self, sys: &System) -> Result<&[NVec2]> {
        self.run.check_population(sys.len())?;
        self.accumulator.resize(sys.len(), NVec2::zeros());
        accumulate_forces(self.forces.as_mut(), sys, &mut self.accumulator);
        Ok(&self.accumulator)
    }

    /// Advance `sys` in place by the configured number of steps
    ///
    /// The observer sees the state before step `s` whenever
    /// `s % report_every == 0`, and the final state if the step count is
    /// itself a multiple of the interval
    pub fn advance(&mut self, sys: &mut System, observer: &mut dyn StepObserver) -> Result<KernelStats> {
        let n = sys.len();
        self.run.check_population(n)?;
        self.accumulator.resize(n, NVec2::zeros());

        let dt = self.run.step_size;
        let every = self.run.report_every;
        let per_step = self.forces.pair_evaluations(n);
        let mut stats = KernelStats::default();

        debug!(
            "kernel: {} bodies, third_law = {}, {} steps of {}",
            n, self.run.use_third_law, self.run.step_count, dt
        );

        for step in 0..self.run.step_count {
            if step % every == 0 {
                observer.on_step(step, sys);
            }

            accumulate_forces(self.forces.as_mut(), sys, &mut self.accumulator);
            euler_step(sys, &self.accumulator, dt);

            stats.steps += 1;
            stats.pair_evaluations += per_step;
        }

        if self.run.step_count > 0 && self.run.step_count % every == 0 {
            observer.on_step(self.run.step_count, sys);
        }

        debug!("kernel: done, {} pair evaluations", stats.pair_evaluations);

        Ok(stats)
    }
}
