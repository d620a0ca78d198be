//! Build fully-initialized kernel runs from a [`SimulationRun`]
//!
//! A [`Scenario`] is the runtime bundle for one invocation:
//! - the immutable run configuration,
//! - the body store laid out deterministically,
//! - the kernel with its selected force variant.
//!
//! [`run_kernel`] and [`run_kernel_with`] are the entry points a driver
//! wraps with its own clock.

use crate::error::Result;
use crate::simulation::engine::{Kernel, KernelStats, NoopObserver, StepObserver};
use crate::simulation::params::SimulationRun;
use crate::simulation::states::System;

pub struct Scenario {
    pub system: System,
    pub kernel: Kernel,
}

impl Scenario {
    /// Validate `run` and lay out its bodies; no simulation work happens here
    pub fn build_scenario(run: SimulationRun) -> Result<Self> {
        let kernel = Kernel::new(run)?;

        // Initial layout: bodies along the x axis, unit spacing over the extent
        let system = System::initialize(kernel.run().body_count, kernel.run().spacing_extent);

        Ok(Self { system, kernel })
    }

    /// Run every configured step against the owned store
    pub fn run(&mut self, observer: &mut dyn StepObserver) -> Result<KernelStats> {
        self.kernel.advance(&mut self.system, observer)
    }
}

/// Lay out `run.body_count` bodies, advance them and return the final states
pub fn run_kernel(run: &SimulationRun) -> Result<System> {
    run_kernel_with(run, &mut NoopObserver)
}

/// As [`run_kernel`], reporting progress to `observer`
pub fn run_kernel_with(run: &SimulationRun, observer: &mut dyn StepObserver) -> Result<System> {
    let mut scenario = Scenario::build_scenario(run.clone())?;
    scenario.run(observer)?;
    Ok(scenario.system)
}
