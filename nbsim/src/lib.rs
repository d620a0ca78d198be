pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{SimulationRun, MAX_BODIES};
pub use simulation::forces::{ForceKernel, DirectGravity, SymmetricGravity};
pub use simulation::cache::PairwiseForceCache;
pub use simulation::engine::{Kernel, KernelStats, StepObserver, NoopObserver};
pub use simulation::scenario::{Scenario, run_kernel, run_kernel_with};
pub use simulation::diagnostics::first_non_finite;

pub use configuration::config::{SweepConfig, ProgressConfig};

pub use reporting::console::ConsolePrinter;

pub use benchmark::benchmark::{run_sweep, summarize, SweepRecord, SweepSummary};

pub use error::ConfigurationError;
