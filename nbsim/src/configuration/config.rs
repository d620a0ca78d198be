//! Configuration types for loading benchmark sweeps from YAML.
//!
//! A sweep lists the population sizes to time and the shared physical and
//! numerical parameters. Each (size, variant, repetition) becomes one
//! [`SimulationRun`].
//!
//! # YAML format
//!
//! ```yaml
//! population_sizes: [10, 100, 1000]   # bodies per run
//! repetitions: 4                      # runs per (size, variant)
//! steps: 4                            # kernel steps per run
//! step_size: 0.001                    # dt
//! grav_const: 6.673e-11               # G
//! spacing_extent: 1.0                 # initial layout spans [0, extent)
//! progress:                           # optional console dump of body states
//!   every: 10
//! ```

use serde::Deserialize;

use crate::simulation::params::{
    SimulationRun, DEFAULT_REPORT_EVERY, DEFAULT_STEP_SIZE, DEFAULT_TIME_STEPS, GRAV_CONST,
};

/// Console progress settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    #[serde(default = "default_every")]
    pub every: u64, // print every `every` steps
}

/// Top-level sweep configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    #[serde(default = "default_sizes")]
    pub population_sizes: Vec<usize>, // populations to time, in order
    #[serde(default = "default_repetitions")]
    pub repetitions: usize, // runs per (size, variant)
    #[serde(default = "default_steps")]
    pub steps: u64, // kernel steps per run
    #[serde(default = "default_step_size")]
    pub step_size: f64, // dt
    #[serde(default = "default_grav_const")]
    pub grav_const: f64, // gravitational constant
    #[serde(default = "default_extent")]
    pub spacing_extent: f64, // width of the initial line of bodies
    #[serde(default)]
    pub progress: Option<ProgressConfig>, // None = silent runs
}

fn default_sizes() -> Vec<usize> {
    vec![10, 100, 1000, 2000, 3000, 4000, 5000]
}

fn default_repetitions() -> usize {
    4
}

fn default_steps() -> u64 {
    DEFAULT_TIME_STEPS
}

fn default_step_size() -> f64 {
    DEFAULT_STEP_SIZE
}

fn default_grav_const() -> f64 {
    GRAV_CONST
}

fn default_extent() -> f64 {
    1.0
}

fn default_every() -> u64 {
    DEFAULT_REPORT_EVERY
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            population_sizes: default_sizes(),
            repetitions: default_repetitions(),
            steps: default_steps(),
            step_size: default_step_size(),
            grav_const: default_grav_const(),
            spacing_extent: default_extent(),
            progress: None,
        }
    }
}

impl SweepConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Runtime configuration for one run of `n` bodies
    pub fn run_for(&self, n: usize, use_third_law: bool) -> SimulationRun {
        SimulationRun {
            body_count: n,
            use_third_law,
            step_count: self.steps,
            step_size: self.step_size,
            G: self.grav_const,
            spacing_extent: self.spacing_extent,
            report_every: self
                .progress
                .as_ref()
                .map_or(DEFAULT_REPORT_EVERY, |p| p.every),
            record_pairs: false,
        }
    }
}
