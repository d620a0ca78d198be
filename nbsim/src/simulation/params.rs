//! Numerical and physical parameters for one kernel invocation
//!
//! `SimulationRun` holds the immutable runtime settings:
//! - population size and layout extent,
//! - force variant (`use_third_law`),
//! - step count and step size,
//! - gravitational constant,
//! - progress interval and whether pairwise forces are recorded

use crate::error::{ConfigurationError, Result};

/// Upper bound on the population a single run accepts
pub const MAX_BODIES: usize = 5000;
pub const DEFAULT_TIME_STEPS: u64 = 4;
pub const DEFAULT_STEP_SIZE: f64 = 0.001;
pub const GRAV_CONST: f64 = 6.673E-11;
pub const DEFAULT_REPORT_EVERY: u64 = 10;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub body_count: usize, // population size
    pub use_third_law: bool, // false = full double loop, true = symmetric loop
    pub step_count: u64, // number of steps
    pub step_size: f64, // step size dt
    pub G: f64, // gravitational constant
    pub spacing_extent: f64, // initial layout spans [0, spacing_extent)
    pub report_every: u64, // observer interval in steps
    pub record_pairs: bool, // keep the pairwise force cache (symmetric loop only)
}

impl Default for SimulationRun {
    fn default() -> Self {
        Self {
            body_count: 0,
            use_third_law: false,
            step_count: DEFAULT_TIME_STEPS,
            step_size: DEFAULT_STEP_SIZE,
            G: GRAV_CONST,
            spacing_extent: 1.0,
            report_every: DEFAULT_REPORT_EVERY,
            record_pairs: false,
        }
    }
}

impl SimulationRun {
    pub fn new(body_count: usize, use_third_law: bool) -> Self {
        Self {
            body_count,
            use_third_law,
            ..Self::default()
        }
    }

    /// Reject configurations the kernel is not designed for
    pub fn validate(&self) -> Result<()> {
        self.check_population(self.body_count)?;

        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigurationError::InvalidParameter(format!(
                "step size must be positive and finite, got {}",
                self.step_size
            )));
        }
        if !self.G.is_finite() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "gravitational constant must be finite, got {}",
                self.G
            )));
        }
        if !self.spacing_extent.is_finite() || self.spacing_extent <= 0.0 {
            return Err(ConfigurationError::InvalidParameter(format!(
                "spacing extent must be positive and finite, got {}",
                self.spacing_extent
            )));
        }
        if self.report_every == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "report interval must be at least one step".to_string(),
            ));
        }

        Ok(())
    }

    pub fn check_population(&self, n: usize) -> Result<()> {
        if n > MAX_BODIES {
            return Err(ConfigurationError::CapacityExceeded {
                requested: n,
                capacity: MAX_BODIES,
            });
        }
        Ok(())
    }
}
