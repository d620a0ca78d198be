//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` using `NVec2`
//! - `System` holding a fixed population of bodies (the body store)
//!
//! Bodies are addressed by index only. An index never changes slot during a run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Mass given to every body of the default layout
pub const DEFAULT_MASS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn at_rest(x: NVec2, m: f64) -> Self {
        Self { x, v: NVec2::zeros(), m }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct System {
    pub bodies: Vec<Body>, // 2d collection of bodies
}

impl System {
    /// Deterministic layout: `n` bodies of mass 2.0, at rest, spread along
    /// the x axis at `(i * spacing_extent / n, 0)`
    ///
    /// `n = 0` yields an empty store
    pub fn initialize(n: usize, spacing_extent: f64) -> Self {
        let mut bodies = Vec::with_capacity(n);

        for i in 0..n {
            // deterministic positions, no rand needed
            let x = NVec2::new(i as f64 * spacing_extent / n as f64, 0.0);
            bodies.push(Body::at_rest(x, DEFAULT_MASS));
        }

        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl From<Vec<Body>> for System {
    fn from(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }
}
