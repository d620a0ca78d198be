pub mod states;
pub mod params;
pub mod cache;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
pub mod diagnostics;
