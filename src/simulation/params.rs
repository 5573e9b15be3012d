//! Numerical parameters for a run
//!
//! `Parameters` holds the runtime settings: fixed integration step size, total
//! step count, and the minimum pair separation the force kernel tolerates.

use crate::simulation::units::DEFAULT_SEPARATION_FLOOR;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,                // step size, yr
    pub steps: u64,             // total number of steps
    pub separation_floor: f64,  // singularity guard, AU
}

impl Parameters {
    pub fn new(dt: f64, steps: u64) -> Self {
        Self {
            dt,
            steps,
            separation_floor: DEFAULT_SEPARATION_FLOOR,
        }
    }
}
