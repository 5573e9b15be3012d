//! Configuration types for loading simulation scenarios from YAML
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario:
//!
//! - [`EngineConfig`]     – integrator choice and relativity toggle
//! - [`ParametersConfig`] – step size, step count, separation floor
//! - [`BodyConfig`]       – initial state for each body
//! - [`TrackingConfig`]   – optional pair diagnostics (extremes, perihelion)
//! - [`OutputConfig`]     – optional trajectory file settings
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"     # or "euler"
//!   relativity: false
//!
//! parameters:
//!   dt: 0.001                # yr
//!   steps: 100000
//!   separation_floor: 1.0e-6 # AU, optional
//!
//! tracking:                  # optional
//!   pair: [sun, mercury]
//!   perihelion_threshold: 0.3075
//!
//! output:                    # optional
//!   path: positions.xyz
//!   scale: linear            # or "log"
//!   every: 100               # steps between frames
//!
//! bodies:
//!   - name: sun
//!     id: 1
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 1.0
//!     radius: 4.649e-3
//!   - name: earth
//!     id: 4
//!     x: [1.0, 0.0, 0.0]
//!     v: [0.0, 6.283185307179586, 0.0]
//!     m: 3.0e-6
//!     radius: 4.264e-5
//! ```
//!
//! Positions are AU, velocities AU/yr, masses solar masses; a circular orbit
//! velocity is the orbital angular frequency times 2π.

use std::path::PathBuf;

use serde::Deserialize;

use crate::output::trajectory::CoordinateScale;

/// Which integrator advances the system
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "verlet")] // symplectic velocity-Verlet, fixed step
    Verlet,

    #[serde(rename = "euler")] // forward Euler, non-conserving comparison
    Euler,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    #[serde(default)]
    pub relativity: bool, // post-Newtonian force correction
}

/// Numerical parameters for the run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // step size, yr
    pub steps: u64, // number of steps
    pub separation_floor: Option<f64>, // AU; kernel default when absent
}

/// Initial state for a single body
///
/// Fixed-length coordinate arrays so a malformed vector is a deserialization
/// error, not a runtime panic.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,
    pub id: i32,
    pub x: [f64; 3],
    pub v: [f64; 3],
    pub m: f64,
    pub radius: f64,
}

/// Per-step pair diagnostics: separation extremes, optional perihelion capture
#[derive(Deserialize, Debug, Clone)]
pub struct TrackingConfig {
    pub pair: [String; 2],
    pub perihelion_threshold: Option<f64>, // AU
}

/// Trajectory serialization settings
#[derive(Deserialize, Debug, Clone)]
pub struct OutputConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub scale: CoordinateScale,
    #[serde(default = "default_every")]
    pub every: u64, // steps between frames
}

fn default_every() -> u64 {
    1
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    pub tracking: Option<TrackingConfig>,
    pub output: Option<OutputConfig>,
}
