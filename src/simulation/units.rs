//! Unit conventions for the simulation
//!
//! Length in astronomical units, time in years, mass in solar masses.
//! In these units the gravitational constant is 4π², so a circular orbit of
//! radius 1 AU around 1 solar mass has speed 2π AU/yr and period 1 yr.

use std::f64::consts::PI;

/// Gravitational constant, AU³ yr⁻² M☉⁻¹
pub const G: f64 = 4.0 * PI * PI;

/// Speed of light, AU/yr
pub const SPEED_OF_LIGHT: f64 = 63_239.7263;

/// Default minimum pair separation (AU) below which force evaluation fails
/// instead of producing a near-singular contribution
pub const DEFAULT_SEPARATION_FLOOR: f64 = 1.0e-6;
