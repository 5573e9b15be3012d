//! Core state types for the N-body simulation
//!
//! Defines the body record and the system aggregate:
//! - `Body`: one point mass (position, velocity, force accumulator, mass,
//!   radius, name, id)
//! - `System`: the ordered body collection plus the run-level diagnostics
//!   (energies, separation extremes, perihelion coordinates, center of mass,
//!   momentum, angular momentum) and the relativity toggle
//!
//! `create_body` returns the body's index, which is the stable handle for all
//! pair diagnostics; names may repeat and are only resolved through
//! `index_of` (first match, explicit error when absent).

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};
use crate::simulation::gravity;
use crate::simulation::units::DEFAULT_SEPARATION_FLOOR;

pub type Vec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: Vec3,      // position, AU
    pub v: Vec3,      // velocity, AU/yr
    pub f: Vec3,      // force accumulator, rebuilt by every evaluation pass
    pub m: f64,       // mass, solar masses
    pub radius: f64,  // radius, AU (collision predicate only)
    pub name: String, // display name, not unique
    pub id: i32,      // caller-supplied tag, not used for lookup
}

/// Kinetic/potential energy of the most recent force evaluation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Energies {
    pub kinetic: f64,
    pub potential: f64,
}

/// Running min/max separation between the tracked pair
#[derive(Debug, Clone, Copy)]
struct SeparationExtremes {
    min: f64,
    max: f64,
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // creation order; index = handle
    pub t: f64,        // simulation time, yr
    energies: Option<Energies>,
    extremes: Option<SeparationExtremes>,
    perihelion: Option<Vec3>,
    relativity: bool,
    separation_floor: f64,
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

impl System {
    /// Create an empty system at t = 0
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
            energies: None,
            extremes: None,
            perihelion: None,
            relativity: false,
            separation_floor: DEFAULT_SEPARATION_FLOOR,
        }
    }

    /// Append a body and return its index handle
    ///
    /// Fails fast on non-positive mass, negative radius, or a non-finite
    /// initial state; none of these can produce a meaningful run.
    pub fn create_body(
        &mut self,
        x: Vec3,
        v: Vec3,
        m: f64,
        radius: f64,
        name: impl Into<String>,
        id: i32,
    ) -> SimResult<usize> {
        let name = name.into();
        if !(m > 0.0 && m.is_finite()) {
            return Err(SimError::NonPositiveMass { name, mass: m });
        }
        if !(radius >= 0.0 && radius.is_finite()) {
            return Err(SimError::NegativeRadius { name, radius });
        }
        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteBody { name });
        }
        self.bodies.push(Body {
            x,
            v,
            f: Vec3::zeros(),
            m,
            radius,
            name,
            id,
        });
        Ok(self.bodies.len() - 1)
    }

    /// Index of the first body with the given name
    pub fn index_of(&self, name: &str) -> SimResult<usize> {
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| SimError::BodyNotFound(name.to_string()))
    }

    /// Recompute all pairwise forces and both energy sums for the current
    /// positions and velocities
    ///
    /// Every accumulator is zeroed first; afterwards each body's `f` holds the
    /// total gravitational force on it and the energy accessors reflect this
    /// state. Errors (`SingularSeparation`, `NonFinite`) are fatal to the run.
    pub fn evaluate_forces_and_energy(&mut self) -> SimResult<()> {
        let energies =
            gravity::evaluate(&mut self.bodies, self.relativity, self.separation_floor)?;
        self.energies = Some(energies);
        Ok(())
    }

    /// True iff the two bodies currently overlap: separation ≤ sum of radii
    ///
    /// Pure predicate; never invoked by the integration loop.
    pub fn collision(&self, a: usize, b: usize) -> SimResult<bool> {
        let (ba, bb) = (self.body(a)?, self.body(b)?);
        Ok((bb.x - ba.x).norm() <= ba.radius + bb.radius)
    }

    /// Fold the pair's current separation into the running min/max
    ///
    /// Call once per step to build the extremum over a whole trajectory. The
    /// two handles must name distinct bodies.
    pub fn track_separation_extremes(&mut self, a: usize, b: usize) -> SimResult<()> {
        let sep = self.pair_separation(a, b)?;
        self.extremes = Some(match self.extremes {
            None => SeparationExtremes { min: sep, max: sep },
            Some(e) => SeparationExtremes {
                min: e.min.min(sep),
                max: e.max.max(sep),
            },
        });
        Ok(())
    }

    /// Record the offset of body `a` from body `b` as the perihelion
    /// coordinates iff their separation is within `threshold`
    ///
    /// Overwrites any previous capture; leaves state untouched when the pair
    /// is farther apart.
    pub fn capture_perihelion_if_close(
        &mut self,
        a: usize,
        b: usize,
        threshold: f64,
    ) -> SimResult<()> {
        if self.pair_separation(a, b)? <= threshold {
            self.perihelion = Some(self.bodies[a].x - self.bodies[b].x);
        }
        Ok(())
    }

    /// Mass-weighted mean position of all bodies
    pub fn center_of_mass(&self) -> Vec3 {
        let mut total_mass = 0.0;
        let mut weighted = Vec3::zeros();
        for b in &self.bodies {
            total_mass += b.m;
            weighted += b.m * b.x;
        }
        if total_mass > 0.0 {
            weighted / total_mass
        } else {
            Vec3::zeros()
        }
    }

    /// Translate every body so the center of mass sits at the origin
    pub fn apply_center_of_mass_shift(&mut self) {
        let com = self.center_of_mass();
        for b in &mut self.bodies {
            b.x -= com;
        }
    }

    /// Total linear momentum Σ m·v
    pub fn momentum(&self) -> Vec3 {
        let mut p = Vec3::zeros();
        for b in &self.bodies {
            p += b.m * b.v;
        }
        p
    }

    /// Total angular momentum Σ m·(x × v) about the origin
    pub fn angular_momentum(&self) -> Vec3 {
        let mut l = Vec3::zeros();
        for b in &self.bodies {
            l += b.m * b.x.cross(&b.v);
        }
        l
    }

    /// Enable or disable the post-Newtonian force correction
    pub fn set_general_relativity(&mut self, on: bool) {
        self.relativity = on;
    }

    pub fn general_relativity(&self) -> bool {
        self.relativity
    }

    /// Override the minimum pair separation the force kernel tolerates
    pub fn set_separation_floor(&mut self, floor: f64) {
        self.separation_floor = floor;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn kinetic_energy(&self) -> SimResult<f64> {
        Ok(self.energies()?.kinetic)
    }

    pub fn potential_energy(&self) -> SimResult<f64> {
        Ok(self.energies()?.potential)
    }

    pub fn total_energy(&self) -> SimResult<f64> {
        let e = self.energies()?;
        Ok(e.kinetic + e.potential)
    }

    /// Smallest tracked pair separation so far, if tracking ever ran
    pub fn min_distance(&self) -> Option<f64> {
        self.extremes.map(|e| e.min)
    }

    /// Largest tracked pair separation so far, if tracking ever ran
    pub fn max_distance(&self) -> Option<f64> {
        self.extremes.map(|e| e.max)
    }

    /// Offset recorded by the most recent close-enough perihelion capture
    pub fn perihelion_coordinates(&self) -> Option<Vec3> {
        self.perihelion
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    fn energies(&self) -> SimResult<Energies> {
        self.energies.ok_or(SimError::EnergiesUninitialized)
    }

    fn body(&self, i: usize) -> SimResult<&Body> {
        self.bodies.get(i).ok_or(SimError::BodyIndexOutOfRange(i))
    }

    /// Separation of a distinct pair; rejects a == b rather than reporting a
    /// degenerate zero
    fn pair_separation(&self, a: usize, b: usize) -> SimResult<f64> {
        if a == b {
            return Err(SimError::SameBody(self.body(a)?.name.clone()));
        }
        let (ba, bb) = (self.body(a)?, self.body(b)?);
        Ok((bb.x - ba.x).norm())
    }
}
