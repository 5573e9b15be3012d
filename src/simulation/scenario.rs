//! Build and run fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime [`Scenario`]
//! containing:
//! - numerical parameters ([`Parameters`])
//! - system state ([`System`] with bodies at t = 0)
//! - the selected integrator (Verlet or Euler behind the [`Integrator`] trait)
//! - tracked pair handles and output settings
//!
//! Construction is fail-fast: invalid bodies, unknown tracked names, and
//! nonsensical parameters are rejected at build time, before any stepping.
//! `run` owns the whole loop; each run owns exactly one `System` and passes it
//! explicitly to the integrator and diagnostics.

use crate::configuration::config::{IntegratorConfig, OutputConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::output::trajectory::TrajectoryWriter;
use crate::simulation::integrator::{Euler, Integrator, Verlet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Vec3};

/// Resolved per-step diagnostics: index handles, not names
#[derive(Debug, Clone)]
pub struct Tracking {
    pub a: usize,
    pub b: usize,
    pub perihelion_threshold: Option<f64>,
}

/// A fully-initialized runtime scenario
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub integrator: Box<dyn Integrator>,
    pub tracking: Option<Tracking>,
    pub output: Option<OutputConfig>,
}

/// End-of-run report consumed by the driver
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub years: f64,
    pub bodies: usize,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub perihelion: Option<Vec3>,
}

impl Scenario {
    /// Map a scenario configuration onto runtime state
    pub fn build(cfg: ScenarioConfig) -> SimResult<Self> {
        let p_cfg = &cfg.parameters;
        if !(p_cfg.dt > 0.0 && p_cfg.dt.is_finite()) {
            return Err(SimError::Config(format!(
                "step size must be positive and finite, got {}",
                p_cfg.dt
            )));
        }
        if cfg.bodies.is_empty() {
            return Err(SimError::Config("scenario has no bodies".into()));
        }
        if let Some(out) = &cfg.output {
            if out.every == 0 {
                return Err(SimError::Config("output cadence must be at least 1".into()));
            }
        }

        let mut parameters = Parameters::new(p_cfg.dt, p_cfg.steps);
        if let Some(floor) = p_cfg.separation_floor {
            parameters.separation_floor = floor;
        }

        let mut system = System::new();
        system.set_general_relativity(cfg.engine.relativity);
        system.set_separation_floor(parameters.separation_floor);
        for bc in &cfg.bodies {
            system.create_body(
                Vec3::new(bc.x[0], bc.x[1], bc.x[2]),
                Vec3::new(bc.v[0], bc.v[1], bc.v[2]),
                bc.m,
                bc.radius,
                bc.name.clone(),
                bc.id,
            )?;
        }

        // Resolve tracked names once, at build; the step loop only sees handles
        let tracking = match &cfg.tracking {
            Some(tc) => {
                let a = system.index_of(&tc.pair[0])?;
                let b = system.index_of(&tc.pair[1])?;
                if a == b {
                    return Err(SimError::SameBody(tc.pair[0].clone()));
                }
                Some(Tracking {
                    a,
                    b,
                    perihelion_threshold: tc.perihelion_threshold,
                })
            }
            None => None,
        };

        let integrator: Box<dyn Integrator> = match cfg.engine.integrator {
            IntegratorConfig::Verlet => Box::new(Verlet::new(parameters.dt)),
            IntegratorConfig::Euler => Box::new(Euler::new(parameters.dt)),
        };

        Ok(Self {
            parameters,
            system,
            integrator,
            tracking,
            output: cfg.output,
        })
    }

    /// Execute the configured number of steps and report the end state
    ///
    /// Per step: advance, fold the tracked pair into the separation extremes,
    /// capture perihelion coordinates when within the threshold, and append a
    /// trajectory frame at the configured cadence. Evaluation failures abort
    /// the run with the step's error.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        let mut writer = match &self.output {
            Some(out) => Some(TrajectoryWriter::create(&out.path, out.scale)?),
            None => None,
        };
        let every = self.output.as_ref().map_or(1, |out| out.every);

        // Initial evaluation: validates the starting configuration and gives
        // the energy accessors a value even for a zero-step run
        self.system.evaluate_forces_and_energy()?;
        if let Some(w) = writer.as_mut() {
            w.write_frame(&self.system)?;
        }

        for step in 0..self.parameters.steps {
            self.integrator.integrate_one_step(&mut self.system)?;

            if let Some(track) = &self.tracking {
                self.system.track_separation_extremes(track.a, track.b)?;
                if let Some(threshold) = track.perihelion_threshold {
                    self.system
                        .capture_perihelion_if_close(track.a, track.b, threshold)?;
                }
            }

            if let Some(w) = writer.as_mut() {
                if (step + 1) % every == 0 {
                    w.write_frame(&self.system)?;
                }
            }
        }

        if let Some(w) = writer {
            w.finish()?;
        }

        // Refresh so the reported energies describe the final positions and
        // velocities together; Verlet's in-step evaluation pairs the new
        // positions with half-step velocities
        self.system.evaluate_forces_and_energy()?;

        Ok(RunSummary {
            years: self.system.t,
            bodies: self.system.body_count(),
            kinetic_energy: self.system.kinetic_energy()?,
            potential_energy: self.system.potential_energy()?,
            total_energy: self.system.total_energy()?,
            min_distance: self.system.min_distance(),
            max_distance: self.system.max_distance(),
            perihelion: self.system.perihelion_coordinates(),
        })
    }
}
