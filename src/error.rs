//! Error taxonomy for the simulation
//!
//! Construction and lookup errors are recoverable by the caller before a run
//! starts. `SingularSeparation` and `NonFinite` are fatal to the current run:
//! past either, every later step would integrate corrupted state.

use thiserror::Error;

/// Result alias used throughout the crate
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected at body creation; a non-positive mass breaks the force and
    /// energy formulas
    #[error("body '{name}' must have positive mass, got {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    /// Rejected at body creation
    #[error("body '{name}' must have non-negative radius, got {radius}")]
    NegativeRadius { name: String, radius: f64 },

    /// Rejected at body creation: initial position or velocity is NaN/inf
    #[error("body '{name}' has a non-finite initial state")]
    NonFiniteBody { name: String },

    /// Name lookup found no match
    #[error("no body named '{0}'")]
    BodyNotFound(String),

    /// Index handle does not refer to a body in the system
    #[error("body index {0} out of range")]
    BodyIndexOutOfRange(usize),

    /// A pair diagnostic was given the same body twice; two distinct bodies
    /// are required for a meaningful separation
    #[error("'{0}' given for both sides of a pair diagnostic")]
    SameBody(String),

    /// Two bodies came within the minimum-separation floor during force
    /// evaluation. Fatal: the run cannot continue past it
    #[error("bodies '{a}' and '{b}' within the separation floor ({separation:.3e} AU)")]
    SingularSeparation {
        a: String,
        b: String,
        separation: f64,
    },

    /// NaN or infinity detected after a force evaluation. Fatal
    #[error("non-finite {quantity} produced during force evaluation")]
    NonFinite { quantity: &'static str },

    /// Energy accessor called before any force evaluation; there is no value
    /// to report, as opposed to a physically zero energy
    #[error("energy read before the first force evaluation")]
    EnergiesUninitialized,

    /// Scenario-level validation failure
    #[error("scenario config: {0}")]
    Config(String),

    /// Trajectory or scenario file I/O
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
