//! Trajectory serialization
//!
//! Writes XYZ-style frames to a buffered file: body count, a comment line with
//! the simulation time, then one `name x y z` line per body. The logarithmic
//! scale compresses each coordinate through sign(c)·ln(1+|c|), keeping inner
//! and outer planets visible in the same plot; the data is otherwise untouched.
//!
//! The core is agnostic to this encoding — frames are written between steps by
//! the run loop, never inside one.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::states::{System, Vec3};

/// Coordinate transform applied to every written position
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinateScale {
    #[serde(rename = "linear")]
    #[default]
    Linear,

    #[serde(rename = "log")] // sign-preserving log compression
    Log,
}

impl CoordinateScale {
    fn apply(self, x: Vec3) -> Vec3 {
        match self {
            CoordinateScale::Linear => x,
            CoordinateScale::Log => x.map(|c| c.signum() * (1.0 + c.abs()).ln()),
        }
    }
}

/// Buffered frame writer for one trajectory file
pub struct TrajectoryWriter {
    out: BufWriter<File>,
    scale: CoordinateScale,
}

impl TrajectoryWriter {
    /// Create (truncating) the trajectory file
    pub fn create(path: &Path, scale: CoordinateScale) -> SimResult<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
            scale,
        })
    }

    /// Append one frame with every body's current position
    pub fn write_frame(&mut self, system: &System) -> SimResult<()> {
        writeln!(self.out, "{}", system.body_count())?;
        writeln!(self.out, "t = {:.6} yr", system.t)?;
        for b in system.bodies() {
            let p = self.scale.apply(b.x);
            writeln!(self.out, "{} {:.12e} {:.12e} {:.12e}", b.name, p.x, p.y, p.z)?;
        }
        Ok(())
    }

    /// Flush and close the file
    pub fn finish(mut self) -> SimResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
