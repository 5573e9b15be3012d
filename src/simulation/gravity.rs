//! Pairwise gravitational force and energy evaluation
//!
//! Direct O(n²) summation over unordered pairs, accumulating equal-and-opposite
//! forces into each body's accumulator together with the kinetic and potential
//! energy sums. With the relativity flag set, each pairwise magnitude carries
//! the post-Newtonian factor 1 + 3l²/(r²c²), which reproduces the relativistic
//! perihelion precession of close, eccentric orbits.
//!
//! A pair at or below the separation floor aborts the evaluation: an unguarded
//! near-singular pass would hand non-finite values to every later step.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, Energies, Vec3};
use crate::simulation::units::{G, SPEED_OF_LIGHT};

/// Accumulate forces and energies for the current body states
///
/// Zeroes every accumulator, then for each pair (i, j) with i < j adds
/// F = G·mᵢ·mⱼ/r² along the separation, −F to the partner, and the pair's
/// potential −G·mᵢ·mⱼ/r. Kinetic energy is summed over bodies afterwards.
pub(crate) fn evaluate(
    bodies: &mut [Body],
    relativity: bool,
    separation_floor: f64,
) -> SimResult<Energies> {
    for b in bodies.iter_mut() {
        b.f = Vec3::zeros();
    }

    let mut potential = 0.0;
    let c2 = SPEED_OF_LIGHT * SPEED_OF_LIGHT;

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            // Split so both bodies of the pair can be borrowed mutably;
            // i < j, so i lands in the head slice
            let (head, tail) = bodies.split_at_mut(j);
            let bi = &mut head[i];
            let bj = &mut tail[0];

            // Displacement from i to j: i is pulled along +r, j along -r
            let r = bj.x - bi.x;
            let dist = r.norm();
            if dist <= separation_floor {
                return Err(SimError::SingularSeparation {
                    a: bi.name.clone(),
                    b: bj.name.clone(),
                    separation: dist,
                });
            }

            let mut magnitude = G * bi.m * bj.m / (dist * dist);

            if relativity {
                // l is the specific orbital angular momentum of the pair
                let l = r.cross(&(bj.v - bi.v)).norm();
                magnitude *= 1.0 + 3.0 * l * l / (dist * dist * c2);
            }

            let force = (magnitude / dist) * r;
            bi.f += force;
            bj.f -= force;

            potential -= G * bi.m * bj.m / dist;
        }
    }

    let kinetic: f64 = bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum();

    if !(kinetic.is_finite() && potential.is_finite()) {
        return Err(SimError::NonFinite { quantity: "energy" });
    }
    if bodies
        .iter()
        .any(|b| !b.f.iter().all(|c| c.is_finite()))
    {
        return Err(SimError::NonFinite { quantity: "force" });
    }

    Ok(Energies { kinetic, potential })
}
