//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by a `ForceSet`: velocities are
//! kicked with forces from the pre-step positions, then positions drift with
//! the updated velocities.

use tracing::{debug, warn};

use super::forces::{ForceSample, ForceSet};
use super::states::System;
use crate::error::{Result, SimError};

/// Advance the system by one step of `dt` seconds
///
/// Phase 1 computes every body's net force and its new velocity and position
/// without touching the system; if any of that fails (coincident bodies, a
/// force or state that is not finite) the system is left exactly as it was.
/// Phase 2 then, per body:
/// - refreshes `distance_to_primary`
/// - v_n+1 = v_n + (F / m) dt
/// - x_n+1 = x_n + v_n+1 dt
/// - appends x_n+1 to the trail
///
/// `dt = 0` is a valid step: forces and distances are recomputed, state is unchanged.
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, dt: f64) -> Result<()> {
    if !dt.is_finite() {
        return Err(SimError::InvalidTimestep(dt));
    }

    let n = sys.bodies.len();
    let mut samples = vec![ForceSample::default(); n];

    if let Err(err) = forces.accumulate_forces(&*sys, &mut samples) {
        warn!(step = sys.steps, t = sys.t, %err, "step rejected");
        return Err(err);
    }

    // Kick with the old-position force, then drift with the new velocity
    let mut next = Vec::with_capacity(n);
    for (index, (b, s)) in sys.bodies.iter().zip(samples.iter()).enumerate() {
        let v = b.v + s.force / b.m * dt;
        let x = b.x + v * dt;
        if !(v.iter().all(|c| c.is_finite()) && x.iter().all(|c| c.is_finite())) {
            let err = SimError::NonFiniteState { index };
            warn!(step = sys.steps, t = sys.t, %err, "step rejected");
            return Err(err);
        }
        next.push((v, x));
    }

    for ((b, s), (v, x)) in sys.bodies.iter_mut().zip(samples.iter()).zip(next) {
        if let Some(r) = s.distance_to_primary {
            b.distance_to_primary = r;
        }
        b.v = v;
        b.x = x;
        b.trail.push(x);
    }

    sys.t += dt;
    sys.steps += 1;
    debug!(step = sys.steps, t = sys.t, bodies = n, dt, "step complete");
    Ok(())
}
