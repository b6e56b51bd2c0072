//! Force contributors for the n-body engine
//!
//! A [`ForceSet`] holds boxed [`Force`] terms and sums their contributions
//! into one [`ForceSample`] per body. The only term shipped is direct
//! Newtonian gravity, an exact O(n^2) sum with no approximation.
//!
//! Force accumulation only reads the system; nothing is mutated until every
//! body's sample has been computed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, SimError};
use crate::simulation::states::{Body, NVec2, System};

/// Net force on one body plus the reference distance seen while summing it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceSample {
    pub force: NVec2, // newtons
    pub distance_to_primary: Option<f64>, // set when a reference body contributed
}

/// Collection of force terms whose contributions are summed per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute the net force on every body in `sys`
    /// - `out[i]` is reset, then receives the sum over all terms
    pub fn accumulate_forces(&self, sys: &System, out: &mut [ForceSample]) -> Result<()> {
        // Zero buffer
        for s in out.iter_mut() {
            *s = ForceSample::default();
        }
        for term in &self.terms {
            term.accumulate(sys, out)?;
        }
        Ok(())
    }
}

/// A force source operating on a whole [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn accumulate(&self, sys: &System, out: &mut [ForceSample]) -> Result<()>;
}

/// Newtonian gravity between every ordered pair of bodies, unsoftened
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Force exerted on `a` by `b`
    ///
    /// `None` when the pair is coincident or so close that the force is not finite
    pub fn pair_force(&self, a: &Body, b: &Body) -> Option<NVec2> {
        let d = b.x - a.x;
        let r = d.norm();
        if !(r > 0.0 && r.is_finite()) {
            return None;
        }
        let f = self.g * a.m * b.m / (r * r);
        if !f.is_finite() {
            return None;
        }
        let theta = d.y.atan2(d.x);
        Some(NVec2::new(f * theta.cos(), f * theta.sin()))
    }

    /// Sum the pull of every other body on body `i`
    fn net_force_on(&self, i: usize, bodies: &[Body]) -> Result<ForceSample> {
        let bi = &bodies[i];
        let mut sample = ForceSample::default();

        for (j, bj) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            let f = self.pair_force(bi, bj).ok_or_else(|| {
                if bj.x == bi.x {
                    SimError::CoincidentBodies { a: i, b: j }
                } else {
                    SimError::SingularForce { a: i, b: j }
                }
            })?;

            if bj.is_reference_body {
                // last reference body in order wins
                sample.distance_to_primary = Some((bj.x - bi.x).norm());
            }
            sample.force += f;
            if !(sample.force.x.is_finite() && sample.force.y.is_finite()) {
                return Err(SimError::SingularForce { a: i, b: j });
            }
        }
        Ok(sample)
    }
}

impl Force for NewtonianGravity {
    #[cfg(not(feature = "parallel"))]
    fn accumulate(&self, sys: &System, out: &mut [ForceSample]) -> Result<()> {
        let bodies = sys.bodies();
        for (i, slot) in out.iter_mut().enumerate().take(bodies.len()) {
            let s = self.net_force_on(i, bodies)?;
            slot.force += s.force;
            if s.distance_to_primary.is_some() {
                slot.distance_to_primary = s.distance_to_primary;
            }
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn accumulate(&self, sys: &System, out: &mut [ForceSample]) -> Result<()> {
        let bodies = sys.bodies();
        // Each body's sum runs in the same order as the sequential path
        let samples = (0..bodies.len())
            .into_par_iter()
            .map(|i| self.net_force_on(i, bodies))
            .collect::<Result<Vec<_>>>()?;

        for (slot, s) in out.iter_mut().zip(samples) {
            slot.force += s.force;
            if s.distance_to_primary.is_some() {
                slot.distance_to_primary = s.distance_to_primary;
            }
        }
        Ok(())
    }
}
