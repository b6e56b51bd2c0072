//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass with its trail and cached reference distance
//! - `Trail`  position history, unbounded or capped as a ring buffer
//! - `System` the ordered registry of bodies plus simulated time
//!
//! Bodies are identified by their index in `System`, never by value.

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

/// Ordered history of positions.
///
/// With no cap every pushed point is kept. With `Some(cap)` the storage is a
/// ring buffer indexed by `head` that keeps the newest `cap` points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: Vec<NVec2>,
    cap: Option<usize>,
    head: usize, // oldest point once the ring is full
}

impl Trail {
    /// Unbounded trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Trail keeping at most `cap` points
    pub fn with_cap(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
            cap: Some(cap),
            head: 0,
        }
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, evicting the oldest one if the ring is full
    pub fn push(&mut self, p: NVec2) {
        match self.cap {
            None => self.points.push(p),
            Some(0) => {}
            Some(cap) if self.points.len() < cap => self.points.push(p),
            Some(cap) => {
                self.points[self.head] = p;
                self.head = (self.head + 1) % cap;
            }
        }
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Most recently pushed point
    pub fn latest(&self) -> Option<NVec2> {
        if self.head == 0 {
            self.points.last().copied()
        } else {
            Some(self.points[self.head - 1])
        }
    }

    /// Change the cap, keeping the newest points that still fit
    pub fn set_cap(&mut self, cap: Option<usize>) {
        let mut ordered: Vec<NVec2> = self.iter().copied().collect();
        if let Some(cap) = cap {
            if ordered.len() > cap {
                ordered.drain(..ordered.len() - cap);
            }
        }
        self.points = ordered;
        self.head = 0;
        self.cap = cap;
    }
}

/// One simulated point mass
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) x: NVec2, // position (m)
    pub(crate) v: NVec2, // velocity (m/s)
    pub(crate) m: f64, // mass (kg)
    pub(crate) radius: f64, // rendering hint only
    pub(crate) color: [u8; 3], // opaque, never read by physics
    pub(crate) label: String,
    pub(crate) is_reference_body: bool,
    pub(crate) is_minor_body: bool,
    pub(crate) trail: Trail,
    pub(crate) distance_to_primary: f64,
}

impl Body {
    /// Create a body, rejecting masses that are not finite and positive
    pub fn new(label: impl Into<String>, x: NVec2, v: NVec2, m: f64) -> Result<Self> {
        let label = label.into();
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { label, mass: m });
        }
        Ok(Self {
            x,
            v,
            m,
            radius: 1.0,
            color: [255, 255, 255],
            label,
            is_reference_body: false,
            is_minor_body: false,
            trail: Trail::new(),
            distance_to_primary: 0.0,
        })
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Mark as the body `distance_to_primary` is measured from
    pub fn reference(mut self, yes: bool) -> Self {
        self.is_reference_body = yes;
        self
    }

    /// Mark as an asteroid-class body
    pub fn minor(mut self, yes: bool) -> Self {
        self.is_minor_body = yes;
        self
    }

    pub fn with_trail_cap(mut self, cap: Option<usize>) -> Self {
        self.trail.set_cap(cap);
        self
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_reference_body(&self) -> bool {
        self.is_reference_body
    }

    pub fn is_minor_body(&self) -> bool {
        self.is_minor_body
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Distance (m) to the last reference body seen in the latest force pass
    pub fn distance_to_primary(&self) -> f64 {
        self.distance_to_primary
    }

    /// `distance_to_primary` expressed in `au` meters per unit
    pub fn distance_to_primary_in(&self, au: f64) -> f64 {
        self.distance_to_primary / au
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// The body registry: every body in a fixed order, plus elapsed time
#[derive(Debug, Clone, Default)]
pub struct System {
    pub(crate) bodies: Vec<Body>, // index = identity
    pub t: f64, // simulated seconds
    pub steps: u64, // completed integrator steps
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bodies(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }

    /// Add a body during initialization; returns its index
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body carrying `label`
    pub fn find(&self, label: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.label == label)
    }

    /// The reference body that wins distance reporting (last in order)
    pub fn reference_body(&self) -> Option<(usize, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .rev()
            .find(|(_, b)| b.is_reference_body)
    }

    /// Total linear momentum, sum of m * v
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    /// Kinetic plus pairwise potential energy for gravitational constant `g`
    pub fn total_energy(&self, g: f64) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();
        let mut potential = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                potential -= g * bi.m * bj.m / (bj.x - bi.x).norm();
            }
        }
        kinetic + potential
    }

    /// Apply one trail cap to every body
    pub fn set_trail_cap(&mut self, cap: Option<usize>) {
        for b in self.bodies.iter_mut() {
            b.trail.set_cap(cap);
        }
    }
}
