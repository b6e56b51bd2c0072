//! Headless frame overlay
//!
//! Produces the per-frame text a renderer would draw next to each body
//! ("Earth: 1.00 AU") plus the time-speed label, and decides which trails
//! are worth drawing. Nothing here feeds back into the physics.

use std::fmt;

use crate::simulation::params::SECONDS_PER_DAY;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;

/// Distance label for one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLine {
    pub label: String,
    pub distance_au: f64,
}

impl fmt::Display for BodyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} AU", self.label, self.distance_au)
    }
}

/// Everything the overlay shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub day: f64, // simulated days since start
    pub step: u64,
    pub speed: String,
    pub lines: Vec<BodyLine>,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:.1} (step {}) {}", self.day, self.step, self.speed)?;
        for line in &self.lines {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

/// Reference bodies carry no distance label; minor bodies are unnamed
fn has_label(body: &Body) -> bool {
    !body.is_reference_body() && !body.is_minor_body()
}

/// Trails are drawn for named bodies once they have more than two points
pub fn renders_trail(body: &Body) -> bool {
    !body.is_minor_body() && body.trail().len() > 2
}

pub fn frame_report(scenario: &Scenario) -> FrameReport {
    let sys = &scenario.system;
    let lines = sys
        .iter()
        .filter(|b| has_label(b))
        .map(|b| BodyLine {
            label: b.label().to_string(),
            distance_au: b.distance_to_primary_in(scenario.constants.display_au),
        })
        .collect();

    FrameReport {
        day: sys.t / SECONDS_PER_DAY,
        step: sys.steps,
        speed: scenario.engine.clock.speed.label(),
        lines,
    }
}
