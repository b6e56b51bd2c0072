//! Timestep and time-scale control
//!
//! Two independent knobs decide how fast simulated time passes:
//! - [`TimestepLevel`]: seconds per integrator step (pause / half day / full day)
//! - [`TimeSpeed`]: integrator steps per real-world second
//!
//! [`SimulationClock`] combines them and turns elapsed real time into a
//! whole number of steps.

use serde::Deserialize;

use super::params::SECONDS_PER_HOUR;

/// Discrete step sizes a driving loop cycles through
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestepLevel {
    #[serde(rename = "paused")] // dt = 0, forces still evaluated
    Paused,

    #[serde(rename = "half-day")]
    HalfDay,

    #[serde(rename = "full-day")]
    #[default]
    FullDay,
}

impl TimestepLevel {
    /// Step size in seconds
    pub fn seconds(self) -> f64 {
        match self {
            TimestepLevel::Paused => 0.0,
            TimestepLevel::HalfDay => 12.0 * SECONDS_PER_HOUR,
            TimestepLevel::FullDay => 24.0 * SECONDS_PER_HOUR,
        }
    }

    /// Next level in toggle order: full day -> half day -> paused -> full day
    pub fn cycle(self) -> Self {
        match self {
            TimestepLevel::Paused => TimestepLevel::FullDay,
            TimestepLevel::FullDay => TimestepLevel::HalfDay,
            TimestepLevel::HalfDay => TimestepLevel::Paused,
        }
    }
}

/// Integrator steps per real second
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct TimeSpeed(u32);

impl TimeSpeed {
    pub const BASE: u32 = 60;
    pub const MAX: u32 = 60_000;

    pub fn new(steps_per_second: u32) -> Self {
        Self(steps_per_second)
    }

    pub fn steps_per_second(self) -> u32 {
        self.0
    }

    /// Speed relative to the base rate
    pub fn multiplier(self) -> u32 {
        self.0 / Self::BASE
    }

    /// x10 per press, wrapping back to the base rate after the maximum
    pub fn cycle(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::BASE)
        } else {
            Self(self.0.saturating_mul(10))
        }
    }

    /// Overlay text shown by the renderer
    pub fn label(self) -> String {
        format!("Speed: {}x", self.multiplier())
    }
}

impl Default for TimeSpeed {
    fn default() -> Self {
        Self(Self::BASE)
    }
}

/// Both time knobs plus the fractional step carried between frames
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    pub level: TimestepLevel,
    pub speed: TimeSpeed,
    pub paused: bool, // no steps at all, unlike TimestepLevel::Paused
    carry: f64, // fraction of a step owed from earlier calls
}

impl SimulationClock {
    /// Upper bound on the steps one `steps_for` call hands out
    pub const MAX_STEPS_PER_CALL: u64 = 1_000_000;

    pub fn new(level: TimestepLevel, speed: TimeSpeed) -> Self {
        Self {
            level,
            speed,
            paused: false,
            carry: 0.0,
        }
    }

    /// Seconds per integrator step
    pub fn dt(&self) -> f64 {
        self.level.seconds()
    }

    /// Simulated seconds per real second
    pub fn rate(&self) -> f64 {
        self.dt() * f64::from(self.speed.steps_per_second())
    }

    pub fn cycle_level(&mut self) {
        self.level = self.level.cycle();
    }

    pub fn cycle_speed(&mut self) {
        self.speed = self.speed.cycle();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Number of steps to run for `real_seconds` of wall-clock time
    ///
    /// Non-finite or non-positive durations grant nothing. A single call never
    /// grants more than [`SimulationClock::MAX_STEPS_PER_CALL`]; time beyond the
    /// cap is dropped rather than owed.
    pub fn steps_for(&mut self, real_seconds: f64) -> u64 {
        if self.paused || !(real_seconds > 0.0 && real_seconds.is_finite()) {
            return 0;
        }
        let total = self.carry + real_seconds * f64::from(self.speed.steps_per_second());
        let cap = Self::MAX_STEPS_PER_CALL as f64;
        if !(total < cap) {
            self.carry = 0.0;
            return Self::MAX_STEPS_PER_CALL;
        }
        let whole = total.floor();
        self.carry = total - whole;
        whole as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_cycle_matches_toggle_order() {
        let mut level = TimestepLevel::default();
        assert_eq!(level, TimestepLevel::FullDay);
        let mut seen = Vec::new();
        for _ in 0..3 {
            level = level.cycle();
            seen.push(level.seconds());
        }
        assert_eq!(seen, vec![43_200.0, 0.0, 86_400.0]);
    }

    #[test]
    fn speed_cycles_by_ten_and_wraps() {
        let mut speed = TimeSpeed::default();
        let mut seen = vec![speed.steps_per_second()];
        for _ in 0..4 {
            speed = speed.cycle();
            seen.push(speed.steps_per_second());
        }
        assert_eq!(seen, vec![60, 600, 6_000, 60_000, 60]);
        assert_eq!(TimeSpeed::new(6_000).label(), "Speed: 100x");
    }

    #[test]
    fn clock_carries_fractional_steps() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.steps_for(0.5), 30);
        assert_eq!(clock.steps_for(0.01), 0);
        assert_eq!(clock.steps_for(0.01), 1);
        assert_eq!(clock.rate(), 86_400.0 * 60.0);
    }

    #[test]
    fn non_finite_duration_leaves_clock_usable() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.steps_for(f64::INFINITY), 0);
        assert_eq!(clock.steps_for(f64::NAN), 0);
        assert_eq!(clock.steps_for(-1.0), 0);
        assert_eq!(clock.steps_for(1.0), 60);
    }

    #[test]
    fn huge_duration_is_capped() {
        let mut clock = SimulationClock::new(TimestepLevel::FullDay, TimeSpeed::new(60_000));
        assert_eq!(clock.steps_for(1e300), SimulationClock::MAX_STEPS_PER_CALL);
        // nothing carried over from the dropped time
        assert_eq!(clock.steps_for(0.5), 30_000);
    }

    #[test]
    fn paused_clock_grants_nothing() {
        let mut clock = SimulationClock::default();
        clock.toggle_pause();
        assert_eq!(clock.steps_for(10.0), 0);
        clock.toggle_pause();
        assert_eq!(clock.steps_for(1.0), 60);
    }
}
