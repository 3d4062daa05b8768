//! Roulette Sim - A single-table roulette spin engine
//!
//! Core modules:
//! - `sim`: Deterministic spin simulation (wheel/ball kinematics, pocket resolution, bet ledger)
//! - `history`: Recent round results
//! - `settings`: Table configuration

pub mod history;
pub mod settings;
pub mod sim;

pub use history::RoundHistory;
pub use settings::{AutoBet, Settings};

use glam::DVec2;
use std::f64::consts::TAU;

/// Engine configuration constants
pub mod consts {
    /// Caller frame step (the engine itself counts ticks, not seconds)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Wheel launch speed range (radians/tick)
    pub const WHEEL_SPEED_MIN: f64 = 0.28;
    pub const WHEEL_SPEED_MAX: f64 = 0.43;
    /// Ball launch speed range (radians/tick, opposite direction to the wheel)
    pub const BALL_SPEED_MIN: f64 = -0.80;
    pub const BALL_SPEED_MAX: f64 = -0.55;

    /// Per-tick velocity decay (wheel bearings lose less than the ball track)
    pub const WHEEL_DECAY: f64 = 0.992;
    pub const BALL_DECAY: f64 = 0.985;
    /// Spin settles once the wheel turns slower than this (radians/tick)
    pub const WHEEL_STOP_SPEED: f64 = 0.002;

    /// Display geometry for snapshot marker positions
    pub const WHEEL_RADIUS: f64 = 220.0;
    pub const BALL_TRACK_RADIUS: f64 = 195.0;

    /// Credits a fresh ledger starts with
    pub const STARTING_BALANCE: i64 = 100;
    /// Flat stake taken per placed bet
    pub const STAKE: i64 = 1;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = ((angle % TAU) + TAU) % TAU;
    // (-tiny + TAU) can round up to exactly TAU
    if a >= TAU { 0.0 } else { a }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Fixed-step accumulator that turns frame time into engine ticks.
///
/// Frame schedulers call [`FrameClock::advance`] with their measured frame
/// time and run one engine tick per returned step.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `frame_dt` seconds, returning how many ticks are due
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, consts::MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= consts::SIM_DT && substeps < consts::MAX_SUBSTEPS {
            self.accumulator -= consts::SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Fraction of a tick left over (for render interpolation)
    pub fn alpha(&self) -> f64 {
        self.accumulator / consts::SIM_DT
    }
}
