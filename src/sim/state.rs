//! Table state and read-only snapshots
//!
//! A [`Table`] owns everything one round needs: the wheel, the ledger, the
//! launch velocity source and the recent-results history. Renderers read
//! [`TableSnapshot`]s and never touch the table directly.

use glam::DVec2;
use serde::Serialize;

use super::ledger::{BetLedger, BetSet, Outcome};
use super::rng::{SeededSpin, SpinSource};
use super::wheel::{SpinPhase, SpinSimulator};
use crate::consts::*;
use crate::history::RoundHistory;
use crate::settings::Settings;
use crate::{normalize_angle, polar_to_cartesian};

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableEvent {
    /// A bet was accepted
    BetPlaced { total_stake: i64 },
    /// A spin was launched
    SpinStarted { round: u32 },
    /// The wheel came to rest and bets were settled
    Settled(Outcome),
}

/// One player, one wheel
pub struct Table {
    pub(crate) wheel: SpinSimulator,
    pub(crate) ledger: BetLedger,
    pub(crate) source: Box<dyn SpinSource>,
    pub(crate) history: RoundHistory,
    /// Rounds settled so far
    pub(crate) round: u32,
    pub(crate) last_outcome: Option<Outcome>,
}

impl Table {
    /// Create a table from settings, seeding the launch RNG
    pub fn new(settings: &Settings) -> Self {
        let source = SeededSpin::new(settings.seed.unwrap_or_else(rand::random));
        log::info!(
            "Table opened: balance {}, seed {}",
            settings.starting_balance,
            source.seed()
        );
        Self::with_source(settings.starting_balance, source)
    }

    /// Create a table with an explicit velocity source
    pub fn with_source(balance: i64, source: impl SpinSource + 'static) -> Self {
        Self {
            wheel: SpinSimulator::new(),
            ledger: BetLedger::new(balance),
            source: Box::new(source),
            history: RoundHistory::new(),
            round: 0,
            last_outcome: None,
        }
    }

    /// Attach previously saved history
    pub fn with_history(mut self, history: RoundHistory) -> Self {
        self.round = history.latest().map(|r| r.round).unwrap_or(0);
        self.history = history;
        self
    }

    pub fn wheel(&self) -> &SpinSimulator {
        &self.wheel
    }

    pub fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn balance(&self) -> i64 {
        self.ledger.balance()
    }

    pub fn current_bets(&self) -> &BetSet {
        self.ledger.bets()
    }

    pub fn phase(&self) -> SpinPhase {
        self.wheel.phase()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Capture everything a renderer needs for one frame
    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.wheel.state();
        let wheel_angle = normalize_angle(state.wheel_angle);

        // At rest the ball sits in the centre of the resolved pocket
        let ball_angle = match (self.wheel.is_spinning(), self.wheel.last_result()) {
            (false, Some(pocket)) => self.wheel.rest_angle(&pocket),
            _ => normalize_angle(state.ball_angle),
        };

        TableSnapshot {
            phase: self.wheel.phase(),
            wheel_angle,
            ball_angle,
            wheel_velocity: state.wheel_velocity,
            ball_velocity: state.ball_velocity,
            balance: self.ledger.balance(),
            bets: self.ledger.bets().clone(),
            total_stake: self.ledger.bets().total_stake(),
            round: self.round,
            last_outcome: self.last_outcome,
            wheel_marker: polar_to_cartesian(WHEEL_RADIUS, wheel_angle),
            ball_marker: polar_to_cartesian(BALL_TRACK_RADIUS, ball_angle),
        }
    }
}

/// Read-only view of the table for one frame
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub phase: SpinPhase,
    /// Wheel rotation, normalized to [0, 2π)
    pub wheel_angle: f64,
    /// Ball angle, normalized to [0, 2π)
    pub ball_angle: f64,
    pub wheel_velocity: f64,
    pub ball_velocity: f64,
    pub balance: i64,
    pub bets: BetSet,
    pub total_stake: i64,
    pub round: u32,
    pub last_outcome: Option<Outcome>,
    /// Position of the wheel's zero slot edge
    pub wheel_marker: DVec2,
    /// Position of the ball on its track
    pub ball_marker: DVec2,
}
