//! Recent round results
//!
//! Keeps the last few settled rounds for display, newest first. Optionally
//! persisted as JSON between sessions.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sim::ledger::Outcome;
use crate::sim::pocket::PocketColor;

/// Maximum number of rounds to keep
pub const MAX_HISTORY: usize = 10;

/// A single settled round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-based)
    pub round: u32,
    /// Winning pocket label
    pub label: String,
    pub color: PocketColor,
    pub won: bool,
    /// Credits paid out (0 on a loss)
    pub payout: i64,
    /// Balance once the round was settled
    pub balance_after: i64,
}

impl RoundRecord {
    pub fn new(round: u32, outcome: &Outcome, balance_after: i64) -> Self {
        Self {
            round,
            label: outcome.pocket.label.to_string(),
            color: outcome.pocket.color,
            won: outcome.won,
            payout: outcome.payout,
            balance_after,
        }
    }
}

/// Recent results board
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoundHistory {
    pub entries: Vec<RoundRecord>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a round at the front, dropping the oldest past the limit
    pub fn record(&mut self, record: RoundRecord) {
        self.entries.insert(0, record);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn latest(&self) -> Option<&RoundRecord> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Wins among the kept rounds
    pub fn win_count(&self) -> usize {
        self.entries.iter().filter(|r| r.won).count()
    }

    /// Total paid out across the kept rounds
    pub fn total_payout(&self) -> i64 {
        self.entries.iter().map(|r| r.payout).sum()
    }

    /// Load history from a JSON file, starting fresh if it can't be read
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<RoundHistory>(&json) {
                Ok(mut history) => {
                    history.entries.truncate(MAX_HISTORY);
                    log::info!("Loaded {} rounds of history", history.entries.len());
                    history
                }
                Err(e) => {
                    log::warn!("History at {} is corrupt ({e}), starting fresh", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No history found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save history as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("History saved ({} rounds)", self.entries.len());
        Ok(())
    }
}
