//! Player balance, placed bets and settlement
//!
//! Invalid placements are ignored rather than reported: the ledger sits
//! behind a click-driven front end where a rejected click simply does
//! nothing. Each placement returns whether it took effect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::pocket::{Pocket, PocketColor, find_pocket};
use crate::consts::{STAKE, STARTING_BALANCE};

/// Outside bet covering a whole class of pockets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialBet {
    #[default]
    None,
    Red,
    Black,
    Odd,
    Even,
}

impl SpecialBet {
    /// Whether this bet wins on `pocket`. The zeros lose every special bet.
    pub fn wins(&self, pocket: &Pocket) -> bool {
        let n = pocket.value();
        match self {
            SpecialBet::None => false,
            SpecialBet::Red => pocket.color == PocketColor::Red,
            SpecialBet::Black => pocket.color == PocketColor::Black,
            SpecialBet::Odd => n > 0 && n % 2 == 1,
            SpecialBet::Even => n > 0 && n % 2 == 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialBet::None => "none",
            SpecialBet::Red => "red",
            SpecialBet::Black => "black",
            SpecialBet::Odd => "odd",
            SpecialBet::Even => "even",
        }
    }
}

/// Bets placed for the current round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSet {
    /// Straight-up bets by pocket label
    pub number_bets: BTreeSet<String>,
    pub special: SpecialBet,
}

impl BetSet {
    pub fn is_empty(&self) -> bool {
        self.number_bets.is_empty() && self.special == SpecialBet::None
    }

    /// Credits currently staked on the table
    pub fn total_stake(&self) -> i64 {
        if self.special != SpecialBet::None {
            STAKE
        } else {
            self.number_bets.len() as i64 * STAKE
        }
    }

    pub fn clear(&mut self) {
        self.number_bets.clear();
        self.special = SpecialBet::None;
    }
}

/// Result of settling one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub won: bool,
    pub pocket: Pocket,
    /// Credits paid out (0 on a loss)
    pub payout: i64,
}

/// Straight-up payout: the 36-credit pot split across the covered numbers, doubled
fn number_payout(count: usize) -> i64 {
    ((36.0 / count as f64) * 2.0).round() as i64
}

/// Outside-bet payout: stake plus a 5% bonus that rounds away to nothing
fn special_payout() -> i64 {
    1 + (1.0_f64 * 0.05).round() as i64
}

/// Balance and bets for the single player at the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetLedger {
    balance: i64,
    bets: BetSet,
}

impl Default for BetLedger {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}

impl BetLedger {
    pub fn new(balance: i64) -> Self {
        Self {
            balance,
            bets: BetSet::default(),
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn bets(&self) -> &BetSet {
        &self.bets
    }

    pub fn has_bets(&self) -> bool {
        !self.bets.is_empty()
    }

    /// Place a straight-up bet on `label`
    ///
    /// Ignored while a special bet is active, when the number is already
    /// covered, when the balance is exhausted, or for an unknown label.
    pub fn place_number_bet(&mut self, label: &str) -> bool {
        if self.bets.special != SpecialBet::None
            || self.balance <= 0
            || self.bets.number_bets.contains(label)
        {
            return false;
        }
        let Some(pocket) = find_pocket(label) else {
            log::debug!("Ignoring bet on unknown pocket {label:?}");
            return false;
        };

        self.bets.number_bets.insert(pocket.label.to_string());
        self.balance -= STAKE;
        true
    }

    /// Place an outside bet, replacing any straight-up bets
    ///
    /// Re-selecting the active kind is ignored, not a toggle.
    pub fn place_special_bet(&mut self, kind: SpecialBet) -> bool {
        if kind == SpecialBet::None || kind == self.bets.special || self.balance <= 0 {
            return false;
        }

        self.bets.number_bets.clear();
        self.bets.special = kind;
        self.balance -= STAKE;
        true
    }

    /// Settle the round against the winning pocket and clear all bets
    ///
    /// Straight-up bets are judged first; an active special bet is judged
    /// after and its verdict replaces the straight-up one.
    pub fn resolve(&mut self, pocket: Pocket) -> Outcome {
        let mut won = false;
        let mut payout = 0;

        if !self.bets.number_bets.is_empty() && self.bets.number_bets.contains(pocket.label) {
            payout = number_payout(self.bets.number_bets.len());
            won = true;
        }

        if self.bets.special != SpecialBet::None {
            won = self.bets.special.wins(&pocket);
            if won {
                payout = special_payout();
            }
        }

        if won {
            self.balance += payout;
        } else {
            payout = 0;
        }
        self.bets.clear();

        Outcome {
            won,
            pocket,
            payout,
        }
    }
}
