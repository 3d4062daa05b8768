//! Per-tick table update
//!
//! The frame scheduler gathers input into a [`TableInput`] and calls
//! [`tick`] once per engine tick.

use super::ledger::SpecialBet;
use super::state::{Table, TableEvent};
use super::wheel::SpinStep;
use crate::history::RoundRecord;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TableInput {
    /// Straight-up bet on a pocket label
    pub number_bet: Option<String>,
    /// Outside bet
    pub special_bet: Option<SpecialBet>,
    /// Spin request (button press)
    pub spin: bool,
}

/// Advance the table by one tick, returning what happened
pub fn tick(table: &mut Table, input: &TableInput) -> Vec<TableEvent> {
    let mut events = Vec::new();

    // Bets are only taken between spins and while credits remain
    if !table.wheel.is_spinning() && table.ledger.balance() > 0 {
        if let Some(label) = &input.number_bet {
            if table.ledger.place_number_bet(label) {
                events.push(TableEvent::BetPlaced {
                    total_stake: table.ledger.bets().total_stake(),
                });
            } else {
                log::debug!("Number bet on {label} ignored");
            }
        }
        if let Some(kind) = input.special_bet {
            if table.ledger.place_special_bet(kind) {
                events.push(TableEvent::BetPlaced {
                    total_stake: table.ledger.bets().total_stake(),
                });
            } else {
                log::debug!("Special bet {} ignored", kind.as_str());
            }
        }
    } else if input.number_bet.is_some() || input.special_bet.is_some() {
        log::debug!("Bet ignored: table closed");
    }

    if input.spin {
        if table.wheel.start(table.ledger.bets(), table.source.as_mut()) {
            events.push(TableEvent::SpinStarted {
                round: table.round + 1,
            });
        } else {
            log::debug!("Spin request ignored");
        }
    }

    if let SpinStep::Settled(pocket) = table.wheel.advance() {
        let outcome = table.ledger.resolve(pocket);
        table.round += 1;
        table.last_outcome = Some(outcome);
        table.history.record(RoundRecord::new(
            table.round,
            &outcome,
            table.ledger.balance(),
        ));

        if outcome.won {
            log::info!(
                "Round {}: WIN on {} (+{}), balance {}",
                table.round,
                pocket.label,
                outcome.payout,
                table.ledger.balance()
            );
        } else {
            log::info!(
                "Round {}: LOSE on {}, balance {}",
                table.round,
                pocket.label,
                table.ledger.balance()
            );
        }
        events.push(TableEvent::Settled(outcome));
    }

    events
}

/// Tick until the current spin settles (headless play, tests)
///
/// Returns `None` if no spin is in progress.
pub fn run_until_settled(table: &mut Table) -> Option<TableEvent> {
    let idle = TableInput::default();
    while table.wheel.is_spinning() {
        if let Some(settled) = tick(table, &idle)
            .into_iter()
            .find(|e| matches!(e, TableEvent::Settled(_)))
        {
            return Some(settled);
        }
    }
    None
}
