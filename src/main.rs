//! Roulette Sim entry point
//!
//! Headless runner: plays a number of rounds with the configured auto bet
//! and logs each result. Usage: `roulette-sim [settings.json] [rounds]`

use std::path::PathBuf;

use roulette_sim::sim::{Table, TableEvent, TableInput, run_until_settled, tick};
use roulette_sim::{AutoBet, RoundHistory, Settings};

const DEFAULT_ROUNDS: u32 = 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Roulette Sim starting...");

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();
    let rounds = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);

    let history = settings
        .history_path
        .as_deref()
        .map(RoundHistory::load)
        .unwrap_or_default();
    let mut table = Table::new(&settings).with_history(history);

    for _ in 0..rounds {
        if !place_auto_bet(&mut table, &settings.auto_bet) {
            if table.balance() <= 0 {
                log::info!("Out of credits after round {}", table.round());
            } else {
                log::warn!("Auto bet {:?} placed nothing, stopping", settings.auto_bet);
            }
            break;
        }

        tick(
            &mut table,
            &TableInput {
                spin: true,
                ..Default::default()
            },
        );
        if let Some(TableEvent::Settled(outcome)) = run_until_settled(&mut table) {
            println!(
                "round {:>3}: {:>2} {:<5} {:<4} +{:<3} balance {}",
                table.round(),
                outcome.pocket.label,
                outcome.pocket.color.as_str(),
                if outcome.won { "WIN" } else { "LOSE" },
                outcome.payout,
                table.balance()
            );
        }
    }

    let history = table.history();
    log::info!(
        "Finished: balance {}, {} of last {} rounds won",
        table.balance(),
        history.win_count(),
        history.len()
    );

    if let Some(path) = &settings.history_path {
        if let Err(e) = history.save(path) {
            log::error!("Failed to save history to {}: {e}", path.display());
        }
    }
}

/// Place this round's bets, returning false if nothing could be staked
fn place_auto_bet(table: &mut Table, auto_bet: &AutoBet) -> bool {
    match auto_bet {
        AutoBet::Numbers(labels) => {
            for label in labels {
                tick(
                    table,
                    &TableInput {
                        number_bet: Some(label.clone()),
                        ..Default::default()
                    },
                );
            }
        }
        AutoBet::Special(kind) => {
            tick(
                table,
                &TableInput {
                    special_bet: Some(*kind),
                    ..Default::default()
                },
            );
        }
    }
    !table.current_bets().is_empty()
}
