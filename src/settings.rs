//! Table settings
//!
//! Loaded from an optional JSON file; anything missing takes its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::consts::STARTING_BALANCE;
use crate::sim::ledger::SpecialBet;

/// What the headless runner bets each round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoBet {
    /// Straight-up bets on these labels
    Numbers(Vec<String>),
    /// A single outside bet
    Special(SpecialBet),
}

impl Default for AutoBet {
    fn default() -> Self {
        AutoBet::Special(SpecialBet::Red)
    }
}

/// Table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Credits the player starts with
    pub starting_balance: i64,
    /// Launch RNG seed (random per session when unset)
    pub seed: Option<u64>,
    /// Where round history is kept between sessions
    pub history_path: Option<PathBuf>,
    /// Bet placed each round by the headless runner
    pub auto_bet: AutoBet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            seed: None,
            history_path: None,
            auto_bet: AutoBet::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Can't read settings {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.starting_balance, 100);
        assert!(s.seed.is_none());
        assert_eq!(s.auto_bet, AutoBet::Special(SpecialBet::Red));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.starting_balance, 100);

        let s: Settings =
            serde_json::from_str(r#"{"auto_bet": {"numbers": ["17", "00"]}}"#).unwrap();
        assert_eq!(s.auto_bet, AutoBet::Numbers(vec!["17".into(), "00".into()]));
    }

    #[test]
    fn test_load_falls_back_on_bad_file() {
        let path = std::env::temp_dir()
            .join(format!("roulette_settings_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{not json").unwrap();
        let s = Settings::load(&path);
        assert_eq!(s.starting_balance, 100);
        let _ = std::fs::remove_file(&path);

        let missing = std::env::temp_dir().join("roulette_settings_missing_nope.json");
        assert!(Settings::load(&missing).seed.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let path =
            std::env::temp_dir().join(format!("roulette_settings_{}.json", std::process::id()));
        let settings = Settings {
            starting_balance: 25,
            seed: Some(99),
            history_path: None,
            auto_bet: AutoBet::Special(SpecialBet::Odd),
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        assert_eq!(loaded.starting_balance, 25);
        assert_eq!(loaded.seed, Some(99));
        assert_eq!(loaded.auto_bet, AutoBet::Special(SpecialBet::Odd));
        let _ = std::fs::remove_file(&path);
    }
}
