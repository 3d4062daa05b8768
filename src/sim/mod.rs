//! Deterministic spin simulation module
//!
//! All table logic lives here. This module must be pure and deterministic:
//! - Tick-driven only (no wall clock)
//! - Randomness only through a `SpinSource`, drawn once per spin
//! - No rendering or platform dependencies

pub mod ledger;
pub mod pocket;
pub mod rng;
pub mod state;
pub mod tick;
pub mod wheel;

pub use ledger::{BetLedger, BetSet, Outcome, SpecialBet};
pub use pocket::{
    POCKET_COUNT, Pocket, PocketColor, SLOT_WIDTH, WHEEL_ORDER, find_pocket, pocket_at,
};
pub use rng::{FixedSpin, SeededSpin, SpinDraw, SpinSource};
pub use state::{Table, TableEvent, TableSnapshot};
pub use tick::{TableInput, run_until_settled, tick};
pub use wheel::{SpinPhase, SpinSimulator, SpinStep, WheelState, slot_index};
