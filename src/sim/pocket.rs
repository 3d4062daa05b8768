//! Wheel pockets and their colors
//!
//! The wheel is a fixed ring of 38 pockets. Each pocket's position in
//! [`WHEEL_ORDER`] is its angular slot: slot `i` spans
//! `[i * SLOT_WIDTH, (i + 1) * SLOT_WIDTH)` measured from the wheel's zero.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Number of pockets on the wheel
pub const POCKET_COUNT: usize = 38;

/// Angular width of one pocket (radians)
pub const SLOT_WIDTH: f64 = TAU / POCKET_COUNT as f64;

/// Pocket labels in wheel order
pub const WHEEL_ORDER: [&str; POCKET_COUNT] = [
    "0", "28", "9", "26", "30", "11", "7", "20", "32", "17", "5", "22", "34", "15", "3", "24",
    "36", "13", "1", "00", "27", "10", "25", "29", "12", "8", "19", "31", "18", "6", "21", "33",
    "16", "4", "23", "35", "14", "2",
];

/// Pocket color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PocketColor {
    Green,
    Red,
    Black,
}

impl PocketColor {
    /// Color for a label. Zeros are green, odd numbers red, even numbers black.
    ///
    /// This is the table's own parity rule, not the casino red/black layout.
    pub fn for_label(label: &str) -> Self {
        match label_value(label) {
            None => PocketColor::Green,
            Some(n) if n % 2 == 1 => PocketColor::Red,
            Some(_) => PocketColor::Black,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PocketColor::Green => "green",
            PocketColor::Red => "red",
            PocketColor::Black => "black",
        }
    }
}

/// A single wheel pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pocket {
    /// Slot index in wheel order
    pub index: usize,
    pub label: &'static str,
    pub color: PocketColor,
}

impl Pocket {
    /// Numeric value used by odd/even bets: -1 for the zeros
    pub fn value(&self) -> i32 {
        label_value(self.label).unwrap_or(-1)
    }

    pub fn is_zero(&self) -> bool {
        self.color == PocketColor::Green
    }

    /// Angle of the slot centre relative to the wheel's zero
    pub fn center_offset(&self) -> f64 {
        (self.index as f64 + 0.5) * SLOT_WIDTH
    }
}

/// Numeric value of a label, None for the zeros or anything unparseable
fn label_value(label: &str) -> Option<i32> {
    match label {
        "0" | "00" => None,
        _ => label.parse().ok(),
    }
}

/// Pocket at a slot index (wrapped into range)
pub fn pocket_at(index: usize) -> Pocket {
    let index = index % POCKET_COUNT;
    let label = WHEEL_ORDER[index];
    Pocket {
        index,
        label,
        color: PocketColor::for_label(label),
    }
}

/// Look up a pocket by its label
pub fn find_pocket(label: &str) -> Option<Pocket> {
    WHEEL_ORDER
        .iter()
        .position(|&l| l == label)
        .map(pocket_at)
}

/// All pockets in wheel order
pub fn wheel() -> impl Iterator<Item = Pocket> {
    (0..POCKET_COUNT).map(pocket_at)
}
