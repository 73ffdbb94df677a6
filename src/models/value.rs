//! Flat value and per-wheel selection.

use serde::Serialize;
use std::fmt;

/// A non-negative count of sub-units (milliseconds, cents, ...).
///
/// Externally this is a digit string. Parsing is lenient: everything
/// except ASCII digits is dropped and text that still does not parse
/// (empty, or too long for `u128`) reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FlatValue(u128);

impl FlatValue {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw sub-unit count.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// The raw sub-unit count.
    #[must_use]
    pub const fn get(self) -> u128 {
        self.0
    }

    /// Parses keyboard text, keeping digits only.
    ///
    /// # Examples
    ///
    /// ```
    /// use inline_picker::models::FlatValue;
    ///
    /// assert_eq!(FlatValue::from_text("12:30").get(), 1230);
    /// assert_eq!(FlatValue::from_text("abc").get(), 0);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        digits_only(text).parse().map(Self).unwrap_or_default()
    }
}

impl From<u64> for FlatValue {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl From<u128> for FlatValue {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for FlatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keeps the ASCII digits of `text`.
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// One selected row per wheel, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Selection {
    rows: Vec<u64>,
}

impl Selection {
    /// Builds a selection from explicit rows.
    #[must_use]
    pub fn new(rows: Vec<u64>) -> Self {
        Self { rows }
    }

    /// Row 0 on each of `wheel_count` wheels.
    #[must_use]
    pub fn zeroed(wheel_count: usize) -> Self {
        Self {
            rows: vec![0; wheel_count],
        }
    }

    /// Selected rows.
    #[must_use]
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }

    /// Selected row of `wheel`, if the wheel exists.
    #[must_use]
    pub fn row(&self, wheel: usize) -> Option<u64> {
        self.rows.get(wheel).copied()
    }

    /// Number of wheels covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the selection covers no wheel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the row of an existing wheel. Returns `false` when the wheel
    /// does not exist.
    pub fn set_row(&mut self, wheel: usize, row: u64) -> bool {
        match self.rows.get_mut(wheel) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }
}

impl From<Vec<u64>> for Selection {
    fn from(rows: Vec<u64>) -> Self {
        Self::new(rows)
    }
}
