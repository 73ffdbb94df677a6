//! Closed enumerations selecting how a flat value maps onto wheels.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of value the picker edits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PickerMode {
    /// Clock time (hours/minutes/seconds/milliseconds)
    #[default]
    Time,
    /// Elapsed duration, encoded exactly like `Time`
    Duration,
    /// Decimal number with configurable digit grouping
    Number,
    /// Single wheel of caller-supplied strings
    Custom,
}

impl PickerMode {
    /// All modes in display order.
    pub const ALL: [Self; 4] = [Self::Time, Self::Duration, Self::Number, Self::Custom];

    /// Whether the mode uses the time wheel tables.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Time | Self::Duration)
    }

    /// Whether typed text is restricted to digits.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Custom)
    }

    /// Stable lowercase name (matches the serialized form).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Number => "number",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wheel layout for `Time` and `Duration` modes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TimePrecision {
    /// `H:MM`
    #[default]
    HourMinute,
    /// `H:MM:SS`
    HourMinuteSecond,
    /// `H:MM:SS:mmm`, milliseconds restricted to 0 or 500
    #[serde(rename = "hour-minute-second-millisecond-per500")]
    #[value(name = "hour-minute-second-millisecond-per500")]
    HourMinuteSecondMillisecondPer500,
    /// `H:MM:SS:mmm`
    HourMinuteSecondMillisecond,
    /// `M:SS`
    MinuteSecond,
    /// `M:SS:mmm`, milliseconds restricted to 0 or 500
    #[serde(rename = "minute-second-millisecond-per500")]
    #[value(name = "minute-second-millisecond-per500")]
    MinuteSecondMillisecondPer500,
    /// `M:SS:mmm`
    MinuteSecondMillisecond,
}

impl TimePrecision {
    /// All precisions in declaration order.
    pub const ALL: [Self; 7] = [
        Self::HourMinute,
        Self::HourMinuteSecond,
        Self::HourMinuteSecondMillisecondPer500,
        Self::HourMinuteSecondMillisecond,
        Self::MinuteSecond,
        Self::MinuteSecondMillisecondPer500,
        Self::MinuteSecondMillisecond,
    ];

    /// Row count of every wheel, left to right.
    ///
    /// A Per500 millisecond wheel has two rows (0 and 500).
    #[must_use]
    pub const fn wheel_bases(&self) -> &'static [u64] {
        match self {
            Self::HourMinute => &[24, 60],
            Self::HourMinuteSecond => &[24, 60, 60],
            Self::HourMinuteSecondMillisecondPer500 => &[24, 60, 60, 2],
            Self::HourMinuteSecondMillisecond => &[24, 60, 60, 1000],
            Self::MinuteSecond => &[60, 60],
            Self::MinuteSecondMillisecondPer500 => &[60, 60, 2],
            Self::MinuteSecondMillisecond => &[60, 60, 1000],
        }
    }

    /// Number of wheels.
    #[must_use]
    pub const fn wheel_count(&self) -> usize {
        self.wheel_bases().len()
    }

    /// Whether the last wheel holds milliseconds.
    #[must_use]
    pub const fn has_milliseconds(&self) -> bool {
        match self {
            Self::HourMinute | Self::HourMinuteSecond | Self::MinuteSecond => false,
            Self::HourMinuteSecondMillisecondPer500
            | Self::HourMinuteSecondMillisecond
            | Self::MinuteSecondMillisecondPer500
            | Self::MinuteSecondMillisecond => true,
        }
    }

    /// Whether the millisecond wheel is the 0/500 toggle.
    #[must_use]
    pub const fn is_per_500(&self) -> bool {
        matches!(
            self,
            Self::HourMinuteSecondMillisecondPer500 | Self::MinuteSecondMillisecondPer500
        )
    }
}

/// Wheel layout for `Number` mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DigitGrouping {
    /// `9999`
    #[default]
    Integer,
    /// `9999.99`
    Decimal,
    /// `999,999,999`
    Thousand,
    /// `999,999.99`
    ThousandDecimal,
    /// `9999,9999,9999`
    Myriad,
    /// `9999,9999.99`
    MyriadDecimal,
}

impl DigitGrouping {
    /// All groupings in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Integer,
        Self::Decimal,
        Self::Thousand,
        Self::ThousandDecimal,
        Self::Myriad,
        Self::MyriadDecimal,
    ];

    /// Number of wheels, fraction wheel included.
    #[must_use]
    pub const fn wheel_count(&self) -> usize {
        match self {
            Self::Integer => 1,
            Self::Decimal => 2,
            Self::Thousand | Self::ThousandDecimal | Self::Myriad | Self::MyriadDecimal => 3,
        }
    }

    /// Whether the last wheel is the fractional part.
    #[must_use]
    pub const fn has_fraction(&self) -> bool {
        match self {
            Self::Integer | Self::Thousand | Self::Myriad => false,
            Self::Decimal | Self::ThousandDecimal | Self::MyriadDecimal => true,
        }
    }

    /// Digits carried by one integer wheel.
    #[must_use]
    pub const fn grouping_size(&self, number_precision: u32) -> u32 {
        match self {
            Self::Integer | Self::Decimal => number_precision,
            Self::Thousand | Self::ThousandDecimal => 3,
            Self::Myriad | Self::MyriadDecimal => 4,
        }
    }

    /// Zero-padding width of an inner integer wheel label.
    #[must_use]
    pub const fn label_width(&self) -> u32 {
        match self {
            Self::Integer | Self::Decimal => 1,
            Self::Thousand | Self::ThousandDecimal => 3,
            Self::Myriad | Self::MyriadDecimal => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_precision_wheel_counts() {
        let counts: Vec<usize> = TimePrecision::ALL.iter().map(TimePrecision::wheel_count).collect();
        assert_eq!(counts, vec![2, 3, 4, 4, 2, 3, 3]);
    }

    #[test]
    fn test_per_500_implies_milliseconds() {
        for precision in TimePrecision::ALL {
            if precision.is_per_500() {
                assert!(precision.has_milliseconds());
                assert_eq!(precision.wheel_bases().last(), Some(&2));
            }
        }
    }

    #[test]
    fn test_digit_grouping_wheel_counts() {
        let counts: Vec<usize> = DigitGrouping::ALL.iter().map(DigitGrouping::wheel_count).collect();
        assert_eq!(counts, vec![1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_grouping_size_follows_precision_only_for_plain_groupings() {
        assert_eq!(DigitGrouping::Integer.grouping_size(7), 7);
        assert_eq!(DigitGrouping::Decimal.grouping_size(5), 5);
        assert_eq!(DigitGrouping::ThousandDecimal.grouping_size(7), 3);
        assert_eq!(DigitGrouping::Myriad.grouping_size(7), 4);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TimePrecision::MinuteSecondMillisecondPer500).unwrap();
        assert_eq!(json, "\"minute-second-millisecond-per500\"");

        let grouping: DigitGrouping = serde_json::from_str("\"myriad-decimal\"").unwrap();
        assert_eq!(grouping, DigitGrouping::MyriadDecimal);
    }
}
