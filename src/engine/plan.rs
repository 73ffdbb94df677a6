//! Per-wheel layout derived from a configuration.
//!
//! Every wheel owns a slice of the flat value's decimal digits: wheel `c`
//! reads `(value / power) % radix`. Integer and time wheels take
//! `grouping_size` digits each, an optional fractional wheel takes the
//! lowest `fraction_digits` digits.

use crate::constants::{HALF_SECOND_MILLIS, MILLISECOND_DIGITS};
use crate::models::{Configuration, PickerMode};

/// What a wheel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelKind {
    /// Hours, minutes, seconds or an integer digit group
    Group,
    /// Three-digit milliseconds
    Milliseconds,
    /// Millisecond toggle between 0 and 500
    HalfSecond,
    /// Fractional digits of a number
    Fraction,
    /// Caller-supplied choice strings
    Choice,
}

/// Layout of a single wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSpec {
    /// What the wheel displays
    pub kind: WheelKind,
    /// Row count, `None` when the choice source decides
    pub rows: Option<u64>,
    /// Place value of the wheel's lowest digit
    pub power: u128,
    /// Span of the wheel's digits (`10^digits`)
    pub radix: u128,
    /// Zero-padding width of labels
    pub label_width: usize,
}

impl WheelSpec {
    /// Row selected for `value`, saturated to the wheel's range.
    pub(crate) fn row_for(&self, value: u128) -> u64 {
        let digits = (value / self.power) % self.radix;
        let Some(rows) = self.rows else {
            return 0;
        };
        let row = match self.kind {
            WheelKind::HalfSecond => digits / u128::from(HALF_SECOND_MILLIS),
            _ => digits,
        };
        let last = u128::from(rows.saturating_sub(1));
        u64::try_from(row.min(last)).unwrap_or(0)
    }

    /// Sub-units contributed by `row`.
    pub(crate) fn value_of(&self, row: u64) -> u128 {
        let digits = match self.kind {
            WheelKind::HalfSecond => u128::from(row) * u128::from(HALF_SECOND_MILLIS),
            _ => u128::from(row),
        };
        digits * self.power
    }

    /// Zero-padded text of `row`, without prefix or suffix.
    pub(crate) fn format_row(&self, row: u64) -> String {
        let shown = match self.kind {
            WheelKind::HalfSecond if row != 0 => HALF_SECOND_MILLIS,
            WheelKind::HalfSecond => 0,
            _ => row,
        };
        format!("{:0width$}", shown, width = self.label_width)
    }
}

/// Wheel layout of a whole configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelPlan {
    wheels: Vec<WheelSpec>,
}

impl WheelPlan {
    /// Computes the layout for `config`.
    ///
    /// Precisions outside [`Configuration::validate`]'s bounds saturate
    /// row counts and powers at the integer maximum.
    #[must_use]
    pub fn build(config: &Configuration) -> Self {
        if config.mode == PickerMode::Custom {
            return Self {
                wheels: vec![WheelSpec {
                    kind: WheelKind::Choice,
                    rows: None,
                    power: 1,
                    radix: 1,
                    label_width: 0,
                }],
            };
        }

        let count = config.wheel_count();
        let grouping = config.grouping_size();
        let fraction = config.fraction_digits();
        let has_fraction = config.has_fraction();

        let wheels = (0..count)
            .map(|wheel| {
                let last = wheel + 1 == count;
                let (exponent, next_exponent) = if has_fraction {
                    if last {
                        (0, fraction)
                    } else {
                        let groups_below = (count - wheel - 2) as u32;
                        (
                            groups_below.saturating_mul(grouping).saturating_add(fraction),
                            (groups_below + 1)
                                .saturating_mul(grouping)
                                .saturating_add(fraction),
                        )
                    }
                } else {
                    let groups_below = (count - wheel - 1) as u32;
                    (
                        groups_below.saturating_mul(grouping),
                        (groups_below + 1).saturating_mul(grouping),
                    )
                };

                let (kind, rows, label_width) = if config.mode.is_temporal() {
                    temporal_wheel(config, wheel, last)
                } else {
                    number_wheel(config, wheel, last)
                };

                WheelSpec {
                    kind,
                    rows: Some(rows),
                    power: pow10_u128(exponent),
                    radix: pow10_u128(next_exponent.saturating_sub(exponent)),
                    label_width,
                }
            })
            .collect();

        Self { wheels }
    }

    /// All wheels, left to right.
    #[must_use]
    pub fn wheels(&self) -> &[WheelSpec] {
        &self.wheels
    }

    /// Layout of `wheel`.
    #[must_use]
    pub fn wheel(&self, wheel: usize) -> Option<&WheelSpec> {
        self.wheels.get(wheel)
    }

    /// Number of wheels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wheels.len()
    }

    /// Always `false`; every configuration has at least one wheel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wheels.is_empty()
    }

    /// Row counts known from the configuration alone.
    #[must_use]
    pub fn row_counts(&self) -> Vec<Option<u64>> {
        self.wheels.iter().map(|spec| spec.rows).collect()
    }
}

fn temporal_wheel(config: &Configuration, wheel: usize, last: bool) -> (WheelKind, u64, usize) {
    let precision = config.time_precision;
    let rows = precision.wheel_bases()[wheel];
    let kind = if last && precision.has_milliseconds() {
        if precision.is_per_500() {
            WheelKind::HalfSecond
        } else {
            WheelKind::Milliseconds
        }
    } else {
        WheelKind::Group
    };
    let width = match kind {
        WheelKind::Milliseconds | WheelKind::HalfSecond => MILLISECOND_DIGITS as usize,
        _ if wheel == 0 => 1,
        _ => 2,
    };
    (kind, rows, width)
}

fn number_wheel(config: &Configuration, wheel: usize, last: bool) -> (WheelKind, u64, usize) {
    let grouping = config.digit_grouping;
    if last && grouping.has_fraction() {
        let digits = config.decimal_precision;
        return (WheelKind::Fraction, pow10_u64(digits), digits as usize);
    }
    let rows = pow10_u64(grouping.grouping_size(config.number_precision));
    let width = if wheel == 0 {
        0
    } else {
        grouping.label_width() as usize
    };
    (WheelKind::Group, rows, width)
}

fn pow10_u64(exponent: u32) -> u64 {
    10u64.checked_pow(exponent).unwrap_or(u64::MAX)
}

fn pow10_u128(exponent: u32) -> u128 {
    10u128.checked_pow(exponent).unwrap_or(u128::MAX)
}
