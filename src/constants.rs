//! Application-wide constants.
//!
//! This module defines the application name, the configuration defaults
//! shared by the engine, and the bounds enforced on numeric precisions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Inline Picker";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "InlinePicker";

/// Default digit count of the integer part in Number mode.
pub const DEFAULT_NUMBER_PRECISION: u32 = 6;

/// Default digit count of the fractional wheel in Number mode.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 2;

/// Smallest accepted number/decimal precision.
pub const MIN_PRECISION: u32 = 1;

/// Largest accepted number/decimal precision.
///
/// `10^18` still fits a `u64` row count and the widest power the engine
/// builds (`10^(18 + 18)`) fits a `u128`.
pub const MAX_PRECISION: u32 = 18;

/// Digits per time wheel (hours, minutes, seconds).
pub const TIME_GROUPING_SIZE: u32 = 2;

/// Digits of the millisecond wheel.
pub const MILLISECOND_DIGITS: u32 = 3;

/// Milliseconds represented by row 1 of a Per500 wheel.
pub const HALF_SECOND_MILLIS: u64 = 500;

/// Separator between time wheels when none is configured.
pub const DEFAULT_TIME_SEPARATOR: &str = ":";

/// Separator between integer groups in Number mode when none is configured.
pub const DEFAULT_NUMBER_SEPARATOR: &str = ",";

/// Separator before the fractional wheel in Number mode when none is configured.
pub const DEFAULT_DECIMAL_SEPARATOR: &str = ".";
