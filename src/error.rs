//! Error types for the encoding engine.
//!
//! The engine is total over valid configurations; the variants below are
//! contract violations by the caller (indices out of range, selections of
//! the wrong length) or configurations whose precisions cannot be encoded.

use thiserror::Error;

/// Errors returned by configuration validation and the encoding engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A wheel index outside `0..wheel_count`.
    #[error("Wheel {wheel} is out of range (picker has {wheel_count} wheels)")]
    WheelOutOfRange {
        /// Requested wheel
        wheel: usize,
        /// Number of wheels of the configuration
        wheel_count: usize,
    },

    /// A row index outside `0..row_count` for its wheel.
    #[error("Row {row} is out of range for wheel {wheel} ({row_count} rows)")]
    RowOutOfRange {
        /// Wheel the row belongs to
        wheel: usize,
        /// Requested row
        row: u64,
        /// Number of rows on that wheel
        row_count: u64,
    },

    /// A selection whose length differs from the wheel count.
    #[error("Selection has {actual} rows but the picker has {expected} wheels")]
    SelectionLength {
        /// Wheel count of the configuration
        expected: usize,
        /// Rows in the offered selection
        actual: usize,
    },

    /// A number or decimal precision the engine cannot represent.
    #[error("{field} must be between {min} and {max} (got {value})")]
    PrecisionOutOfRange {
        /// Configuration field name
        field: &'static str,
        /// Offered value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// The custom choice source returned no label for a row it counts.
    #[error("Choice source has no label for row {row}")]
    MissingChoiceLabel {
        /// Row without a label
        row: u64,
    },
}

/// Result alias used across the engine.
pub type EncodingResult<T> = Result<T, EncodingError>;
