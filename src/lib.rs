//! Inline Picker Library
//!
//! Odometer-style value entry: a value is spread over a row of wheels
//! (hours/minutes/seconds, digit groups of a number, or a list of custom
//! choices) and read back from them. The encoding engine is independent of
//! any UI; the `tui` module renders it in a terminal.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod picker;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use engine::{ConfigChangeEffects, Decomposition, Encoder};
pub use error::{EncodingError, EncodingResult};
pub use models::{Configuration, DigitGrouping, FlatValue, PickerMode, Selection, TimePrecision};
pub use picker::{InlinePicker, PickerEvent};
