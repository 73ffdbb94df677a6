//! Data models for picker configuration and values.
//!
//! These types are independent of any rendering surface: a configuration
//! fully describes the wheels, a flat value is what the user entered and a
//! selection is the same value spread over the wheels.

pub mod configuration;
pub mod mode;
pub mod value;

pub use configuration::{Configuration, Separators};
pub use mode::{DigitGrouping, PickerMode, TimePrecision};
pub use value::{digits_only, FlatValue, Selection};
