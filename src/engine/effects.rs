//! What a configuration change invalidates.

use serde::Serialize;

use crate::engine::WheelPlan;
use crate::models::{Configuration, PickerMode};

/// Invalidation report returned when a picker is reconfigured.
///
/// The host decides when to re-render; any `true` flag means cached
/// wheel metadata from the old configuration is stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfigChangeEffects {
    /// The number of wheels differs
    pub wheel_count_changed: bool,
    /// At least one wheel's row count differs
    pub row_counts_changed: bool,
    /// Label text for some (wheel, row) differs
    pub labels_changed: bool,
    /// Primary or decimal separator differs
    pub separators_changed: bool,
}

impl ConfigChangeEffects {
    /// Compares two configurations.
    ///
    /// Unvalidated precisions are compared on saturated row counts.
    #[must_use]
    pub fn between(old: &Configuration, new: &Configuration) -> Self {
        let old_plan = WheelPlan::build(old);
        let new_plan = WheelPlan::build(new);

        let wheel_count_changed = old_plan.len() != new_plan.len();
        let row_counts_changed =
            wheel_count_changed || old.mode != new.mode || old_plan.row_counts() != new_plan.row_counts();

        let layout_changed = old_plan
            .wheels()
            .iter()
            .zip(new_plan.wheels())
            .any(|(before, after)| {
                before.kind != after.kind || before.label_width != after.label_width
            });
        let affixes_changed = old.mode == PickerMode::Number
            && (old.prefix != new.prefix || old.suffix != new.suffix);
        let labels_changed = row_counts_changed || layout_changed || affixes_changed;

        Self {
            wheel_count_changed,
            row_counts_changed,
            labels_changed,
            separators_changed: old.resolve_separators() != new.resolve_separators(),
        }
    }

    /// Whether the host must re-query wheel metadata before rendering.
    #[must_use]
    pub const fn requires_reload(&self) -> bool {
        self.wheel_count_changed
            || self.row_counts_changed
            || self.labels_changed
            || self.separators_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DigitGrouping, TimePrecision};

    #[test]
    fn test_identical_configuration_changes_nothing() {
        let config = Configuration::number(DigitGrouping::Thousand);
        let effects = ConfigChangeEffects::between(&config, &config.clone());
        assert_eq!(effects, ConfigChangeEffects::default());
        assert!(!effects.requires_reload());
    }

    #[test]
    fn test_grouping_change_invalidates_wheels() {
        let old = Configuration::number(DigitGrouping::Integer);
        let new = Configuration::number(DigitGrouping::Decimal);
        let effects = ConfigChangeEffects::between(&old, &new);
        assert!(effects.wheel_count_changed);
        assert!(effects.row_counts_changed);
        assert!(effects.labels_changed);
    }

    #[test]
    fn test_same_wheel_count_different_rows() {
        let old = Configuration::number(DigitGrouping::Thousand);
        let new = Configuration::number(DigitGrouping::Myriad);
        let effects = ConfigChangeEffects::between(&old, &new);
        assert!(!effects.wheel_count_changed);
        assert!(effects.row_counts_changed);
    }

    #[test]
    fn test_prefix_change_only_touches_labels() {
        let old = Configuration::number(DigitGrouping::MyriadDecimal);
        let new = old.clone().with_prefix("$");
        let effects = ConfigChangeEffects::between(&old, &new);
        assert!(!effects.row_counts_changed);
        assert!(effects.labels_changed);
        assert!(!effects.separators_changed);
    }

    #[test]
    fn test_separator_change() {
        let old = Configuration::time(TimePrecision::HourMinute);
        let new = old.clone().with_separator("h");
        let effects = ConfigChangeEffects::between(&old, &new);
        assert!(effects.separators_changed);
        assert!(!effects.labels_changed);
    }

    #[test]
    fn test_unvalidated_precision_does_not_overflow() {
        let old = Configuration::number(DigitGrouping::Integer);
        let new = old.clone().with_number_precision(40);
        let effects = ConfigChangeEffects::between(&old, &new);
        assert!(!effects.wheel_count_changed);
        assert!(effects.row_counts_changed);
    }
}
