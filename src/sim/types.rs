//! Core simulation types: the fixed hourly time base, the irradiance table,
//! hourly series, and calculation errors.

use std::fmt;

/// Number of hourly slots in one simulated half-day cycle.
pub const SLOTS: usize = 13;

/// Nominal DC bus voltage assumed for charge and discharge conversions.
pub const BUS_VOLTAGE: f32 = 12.0;

/// Floor applied to percentage series so displays never read 0%.
pub const PCT_FLOOR: f32 = 1.0;

/// Ceiling applied to percentage series so displays never read 100%.
pub const PCT_CEIL: f32 = 99.0;

/// Hour labels for the daylight cycle (panel output, battery charging).
pub const DAY_LABELS: [&str; SLOTS] = [
    "06:00 AM", "07:00 AM", "08:00 AM", "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM",
    "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM", "06:00 PM",
];

/// Hour labels for the night cycle (consumption, discharge, charge).
pub const NIGHT_LABELS: [&str; SLOTS] = [
    "06:00 PM", "07:00 PM", "08:00 PM", "09:00 PM", "10:00 PM", "11:00 PM", "12:00 AM",
    "01:00 AM", "02:00 AM", "03:00 AM", "04:00 AM", "05:00 AM", "06:00 AM",
];

/// Clear-sky irradiance (W/m²) for each daylight slot, peaking at noon.
///
/// This table is a fixed empirical constant, not user data; it always has
/// exactly [`SLOTS`] entries keyed to [`DAY_LABELS`].
pub const IRRADIANCE_W_M2: [f32; SLOTS] = [
    200.0, 400.0, 600.0, 800.0, 1000.0, 1100.0, 1200.0, 1100.0, 1000.0, 800.0, 600.0, 400.0,
    200.0,
];

/// An ordered sequence of 13 hourly values with their hour labels.
///
/// Used for every computed series: panel output, charging level, power
/// consumption, discharge level, and charge level.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    /// Hour labels, either [`DAY_LABELS`] or [`NIGHT_LABELS`].
    pub labels: &'static [&'static str; SLOTS],
    /// One value per hourly slot.
    pub values: [f32; SLOTS],
}

impl HourlySeries {
    /// Creates a daylight-labeled series.
    pub fn daylight(values: [f32; SLOTS]) -> Self {
        Self {
            labels: &DAY_LABELS,
            values,
        }
    }

    /// Creates a night-labeled series.
    pub fn night(values: [f32; SLOTS]) -> Self {
        Self {
            labels: &NIGHT_LABELS,
            values,
        }
    }

    /// Iterates over `(label, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }
}

/// Calculation error with field context and constraint description.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A numeric input violated its documented constraint.
    InvalidInput {
        /// Name of the offending input (e.g., `"distance_m"`).
        field: String,
        /// Human-readable constraint description.
        message: String,
    },
    /// An unrecognized brightness-model selector.
    InvalidModel {
        /// The selector value that failed to parse.
        value: String,
    },
}

impl SimError {
    /// Convenience constructor for [`SimError::InvalidInput`].
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "invalid input: {field} — {message}")
            }
            Self::InvalidModel { value } => {
                write!(f, "unknown brightness model \"{value}\" (expected full, dim_slot1, or dim_slot2)")
            }
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irradiance_table_has_thirteen_entries_peaking_at_noon() {
        assert_eq!(IRRADIANCE_W_M2.len(), SLOTS);
        let noon = SLOTS / 2;
        assert_eq!(DAY_LABELS[noon], "12:00 PM");
        for (i, &irr) in IRRADIANCE_W_M2.iter().enumerate() {
            assert!(irr <= IRRADIANCE_W_M2[noon], "slot {i} exceeds noon peak");
        }
    }

    #[test]
    fn irradiance_table_is_symmetric_around_noon() {
        for i in 0..SLOTS {
            assert_eq!(IRRADIANCE_W_M2[i], IRRADIANCE_W_M2[SLOTS - 1 - i]);
        }
    }

    #[test]
    fn series_iter_pairs_labels_with_values() {
        let mut values = [0.0; SLOTS];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f32;
        }
        let series = HourlySeries::night(values);
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs.len(), SLOTS);
        assert_eq!(pairs[0], ("06:00 PM", 0.0));
        assert_eq!(pairs[12], ("06:00 AM", 12.0));
    }

    #[test]
    fn sim_error_display_includes_field() {
        let err = SimError::invalid_input("distance_m", "must be > 0");
        let msg = format!("{err}");
        assert!(msg.contains("distance_m"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn invalid_model_display_names_the_value() {
        let err = SimError::InvalidModel {
            value: "strobe".to_string(),
        };
        assert!(format!("{err}").contains("strobe"));
    }
}
