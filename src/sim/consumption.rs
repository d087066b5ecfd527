//! Street-light power consumption under the three brightness schedules.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::sim::types::{HourlySeries, SLOTS, SimError};

/// A named schedule describing how the lamp's power draw varies overnight.
///
/// A closed set of variants; selector strings from config files or the CLI
/// go through [`FromStr`], which rejects anything unrecognized with
/// [`SimError::InvalidModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessModel {
    /// Rated power for the whole night.
    Full,
    /// Rated power for the first 6 slots, half power for the remaining 7.
    DimSlot1,
    /// Half power for the first 7 slots, rated power for the remaining 6.
    DimSlot2,
}

impl BrightnessModel {
    /// All selector strings, in the order the reference dashboard lists them.
    pub const NAMES: [&'static str; 3] = ["full", "dim_slot1", "dim_slot2"];

    /// Returns the canonical selector string for this model.
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::DimSlot1 => "dim_slot1",
            Self::DimSlot2 => "dim_slot2",
        }
    }

    /// Returns the next model in cycle order (for UI toggling).
    pub fn next(self) -> Self {
        match self {
            Self::Full => Self::DimSlot1,
            Self::DimSlot1 => Self::DimSlot2,
            Self::DimSlot2 => Self::Full,
        }
    }
}

impl FromStr for BrightnessModel {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "dim_slot1" => Ok(Self::DimSlot1),
            "dim_slot2" => Ok(Self::DimSlot2),
            other => Err(SimError::InvalidModel {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BrightnessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the hourly power consumption series for the lamp.
///
/// # Arguments
///
/// * `light_power_w` - Rated power draw of the lamp in watts (>= 0)
/// * `model` - Brightness schedule to apply
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if the rated draw is negative.
pub fn consumption_series(
    light_power_w: f32,
    model: BrightnessModel,
) -> Result<HourlySeries, SimError> {
    if !(light_power_w >= 0.0) {
        return Err(SimError::invalid_input(
            "light_power_w",
            format!("must be >= 0, got {light_power_w}"),
        ));
    }

    let mut values = [0.0f32; SLOTS];
    for (slot, value) in values.iter_mut().enumerate() {
        *value = match model {
            BrightnessModel::Full => light_power_w,
            // Full brightness in the early evening, dimmed after midnight
            BrightnessModel::DimSlot1 => {
                if slot <= 5 {
                    light_power_w
                } else {
                    light_power_w * 0.5
                }
            }
            // Dimmed in the early evening, full brightness before dawn
            BrightnessModel::DimSlot2 => {
                if slot <= 6 {
                    light_power_w * 0.5
                } else {
                    light_power_w
                }
            }
        };
    }
    Ok(HourlySeries::night(values))
}
