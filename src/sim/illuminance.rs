//! Lamp illuminance from the inverse-square law.

use std::f32::consts::PI;

use crate::sim::types::SimError;

/// Computes illuminance per unit area at a distance from a point source.
///
/// Applies inverse-square attenuation: `lux = P / (4·π·d²)` for light power
/// `P` in lumens and distance `d` in meters.
///
/// # Arguments
///
/// * `light_power_lm` - Luminous flux of the lamp in lumens (>= 0)
/// * `distance_m` - Distance from the lamp in meters (> 0)
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if the distance is not strictly
/// positive or the light power is negative.
pub fn lux_per_m2(light_power_lm: f32, distance_m: f32) -> Result<f32, SimError> {
    if !(distance_m > 0.0) {
        return Err(SimError::invalid_input(
            "distance_m",
            format!("must be > 0, got {distance_m}"),
        ));
    }
    if light_power_lm < 0.0 {
        return Err(SimError::invalid_input(
            "light_power_lm",
            format!("must be >= 0, got {light_power_lm}"),
        ));
    }
    Ok(light_power_lm / (4.0 * PI * distance_m * distance_m))
}
