//! Solar panel output with temperature and soiling derating.

use crate::sim::types::{HourlySeries, IRRADIANCE_W_M2, SLOTS, SimError};

/// Linear temperature derating coefficient (% per °C of deviation).
const TEMP_COEFF_PCT_PER_C: f32 = 0.41;

/// Soiling penalty (%) on a panel that has never been cleaned.
const INITIAL_SOILING_PCT: f32 = 5.0;

/// Fraction of the remaining soiling removed by each cleaning.
const CLEANING_FACTOR: f32 = 0.9;

/// Computes the temperature loss percentage for the panel.
///
/// Linear in the deviation of ambient from cell operating temperature:
/// `(Ta − Tc) × 0.41`. Negative values are a gain, not a loss — a cell
/// running hotter than ambient derates, a cooler one over-performs.
pub fn temperature_loss_pct(ambient_temp_c: f32, cell_temp_c: f32) -> f32 {
    (ambient_temp_c - cell_temp_c) * TEMP_COEFF_PCT_PER_C
}

/// Computes the soiling loss percentage after a number of cleanings.
///
/// The initial 5% dust penalty decays exponentially with each cleaning at
/// a 0.9 effectiveness factor, approaching zero as cleanings grow.
pub fn soiling_loss_pct(cleanings: u32) -> f32 {
    INITIAL_SOILING_PCT * (1.0 - CLEANING_FACTOR).powi(cleanings as i32)
}

/// Computes the panel output series over the daylight cycle.
///
/// Each slot scales the clear-sky irradiance by the combined derating and
/// the panel area: `irradiance(t) × (100 − temp_loss − soiling_loss) / 100 × A`.
/// The output is not clamped; a large area can exceed any nominal rating.
///
/// # Arguments
///
/// * `ambient_temp_c` - Ambient temperature in °C
/// * `cell_temp_c` - Normal cell operating temperature in °C
/// * `cleanings` - Number of panel cleanings performed
/// * `area_m2` - Panel area in m² (> 0)
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if the panel area is not strictly
/// positive.
pub fn output_series(
    ambient_temp_c: f32,
    cell_temp_c: f32,
    cleanings: u32,
    area_m2: f32,
) -> Result<HourlySeries, SimError> {
    if !(area_m2 > 0.0) {
        return Err(SimError::invalid_input(
            "area_m2",
            format!("must be > 0, got {area_m2}"),
        ));
    }

    let temp_loss = temperature_loss_pct(ambient_temp_c, cell_temp_c);
    let soiling_loss = soiling_loss_pct(cleanings);
    let derate = (100.0 - temp_loss - soiling_loss) / 100.0;

    let mut values = [0.0f32; SLOTS];
    for (slot, value) in values.iter_mut().enumerate() {
        *value = IRRADIANCE_W_M2[slot] * derate * area_m2;
    }
    Ok(HourlySeries::daylight(values))
}
