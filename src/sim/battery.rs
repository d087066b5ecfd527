//! Battery charging, discharge, and remaining-charge gauge calculations.

use crate::sim::types::{BUS_VOLTAGE, HourlySeries, PCT_CEIL, PCT_FLOOR, SLOTS, SimError};

fn check_capacity(capacity_ah: f32) -> Result<(), SimError> {
    if !(capacity_ah > 0.0) {
        return Err(SimError::invalid_input(
            "battery_capacity_ah",
            format!("must be > 0, got {capacity_ah}"),
        ));
    }
    Ok(())
}

/// Computes the battery charging-level series over the daylight cycle.
///
/// Per slot `i`, the charging current is `output(i) / 12` (12 V bus) and the
/// accumulated charge is taken as `current(i) × i` — the reference model's
/// elapsed-index proxy, preserved verbatim for output compatibility. A true
/// coulomb count would accumulate `Σ current(i)·Δt` over prior slots instead.
/// Levels are percentages of `capacity_ah`, clamped to [1, 99].
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if the capacity is not strictly
/// positive.
pub fn charging_series(
    panel_output: &HourlySeries,
    capacity_ah: f32,
) -> Result<HourlySeries, SimError> {
    check_capacity(capacity_ah)?;

    let mut values = [0.0f32; SLOTS];
    for (slot, value) in values.iter_mut().enumerate() {
        let charging_current = panel_output.values[slot] / BUS_VOLTAGE;
        let charge_ah = charging_current * slot as f32;
        *value = (charge_ah / capacity_ah * 100.0).clamp(PCT_FLOOR, PCT_CEIL);
    }
    Ok(HourlySeries::daylight(values))
}

/// Computes the battery discharge-level series over the night cycle.
///
/// The reference dashboard computes the cumulative consumed fraction, inverts
/// it so the plotted "discharge level" reads as *remaining* charge, and later
/// re-inverts a derived charge series for the gauge. The net arithmetic is
/// the single formula used here:
/// `clamp(100 − Σ consumption[0..=i] / (capacity × 12) × 100, 1, 99)`.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if the capacity is not strictly
/// positive.
pub fn discharge_series(
    consumption: &HourlySeries,
    capacity_ah: f32,
) -> Result<HourlySeries, SimError> {
    check_capacity(capacity_ah)?;

    let total_capacity_wh = capacity_ah * BUS_VOLTAGE;
    let mut values = [0.0f32; SLOTS];
    let mut energy_wh = 0.0f32;
    for (slot, value) in values.iter_mut().enumerate() {
        energy_wh += consumption.values[slot];
        let consumed_pct = energy_wh / total_capacity_wh * 100.0;
        *value = (100.0 - consumed_pct).clamp(PCT_FLOOR, PCT_CEIL);
    }
    Ok(HourlySeries::night(values))
}

/// Computes the charge-level series as the complement of the discharge level.
pub fn charge_series(discharge: &HourlySeries) -> HourlySeries {
    let mut values = [0.0f32; SLOTS];
    for (slot, value) in values.iter_mut().enumerate() {
        *value = 100.0 - discharge.values[slot];
    }
    HourlySeries::night(values)
}

/// Returns the gauge value for the selected hour index.
///
/// The reference gauge shows `100 − charge_level[k]`, which collapses to the
/// discharge-level value at `k` (the double inversion cancels); implemented
/// as the direct lookup.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if `time_index` is outside `0..=12`.
pub fn gauge_value(discharge: &HourlySeries, time_index: usize) -> Result<f32, SimError> {
    if time_index >= SLOTS {
        return Err(SimError::invalid_input(
            "time_index",
            format!("must be within 0..=12, got {time_index}"),
        ));
    }
    Ok(discharge.values[time_index])
}
