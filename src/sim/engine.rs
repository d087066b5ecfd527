//! Full recalculation wiring: inputs in, every output series out.

use std::fmt;

use crate::sim::battery;
use crate::sim::consumption::{BrightnessModel, consumption_series};
use crate::sim::illuminance::lux_per_m2;
use crate::sim::panel::{self, soiling_loss_pct, temperature_loss_pct};
use crate::sim::types::{HourlySeries, SLOTS, SimError};

/// One complete set of control values, captured fresh for each recalculation.
///
/// Nothing here survives across invocations; the engine is stateless.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInputs {
    /// Lamp luminous flux in lumens.
    pub light_power_lm: f32,
    /// Distance from the lamp in meters.
    pub distance_m: f32,
    /// Normal cell operating temperature in °C.
    pub cell_temp_c: f32,
    /// Ambient temperature in °C.
    pub ambient_temp_c: f32,
    /// Number of panel cleanings performed.
    pub cleanings: u32,
    /// Panel area in m².
    pub panel_area_m2: f32,
    /// Battery capacity in amp-hours.
    pub battery_capacity_ah: f32,
    /// Rated lamp power draw in watts.
    pub light_power_w: f32,
    /// Brightness schedule for the night cycle.
    pub brightness_model: BrightnessModel,
    /// Selected hour index for the gauge (0..=12).
    pub time_index: usize,
}

/// Every output of one simulation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutputs {
    /// Illuminance at the configured distance (lux/m²).
    pub lux_per_m2: f32,
    /// Panel temperature loss (%); negative values are a gain.
    pub temp_loss_pct: f32,
    /// Panel soiling loss (%).
    pub soiling_loss_pct: f32,
    /// Panel output over the daylight cycle (W).
    pub panel_output_w: HourlySeries,
    /// Battery charging level over the daylight cycle (%).
    pub charging_level_pct: HourlySeries,
    /// Lamp power consumption over the night cycle (W).
    pub consumption_w: HourlySeries,
    /// Battery discharge level (remaining charge) over the night cycle (%).
    pub discharge_level_pct: HourlySeries,
    /// Battery charge level over the night cycle (%).
    pub charge_level_pct: HourlySeries,
    /// Gauge reading at the selected hour index (%).
    pub gauge_pct: f32,
}

/// Runs one complete recalculation over the given inputs.
///
/// Validates every input first; any violation fails the whole invocation
/// without partial output. Dataflow: illuminance is independent; temperature
/// and soiling losses feed the panel output, which feeds battery charging;
/// the consumption model feeds discharge, charge, and the gauge.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] for non-positive distance, area, or
/// capacity, negative power values, or a time index outside `0..=12`.
pub fn run(inputs: &SimulationInputs) -> Result<SimulationOutputs, SimError> {
    if inputs.time_index >= SLOTS {
        return Err(SimError::invalid_input(
            "time_index",
            format!("must be within 0..=12, got {}", inputs.time_index),
        ));
    }

    let lux = lux_per_m2(inputs.light_power_lm, inputs.distance_m)?;
    let panel_output = panel::output_series(
        inputs.ambient_temp_c,
        inputs.cell_temp_c,
        inputs.cleanings,
        inputs.panel_area_m2,
    )?;
    let charging = battery::charging_series(&panel_output, inputs.battery_capacity_ah)?;
    let consumption = consumption_series(inputs.light_power_w, inputs.brightness_model)?;
    let discharge = battery::discharge_series(&consumption, inputs.battery_capacity_ah)?;
    let charge = battery::charge_series(&discharge);
    let gauge = battery::gauge_value(&discharge, inputs.time_index)?;

    Ok(SimulationOutputs {
        lux_per_m2: lux,
        temp_loss_pct: temperature_loss_pct(inputs.ambient_temp_c, inputs.cell_temp_c),
        soiling_loss_pct: soiling_loss_pct(inputs.cleanings),
        panel_output_w: panel_output,
        charging_level_pct: charging,
        consumption_w: consumption,
        discharge_level_pct: discharge,
        charge_level_pct: charge,
        gauge_pct: gauge,
    })
}

impl fmt::Display for SimulationOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lux={:.2}/m² | temp_loss={:.2}%  soiling_loss={:.4}% | \
             peak_panel={:.1} W  gauge={:.1}%",
            self.lux_per_m2,
            self.temp_loss_pct,
            self.soiling_loss_pct,
            self.panel_output_w
                .values
                .iter()
                .copied()
                .fold(f32::MIN, f32::max),
            self.gauge_pct,
        )
    }
}
