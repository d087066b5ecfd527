//! Dashboard application state and recalculation wiring.

use crate::config::ScenarioConfig;
use crate::sim::engine::{self, SimulationInputs, SimulationOutputs};
use crate::sim::types::SLOTS;

/// The adjustable controls, in panel order.
///
/// Each entry mirrors one slider of the reference dashboard, with the same
/// step size and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Lamp luminous flux (0–2000 lm, step 100).
    LightPowerLm,
    /// Distance from the lamp (1–20 m, step 1).
    DistanceM,
    /// Normal cell operating temperature (−10–40 °C, step 2).
    CellTempC,
    /// Ambient temperature (−10–40 °C, step 2).
    AmbientTempC,
    /// Number of cleanings (0–10, step 1).
    Cleanings,
    /// Panel area (1–10 m², step 1).
    PanelAreaM2,
    /// Battery capacity (1–100 Ah, step 1).
    BatteryCapacityAh,
    /// Rated lamp draw (0–100 W, step 1).
    LightPowerW,
    /// Gauge hour index (0–12, step 1).
    TimeIndex,
}

/// All controls in display order.
pub const CONTROLS: [Control; 9] = [
    Control::LightPowerLm,
    Control::DistanceM,
    Control::CellTempC,
    Control::AmbientTempC,
    Control::Cleanings,
    Control::PanelAreaM2,
    Control::BatteryCapacityAh,
    Control::LightPowerW,
    Control::TimeIndex,
];

impl Control {
    /// Short label for the control panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::LightPowerLm => "Light Power (lm)",
            Self::DistanceM => "Distance (m)",
            Self::CellTempC => "Cell Temp (°C)",
            Self::AmbientTempC => "Ambient Temp (°C)",
            Self::Cleanings => "Cleanings",
            Self::PanelAreaM2 => "Panel Area (m²)",
            Self::BatteryCapacityAh => "Battery (Ah)",
            Self::LightPowerW => "Light Draw (W)",
            Self::TimeIndex => "Gauge Hour",
        }
    }
}

/// Dashboard application state.
pub struct App {
    /// Live control values, recomputed into `outputs` on every change.
    pub inputs: SimulationInputs,
    /// Outputs of the latest recalculation.
    pub outputs: SimulationOutputs,
    /// Index into [`CONTROLS`] of the highlighted control.
    pub selected: usize,
    /// Name of the active preset, if any.
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app from a validated scenario configuration.
    ///
    /// A configuration that somehow fails to simulate falls back to the
    /// baseline preset, mirroring the CLI's validation guarantees.
    pub fn new(config: &ScenarioConfig) -> Self {
        let mut inputs = config.to_inputs();
        let outputs = match engine::run(&inputs) {
            Ok(out) => out,
            Err(_) => {
                inputs = ScenarioConfig::baseline().to_inputs();
                engine::run(&inputs).expect("baseline constants simulate")
            }
        };
        Self {
            inputs,
            outputs,
            selected: 0,
            preset_name: "custom".to_string(),
            quit: false,
        }
    }

    /// Moves the control highlight down, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CONTROLS.len();
    }

    /// Moves the control highlight up, wrapping.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + CONTROLS.len() - 1) % CONTROLS.len();
    }

    /// Steps the highlighted control by one slider step in either direction.
    pub fn adjust(&mut self, up: bool) {
        let sign: f32 = if up { 1.0 } else { -1.0 };
        match CONTROLS[self.selected] {
            Control::LightPowerLm => {
                self.inputs.light_power_lm =
                    (self.inputs.light_power_lm + sign * 100.0).clamp(0.0, 2000.0);
            }
            Control::DistanceM => {
                self.inputs.distance_m = (self.inputs.distance_m + sign).clamp(1.0, 20.0);
            }
            Control::CellTempC => {
                self.inputs.cell_temp_c = (self.inputs.cell_temp_c + sign * 2.0).clamp(-10.0, 40.0);
            }
            Control::AmbientTempC => {
                self.inputs.ambient_temp_c =
                    (self.inputs.ambient_temp_c + sign * 2.0).clamp(-10.0, 40.0);
            }
            Control::Cleanings => {
                self.inputs.cleanings = if up {
                    (self.inputs.cleanings + 1).min(10)
                } else {
                    self.inputs.cleanings.saturating_sub(1)
                };
            }
            Control::PanelAreaM2 => {
                self.inputs.panel_area_m2 = (self.inputs.panel_area_m2 + sign).clamp(1.0, 10.0);
            }
            Control::BatteryCapacityAh => {
                self.inputs.battery_capacity_ah =
                    (self.inputs.battery_capacity_ah + sign).clamp(1.0, 100.0);
            }
            Control::LightPowerW => {
                self.inputs.light_power_w = (self.inputs.light_power_w + sign).clamp(0.0, 100.0);
            }
            Control::TimeIndex => {
                self.inputs.time_index = if up {
                    (self.inputs.time_index + 1).min(SLOTS - 1)
                } else {
                    self.inputs.time_index.saturating_sub(1)
                };
            }
        }
        self.recompute();
    }

    /// Cycles to the next brightness model.
    pub fn cycle_model(&mut self) {
        self.inputs.brightness_model = self.inputs.brightness_model.next();
        self.recompute();
    }

    /// Replaces the state with a named preset.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(config) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.inputs = config.to_inputs();
        self.preset_name = name.to_string();
        self.recompute();
    }

    /// Current value of the highlighted control, formatted for display.
    pub fn control_value(&self, control: Control) -> String {
        match control {
            Control::LightPowerLm => format!("{:.0}", self.inputs.light_power_lm),
            Control::DistanceM => format!("{:.0}", self.inputs.distance_m),
            Control::CellTempC => format!("{:.0}", self.inputs.cell_temp_c),
            Control::AmbientTempC => format!("{:.0}", self.inputs.ambient_temp_c),
            Control::Cleanings => format!("{}", self.inputs.cleanings),
            Control::PanelAreaM2 => format!("{:.0}", self.inputs.panel_area_m2),
            Control::BatteryCapacityAh => format!("{:.0}", self.inputs.battery_capacity_ah),
            Control::LightPowerW => format!("{:.0}", self.inputs.light_power_w),
            Control::TimeIndex => format!("{}", self.inputs.time_index),
        }
    }

    /// Current brightness model selector string.
    pub fn model_name(&self) -> &'static str {
        self.inputs.brightness_model.name()
    }

    fn recompute(&mut self) {
        // Controls are clamped to valid ranges, so a run cannot fail; keep
        // the previous outputs if it somehow does.
        if let Ok(out) = engine::run(&self.inputs) {
            self.outputs = out;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::consumption::BrightnessModel;

    fn app() -> App {
        App::new(&ScenarioConfig::baseline())
    }

    #[test]
    fn app_starts_with_baseline_outputs() {
        let app = app();
        assert!((app.outputs.lux_per_m2 - 0.7958).abs() < 1e-3);
        assert_eq!(app.selected, 0);
        assert!(!app.quit);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = app();
        app.select_prev();
        assert_eq!(app.selected, CONTROLS.len() - 1);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn adjust_steps_by_the_documented_slider_step() {
        let mut app = app();
        // selected = LightPowerLm, step 100
        app.adjust(true);
        assert_eq!(app.inputs.light_power_lm, 1100.0);
        app.adjust(false);
        app.adjust(false);
        assert_eq!(app.inputs.light_power_lm, 900.0);
    }

    #[test]
    fn adjust_respects_bounds() {
        let mut app = app();
        for _ in 0..50 {
            app.adjust(true);
        }
        assert_eq!(app.inputs.light_power_lm, 2000.0);
        for _ in 0..50 {
            app.adjust(false);
        }
        assert_eq!(app.inputs.light_power_lm, 0.0);
    }

    #[test]
    fn adjust_recomputes_outputs() {
        let mut app = app();
        let before = app.outputs.lux_per_m2;
        app.adjust(true); // raise light power
        assert!(app.outputs.lux_per_m2 > before);
    }

    #[test]
    fn cycle_model_updates_consumption() {
        let mut app = app();
        app.cycle_model();
        assert_eq!(app.inputs.brightness_model, BrightnessModel::DimSlot1);
        // dimmed tail: half power in the late slots
        assert_eq!(app.outputs.consumption_w.values[12], 25.0);
    }

    #[test]
    fn switch_preset_replaces_inputs() {
        let mut app = app();
        app.switch_preset("large_array");
        assert_eq!(app.inputs.panel_area_m2, 10.0);
        assert_eq!(app.preset_name, "large_array");
        // unknown preset is a no-op
        app.switch_preset("nope");
        assert_eq!(app.preset_name, "large_array");
    }

    #[test]
    fn time_index_stays_within_slots() {
        let mut app = app();
        app.selected = CONTROLS.len() - 1; // TimeIndex
        for _ in 0..20 {
            app.adjust(true);
        }
        assert_eq!(app.inputs.time_index, SLOTS - 1);
        for _ in 0..20 {
            app.adjust(false);
        }
        assert_eq!(app.inputs.time_index, 0);
    }
}
