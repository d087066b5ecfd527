//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::consumption::BrightnessModel;
use crate::sim::engine::SimulationInputs;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields default to the reference dashboard's initial control values.
/// Load from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Lamp parameters.
    #[serde(default)]
    pub light: LightConfig,
    /// Solar panel parameters.
    #[serde(default)]
    pub panel: PanelConfig,
    /// Battery parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Data-table parameters.
    #[serde(default)]
    pub table: TableConfig,
}

/// Lamp parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    /// Luminous flux (lumens, 0–2000).
    pub power_lm: f32,
    /// Distance from the lamp for the lux readout (meters, 1–20).
    pub distance_m: f32,
    /// Rated power draw (watts, 0–100).
    pub power_w: f32,
    /// Brightness schedule: `"full"`, `"dim_slot1"`, or `"dim_slot2"`.
    pub brightness: BrightnessModel,
    /// Hour index for the gauge readout (0–12).
    pub time_index: usize,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            power_lm: 1000.0,
            distance_m: 10.0,
            power_w: 50.0,
            brightness: BrightnessModel::Full,
            time_index: 0,
        }
    }
}

/// Solar panel parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Normal cell operating temperature (°C, −10–40).
    pub cell_temp_c: f32,
    /// Ambient temperature (°C, −10–40).
    pub ambient_temp_c: f32,
    /// Number of cleanings (0–10).
    pub cleanings: u32,
    /// Panel area (m², 1–10).
    pub area_m2: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            cell_temp_c: 22.0,
            ambient_temp_c: 18.0,
            cleanings: 5,
            area_m2: 5.0,
        }
    }
}

/// Battery parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Capacity (Ah, 1–100).
    pub capacity_ah: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self { capacity_ah: 50.0 }
    }
}

/// Data-table parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Path to the PV measurement CSV file.
    pub data_path: String,
    /// Table view: `"day"`, `"month"`, or `"hour"`.
    pub view: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            data_path: "pv_power_data.csv".to_string(),
            view: "month".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"light.distance_m"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ScenarioConfig {
    /// Names of all built-in presets.
    pub const PRESETS: [&'static str; 3] = ["baseline", "dim_night", "large_array"];

    /// Returns the baseline scenario (the reference dashboard's initial values).
    pub fn baseline() -> Self {
        Self {
            light: LightConfig::default(),
            panel: PanelConfig::default(),
            battery: BatteryConfig::default(),
            table: TableConfig::default(),
        }
    }

    /// A low-draw overnight scenario using the first dimming schedule.
    pub fn dim_night() -> Self {
        Self {
            light: LightConfig {
                power_w: 30.0,
                brightness: BrightnessModel::DimSlot1,
                time_index: 6,
                ..LightConfig::default()
            },
            battery: BatteryConfig { capacity_ah: 30.0 },
            ..Self::baseline()
        }
    }

    /// A large panel array paired with a full-size battery.
    pub fn large_array() -> Self {
        Self {
            panel: PanelConfig {
                area_m2: 10.0,
                cleanings: 10,
                ..PanelConfig::default()
            },
            battery: BatteryConfig { capacity_ah: 100.0 },
            ..Self::baseline()
        }
    }

    /// Loads a named built-in preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "dim_night" => Ok(Self::dim_night()),
            "large_array" => Ok(Self::large_array()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\" (available: {})",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Loads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "file".to_string(),
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates every field against the documented control ranges.
    ///
    /// Returns one error per violated constraint; an empty vec means valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field: &str, message: String| {
            if !ok {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message,
                });
            }
        };

        let l = &self.light;
        check(
            (0.0..=2000.0).contains(&l.power_lm),
            "light.power_lm",
            format!("must be within 0–2000 lumens, got {}", l.power_lm),
        );
        check(
            (1.0..=20.0).contains(&l.distance_m),
            "light.distance_m",
            format!("must be within 1–20 m, got {}", l.distance_m),
        );
        check(
            (0.0..=100.0).contains(&l.power_w),
            "light.power_w",
            format!("must be within 0–100 W, got {}", l.power_w),
        );
        check(
            l.time_index <= 12,
            "light.time_index",
            format!("must be within 0–12, got {}", l.time_index),
        );

        let p = &self.panel;
        check(
            (-10.0..=40.0).contains(&p.cell_temp_c),
            "panel.cell_temp_c",
            format!("must be within −10–40 °C, got {}", p.cell_temp_c),
        );
        check(
            (-10.0..=40.0).contains(&p.ambient_temp_c),
            "panel.ambient_temp_c",
            format!("must be within −10–40 °C, got {}", p.ambient_temp_c),
        );
        check(
            p.cleanings <= 10,
            "panel.cleanings",
            format!("must be within 0–10, got {}", p.cleanings),
        );
        check(
            (1.0..=10.0).contains(&p.area_m2),
            "panel.area_m2",
            format!("must be within 1–10 m², got {}", p.area_m2),
        );

        check(
            (1.0..=100.0).contains(&self.battery.capacity_ah),
            "battery.capacity_ah",
            format!("must be within 1–100 Ah, got {}", self.battery.capacity_ah),
        );

        check(
            matches!(self.table.view.as_str(), "day" | "month" | "hour"),
            "table.view",
            format!(
                "must be one of day, month, hour; got \"{}\"",
                self.table.view
            ),
        );

        errors
    }

    /// Builds the simulation inputs for one engine run.
    pub fn to_inputs(&self) -> SimulationInputs {
        SimulationInputs {
            light_power_lm: self.light.power_lm,
            distance_m: self.light.distance_m,
            cell_temp_c: self.panel.cell_temp_c,
            ambient_temp_c: self.panel.ambient_temp_c,
            cleanings: self.panel.cleanings,
            panel_area_m2: self.panel.area_m2,
            battery_capacity_ah: self.battery.capacity_ah,
            light_power_w: self.light.power_w,
            brightness_model: self.light.brightness,
            time_index: self.light.time_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_matches_reference_initial_values() {
        let cfg = ScenarioConfig::baseline();
        assert_eq!(cfg.light.power_lm, 1000.0);
        assert_eq!(cfg.light.distance_m, 10.0);
        assert_eq!(cfg.panel.cell_temp_c, 22.0);
        assert_eq!(cfg.panel.ambient_temp_c, 18.0);
        assert_eq!(cfg.panel.cleanings, 5);
        assert_eq!(cfg.panel.area_m2, 5.0);
        assert_eq!(cfg.battery.capacity_ah, 50.0);
        assert_eq!(cfg.light.power_w, 50.0);
        assert_eq!(cfg.light.brightness, BrightnessModel::Full);
        assert_eq!(cfg.light.time_index, 0);
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = ScenarioConfig::from_preset("nonsense");
        assert!(err.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[battery]
capacity_ah = 80.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml).expect("valid toml");
        assert_eq!(cfg.battery.capacity_ah, 80.0);
        // remaining sections keep defaults
        assert_eq!(cfg.light.power_lm, 1000.0);
        assert_eq!(cfg.panel.area_m2, 5.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
[light]
power_lm = 500.0
wattage = 10.0
"#;
        assert!(ScenarioConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn unknown_brightness_selector_is_rejected_at_parse() {
        let toml = r#"
[light]
brightness = "strobe"
"#;
        assert!(ScenarioConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.light.distance_m = 0.0;
        cfg.battery.capacity_ah = 500.0;
        cfg.light.time_index = 13;
        let errors = cfg.validate();
        assert_eq!(errors.len(), 3);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"light.distance_m"));
        assert!(fields.contains(&"battery.capacity_ah"));
        assert!(fields.contains(&"light.time_index"));
    }

    #[test]
    fn invalid_table_view_fails_validation() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.table.view = "minute".to_string();
        let errors = cfg.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "table.view");
    }

    #[test]
    fn to_inputs_carries_every_field() {
        let cfg = ScenarioConfig::dim_night();
        let inputs = cfg.to_inputs();
        assert_eq!(inputs.light_power_w, 30.0);
        assert_eq!(inputs.brightness_model, BrightnessModel::DimSlot1);
        assert_eq!(inputs.battery_capacity_ah, 30.0);
        assert_eq!(inputs.time_index, 6);
    }
}
