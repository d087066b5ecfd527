//! End-to-end tests over the config → engine → export pipeline.

use streetlight_sim::config::ScenarioConfig;
use streetlight_sim::io::export::write_csv;
use streetlight_sim::sim::consumption::BrightnessModel;
use streetlight_sim::sim::engine::{self, SimulationOutputs};
use streetlight_sim::sim::types::SLOTS;

fn run_preset(name: &str) -> SimulationOutputs {
    let config = ScenarioConfig::from_preset(name).expect("preset should load");
    assert!(config.validate().is_empty(), "preset should be valid");
    engine::run(&config.to_inputs()).expect("preset inputs should simulate")
}

#[test]
fn baseline_run_matches_reference_values() {
    let out = run_preset("baseline");
    assert!((out.lux_per_m2 - 0.7958).abs() < 1e-3);
    assert!((out.temp_loss_pct - (-1.64)).abs() < 1e-5);
    assert!((out.soiling_loss_pct - 5e-5).abs() < 1e-9);
    // Noon panel slot: 1200 * (100 + 1.64 - 0.00005)/100 * 5
    assert!((out.panel_output_w.values[6] - 6098.397).abs() < 0.01);
}

#[test]
fn every_preset_keeps_percentage_series_in_bounds() {
    for name in ScenarioConfig::PRESETS {
        let out = run_preset(name);
        for series in [
            &out.charging_level_pct,
            &out.discharge_level_pct,
            &out.charge_level_pct,
        ] {
            for (slot, &pct) in series.values.iter().enumerate() {
                assert!(
                    (1.0..=99.0).contains(&pct),
                    "preset {name}, slot {slot}: {pct}"
                );
            }
        }
        assert!((1.0..=99.0).contains(&out.gauge_pct), "preset {name}");
    }
}

#[test]
fn gauge_equals_discharge_at_selected_index_for_every_preset() {
    for name in ScenarioConfig::PRESETS {
        let config = ScenarioConfig::from_preset(name).expect("preset should load");
        let out = engine::run(&config.to_inputs()).expect("preset inputs should simulate");
        let k = config.light.time_index;
        assert_eq!(out.gauge_pct, out.discharge_level_pct.values[k]);
        assert!((out.gauge_pct - (100.0 - out.charge_level_pct.values[k])).abs() < 1e-4);
    }
}

#[test]
fn dim_night_halves_late_consumption() {
    let out = run_preset("dim_night");
    // dim_slot1 at 30 W: full for slots 0-5, half after
    assert_eq!(out.consumption_w.values[0], 30.0);
    assert_eq!(out.consumption_w.values[5], 30.0);
    assert_eq!(out.consumption_w.values[6], 15.0);
    assert_eq!(out.consumption_w.values[12], 15.0);
}

#[test]
fn toml_scenario_overrides_flow_through_to_outputs() {
    let toml = r#"
[light]
power_w = 100.0
brightness = "dim_slot2"

[battery]
capacity_ah = 100.0
"#;
    let config = ScenarioConfig::from_toml_str(toml).expect("valid toml");
    assert!(config.validate().is_empty());
    let out = engine::run(&config.to_inputs()).expect("valid inputs");
    assert_eq!(config.light.brightness, BrightnessModel::DimSlot2);
    assert_eq!(out.consumption_w.values[0], 50.0);
    assert_eq!(out.consumption_w.values[12], 100.0);
}

#[test]
fn invalid_scenario_is_caught_before_simulation() {
    let toml = r#"
[light]
distance_m = 0.0
"#;
    let config = ScenarioConfig::from_toml_str(toml).expect("parseable toml");
    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.field == "light.distance_m"));
}

#[test]
fn export_covers_all_series_for_all_slots() {
    let out = run_preset("large_array");
    let mut buf = Vec::new();
    write_csv(&out, &mut buf).expect("export should succeed");
    let csv_text = String::from_utf8(buf).expect("csv is UTF-8");
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines.len(), 1 + SLOTS);
    // Spot-check one row against the outputs
    let noon: Vec<&str> = lines[7].split(',').collect();
    assert_eq!(noon[0], "6");
    assert_eq!(noon[1], "12:00 PM");
    assert_eq!(noon[2], "12:00 AM");
    let panel_w: f32 = noon[3].parse().expect("numeric panel column");
    assert!((panel_w - out.panel_output_w.values[6]).abs() < 0.01);
}

#[test]
fn identical_runs_are_bitwise_identical() {
    let config = ScenarioConfig::baseline();
    let a = engine::run(&config.to_inputs()).expect("valid inputs");
    let b = engine::run(&config.to_inputs()).expect("valid inputs");
    assert_eq!(a, b);

    let mut buf_a = Vec::new();
    let mut buf_b = Vec::new();
    write_csv(&a, &mut buf_a).expect("export a");
    write_csv(&b, &mut buf_b).expect("export b");
    assert_eq!(buf_a, buf_b);
}
