//! Street-light simulator entry point — CLI wiring and report printing.

use std::path::Path;
use std::process;

use streetlight_sim::config::ScenarioConfig;
use streetlight_sim::io::export::export_csv;
use streetlight_sim::sim::engine;
use streetlight_sim::sim::types::HourlySeries;
use streetlight_sim::table::{PvTable, TableView};

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    data_path: Option<String>,
    view: Option<String>,
    filter: Option<u32>,
    export_path: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("streetlight-sim — deterministic solar street-light simulator");
    eprintln!();
    eprintln!("Usage: streetlight-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline, dim_night, large_array)");
    eprintln!("  --data <path>       PV measurement CSV (default: pv_power_data.csv)");
    eprintln!("  --view <name>       Table view: day, month, or hour");
    eprintln!("  --filter <int>      Keep only table rows matching the view key");
    eprintln!("  --export <path>     Write the computed series to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui               Launch the interactive terminal dashboard");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        data_path: None,
        view: None,
        filter: None,
        export_path: None,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(args[i].clone());
            }
            "--view" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --view requires a name argument");
                    process::exit(1);
                }
                cli.view = Some(args[i].clone());
            }
            "--filter" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --filter requires an integer argument");
                    process::exit(1);
                }
                if let Ok(v) = args[i].parse::<u32>() {
                    cli.filter = Some(v);
                } else {
                    eprintln!("error: --filter value \"{}\" is not a valid integer", args[i]);
                    process::exit(1);
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_path = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn load_config(cli: &CliArgs) -> ScenarioConfig {
    if cli.scenario_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --scenario and --preset are mutually exclusive; choose one source");
        process::exit(1);
    }

    let config = if let Some(path) = &cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    } else if let Some(name) = &cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("error: {e}");
        }
        process::exit(1);
    }

    config
}

fn print_series(title: &str, unit: &str, series: &HourlySeries) {
    println!("{title}");
    for (label, value) in series.iter() {
        println!("  {label}  {value:>9.2} {unit}");
    }
}

fn print_table(rows: &[streetlight_sim::table::PvRecord]) {
    println!("Month  Day  Hour  Irradiance  PV_Power");
    for r in rows {
        println!(
            "{:>5}  {:>3}  {:>4}  {:>10.2}  {:>8.2}",
            r.month, r.day, r.hour, r.irradiance, r.pv_power
        );
    }
    println!("({} rows)", rows.len());
}

fn main() {
    let cli = parse_args();
    let config = load_config(&cli);

    #[cfg(feature = "tui")]
    if cli.tui {
        streetlight_sim::tui::run(&config);
        return;
    }

    let outputs = match engine::run(&config.to_inputs()) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!("{outputs}");
    println!();
    print_series("Solar Panel Output Over Time", "W", &outputs.panel_output_w);
    println!();
    print_series(
        "Battery Charging Level Over Time",
        "%",
        &outputs.charging_level_pct,
    );
    println!();
    print_series("Power Consumption Over Time", "W", &outputs.consumption_w);
    println!();
    print_series(
        "Battery Discharge Level Over Time",
        "%",
        &outputs.discharge_level_pct,
    );
    println!();
    let k = config.light.time_index;
    println!(
        "Battery Charge Level Gauge at {}: {:.1}%",
        outputs.discharge_level_pct.labels[k], outputs.gauge_pct
    );

    if let Some(path) = &cli.export_path {
        if let Err(e) = export_csv(&outputs, Path::new(path)) {
            eprintln!("error: cannot write {path}: {e}");
            process::exit(1);
        }
        println!("series exported to {path}");
    }

    // Data table: a load failure degrades to an empty table, not an abort
    let data_path = cli
        .data_path
        .clone()
        .unwrap_or_else(|| config.table.data_path.clone());
    let table = match PvTable::load(Path::new(&data_path)) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("warning: {e}; showing an empty table");
            PvTable::default()
        }
    };

    let view_name = cli.view.clone().unwrap_or_else(|| config.table.view.clone());
    let view = match view_name.parse::<TableView>() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!();
    println!("Data Table (view: {view}, filter: {:?})", cli.filter);
    print_table(&table.filter(view, cli.filter));
}
