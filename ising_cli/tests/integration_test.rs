//! Integration tests for configuration loading and the command-line runners
//!
//! These tests load the shipped example YAML files and drive shortened
//! versions of them end to end.

use ising::{IsingError, IsingParams, Observable, ReusePolicy, TemperatureSchedule};
use ising_cli::app::{build_animation, build_sweep, load_config, parse_config, run_sweep};
use ising_cli::config::{Args, Config, LatticeParams, OutputFormat};
use ising_cli::io::{write_frame, write_results};
use std::path::PathBuf;

/// Helper function to get the path to example files
fn example_path(filename: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
        .to_string_lossy()
        .into_owned()
}

/// Arguments that shrink any example to a fast run
fn quick_args() -> Args {
    Args {
        size: Some(6),
        equilibration_sweeps: Some(5),
        measurement_sweeps: Some(5),
        seed: Some(3),
        ..Args::default()
    }
}

#[test]
fn test_examples_parse() {
    for name in [
        "magnetization.yaml",
        "specific_heat.yaml",
        "energy.yaml",
        "animation.yaml",
        "carry_over.yaml",
    ] {
        let config = load_config(&example_path(name)).unwrap();
        assert!(config.lattice.size.is_some(), "{name} should have a size");
    }
}

#[test]
fn test_magnetization_example() {
    let config = load_config(&example_path("magnetization.yaml")).unwrap();
    let sweep_config = config.sweep_config().unwrap();
    assert_eq!(sweep_config.params.size, 20);
    assert_eq!(sweep_config.temperatures.len(), 20);
    assert_eq!(sweep_config.equilibration_sweeps, 5000);
    assert_eq!(sweep_config.measurement_sweeps, 1000);
    assert!(sweep_config.observables.contains(Observable::Magnetization));
    assert!(!sweep_config.observables.contains(Observable::Energy));

    let args = quick_args();
    let sweep = build_sweep(&args, &config).unwrap();
    let results = run_sweep(&sweep, &args, &config).unwrap();
    assert_eq!(results.magnetization_series().len(), 20);
    assert!(results.energy_series().is_empty());
}

#[test]
fn test_specific_heat_example_runs_in_parallel() {
    let config = load_config(&example_path("specific_heat.yaml")).unwrap();
    assert!(config.is_parallel());

    let args = quick_args();
    let sweep = build_sweep(&args, &config).unwrap();
    let first = run_sweep(&sweep, &args, &config).unwrap();
    let second = run_sweep(&sweep, &args, &config).unwrap();
    assert_eq!(first, second);
    assert!(first.specific_heat_series().iter().all(|&(_, c)| c >= 0.0));
}

#[test]
fn test_carry_over_example() {
    let config = load_config(&example_path("carry_over.yaml")).unwrap();
    let sweep = build_sweep(&quick_args(), &config).unwrap();
    assert_eq!(sweep.config().reuse, ReusePolicy::CarryOver);
    assert_eq!(sweep.config().temperatures.len(), 8);
}

#[test]
fn test_animation_example() {
    let config = load_config(&example_path("animation.yaml")).unwrap();
    assert!(config.is_animation_enabled());
    assert_eq!(config.animation_frames(), 300);
    assert_eq!(
        config.animation_schedule(),
        TemperatureSchedule::LegacyThirds(vec![5.0, 2.27, 1.0])
    );

    let animation = build_animation(&quick_args(), &config).unwrap();
    let mut buffer = Vec::new();
    for frame in animation.take(3) {
        write_frame(&mut buffer, &frame).unwrap();
    }
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().count(), 3 * 7);
    assert!(text.starts_with("# frame 0 T=5"));
}

#[test]
fn test_defaults_fill_missing_sections() {
    let config = parse_config("seed: 9\n").unwrap();
    let sweep_config = config.sweep_config().unwrap();
    assert_eq!(sweep_config.params.size, 20);
    assert_eq!(sweep_config.params.coupling, 1.0);
    assert_eq!(sweep_config.temperatures.len(), 20);
    assert_eq!(sweep_config.reuse, ReusePolicy::Fresh);
    assert!(!config.is_animation_enabled());
    assert_eq!(config.seed(), 9);
}

#[test]
fn test_partial_sections_fall_back_to_core_defaults() {
    let yaml = "lattice:\n  coupling: 2.0\nsweep:\n  measurement_sweeps: 7\n";
    let config = parse_config(yaml).unwrap();
    let sweep_config = config.sweep_config().unwrap();
    assert_eq!(sweep_config.params, IsingParams::new(20).with_coupling(2.0));
    assert_eq!(sweep_config.equilibration_sweeps, 5000);
    assert_eq!(sweep_config.measurement_sweeps, 7);

    // Sections that never went through with_defaults() still resolve
    let config = Config {
        lattice: LatticeParams {
            size: None,
            coupling: None,
            boltzmann: Some(0.5),
        },
        ..Config::default()
    };
    assert_eq!(config.params(), IsingParams::default().with_boltzmann(0.5));
    assert_eq!(LatticeParams::default().size, Some(IsingParams::default().size));
}

#[test]
fn test_invalid_configuration_is_reported() {
    let config = parse_config("temperatures:\n  values: [2.0, -1.0]\n").unwrap();
    let err = build_sweep(&Args::default(), &config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<IsingError>(),
        Some(&IsingError::InvalidTemperature {
            index: 1,
            value: -1.0
        })
    );

    let config = parse_config("sweep:\n  measurement_sweeps: 0\n").unwrap();
    let err = build_sweep(&Args::default(), &config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<IsingError>(),
        Some(&IsingError::ZeroMeasurementSweeps)
    );

    assert!(parse_config("lattice:\n  size: -4\n").is_err());
    assert!(load_config(&example_path("missing.yaml")).is_err());
}

#[test]
fn test_results_output_formats() {
    let config = parse_config("temperatures:\n  values: [1.0, 3.0]\n").unwrap();
    let args = quick_args();
    let sweep = build_sweep(&args, &config).unwrap();
    let results = run_sweep(&sweep, &args, &config).unwrap();

    let mut csv = Vec::new();
    write_results(&mut csv, &results, OutputFormat::Csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "temperature,magnetization,energy,specific_heat,acceptance_rate"
    );
    assert!(lines[1].starts_with("1,"));

    let mut json = Vec::new();
    write_results(&mut json, &results, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    let points = value.as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1]["temperature"], 3.0);
}
