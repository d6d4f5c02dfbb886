use ising::analysis::critical_temperature;
use ising::{Animation, IsingParams, SweepResults};
use rand::Rng;
use tracing::info;

pub fn report_sweep_summary(results: &SweepResults, params: &IsingParams) {
    let t_c = critical_temperature(params.coupling, params.boltzmann);
    let sites = params.sites() as f64;

    info!("\nTemperature sweep finished.");
    info!("Critical temperature (Onsager): T_c = {:.4}", t_c);
    info!(
        "{:>8} {:>8} {:>10} {:>12} {:>10} {:>10}",
        "T", "T/T_c", "<|M|>", "<E>/site", "C", "accept"
    );
    for point in results.points() {
        info!(
            "{:>8.4} {:>8.4} {:>10} {:>12} {:>10} {:>10.3}",
            point.temperature,
            point.temperature / t_c,
            format_value(point.magnetization),
            format_value(point.energy.map(|e| e / sites)),
            format_value(point.specific_heat),
            point.acceptance_rate
        );
    }
}

pub fn report_animation_summary<R: Rng>(animation: &Animation<R>, written: usize) {
    let lattice = animation.lattice();
    info!("\nAnimation finished: {} frames written.", written);
    info!("Final lattice: |M| = {:.4}", ising::magnetization(lattice));
    if lattice.size() <= 16 {
        info!("Final configuration:\n{}", lattice);
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
}
