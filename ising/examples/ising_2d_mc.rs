use ising::analysis::critical_temperature_2d;
use ising::{IsingParams, SweepConfig, TemperatureRange, TemperatureSweep};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 2D Ising Model Monte Carlo Simulation
///
/// Sweeps temperature across the ordering transition and prints
/// magnetization, energy per site and specific heat next to T/T_c.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("2D Ising Model Monte Carlo Simulation");
    println!("=====================================\n");

    let lattice_size = 16;
    let temperatures = TemperatureRange::new(1.5, 3.5, 11).linspace()?;
    let t_critical = critical_temperature_2d();

    let config = SweepConfig::new(IsingParams::new(lattice_size), temperatures)
        .with_sweeps(1000, 2000);
    let sweep = TemperatureSweep::new(config)?;

    println!(
        "- Lattice size: {}×{} ({} spins)",
        lattice_size,
        lattice_size,
        lattice_size * lattice_size
    );
    println!("- Critical temperature (theoretical): T_c = {:.4}\n", t_critical);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let results = sweep.run(&mut rng)?;

    println!(
        "{:>8} {:>8} {:>10} {:>10} {:>10}",
        "T", "T/T_c", "<|M|>", "<E>/N²", "C"
    );
    let sites = (lattice_size * lattice_size) as f64;
    for point in results.points() {
        println!(
            "{:>8.4} {:>8.4} {:>10.4} {:>10.4} {:>10.4}",
            point.temperature,
            point.temperature / t_critical,
            point.magnetization.unwrap_or_default(),
            point.energy.unwrap_or_default() / sites,
            point.specific_heat.unwrap_or_default()
        );
    }

    Ok(())
}
