use crate::config::{Args, Config};
use color_eyre::eyre::Result;
use ising::{Animation, SweepResults, TemperatureSweep};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Merge command-line overrides into the configured driver and validate it
pub fn build_sweep(args: &Args, config: &Config) -> Result<TemperatureSweep> {
    let mut sweep_config = config.sweep_config()?;

    if let Some(size) = args.size {
        info!("Overriding lattice size with: {}", size);
        sweep_config.params.size = size;
    }
    if let Some(eq) = args.equilibration_sweeps {
        info!("Overriding equilibration_sweeps with: {}", eq);
        sweep_config.equilibration_sweeps = eq;
    }
    if let Some(meas) = args.measurement_sweeps {
        info!("Overriding measurement_sweeps with: {}", meas);
        sweep_config.measurement_sweeps = meas;
    }

    Ok(TemperatureSweep::new(sweep_config)?)
}

/// Run a validated sweep sequentially or across threads, as configured
pub fn run_sweep(sweep: &TemperatureSweep, args: &Args, config: &Config) -> Result<SweepResults> {
    let seed = resolve_seed(args, config);

    let results = if args.parallel || config.is_parallel() {
        sweep.run_parallel(seed)?
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        sweep.run(&mut rng)?
    };
    Ok(results)
}

pub fn build_animation(args: &Args, config: &Config) -> Result<Animation<ChaCha8Rng>> {
    let mut params = config.params();
    if let Some(size) = args.size {
        info!("Overriding lattice size with: {}", size);
        params.size = size;
    }

    let schedule = config.animation_schedule();
    let frames = config.animation_frames();
    info!(
        "Animation: N={}, {} frames, schedule {:?}",
        params.size, frames, schedule
    );

    let rng = ChaCha8Rng::seed_from_u64(resolve_seed(args, config));
    Ok(Animation::new(params, schedule, frames, rng)?)
}

fn resolve_seed(args: &Args, config: &Config) -> u64 {
    args.seed.unwrap_or_else(|| config.seed())
}
