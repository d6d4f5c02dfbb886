use crate::error::{IsingError, Result};
use crate::lattice::Lattice;
use crate::metropolis::{sweep, SweepStats};
use crate::observables::{specific_heat, ObservableSet, SampleBuffer};
use crate::params::{validate_temperatures, IsingParams};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What happens to the lattice when the driver moves to the next temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReusePolicy {
    /// Every temperature starts from an independent random lattice
    #[default]
    Fresh,
    /// One random lattice is carried through the whole temperature sequence
    CarryOver,
}

/// Inclusive, evenly spaced temperature range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl TemperatureRange {
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
        }
    }

    pub fn linspace(&self) -> Result<Vec<f64>> {
        match self.points {
            0 => Err(IsingError::EmptyRange),
            1 => Ok(vec![self.start]),
            n => {
                let step = (self.stop - self.start) / (n - 1) as f64;
                Ok((0..n).map(|k| self.start + k as f64 * step).collect())
            }
        }
    }
}

/// Everything the temperature sweep needs, passed in explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub params: IsingParams,
    pub temperatures: Vec<f64>,
    pub equilibration_sweeps: usize,
    pub measurement_sweeps: usize,
    pub reuse: ReusePolicy,
    pub observables: ObservableSet,
}

impl SweepConfig {
    pub fn new(params: IsingParams, temperatures: Vec<f64>) -> Self {
        Self {
            params,
            temperatures,
            equilibration_sweeps: 5000,
            measurement_sweeps: 1000,
            reuse: ReusePolicy::Fresh,
            observables: ObservableSet::all(),
        }
    }

    pub fn with_sweeps(mut self, equilibration_sweeps: usize, measurement_sweeps: usize) -> Self {
        self.equilibration_sweeps = equilibration_sweeps;
        self.measurement_sweeps = measurement_sweeps;
        self
    }

    pub fn with_reuse(mut self, reuse: ReusePolicy) -> Self {
        self.reuse = reuse;
        self
    }

    pub fn with_observables(mut self, observables: ObservableSet) -> Self {
        self.observables = observables;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        validate_temperatures(&self.temperatures)?;
        if self.measurement_sweeps == 0 {
            return Err(IsingError::ZeroMeasurementSweeps);
        }
        Ok(())
    }
}

/// Aggregated observables at one temperature
///
/// Observables that were not requested are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub temperature: f64,
    pub magnetization: Option<f64>,
    pub energy: Option<f64>,
    pub specific_heat: Option<f64>,
    /// Fraction of accepted flips during the measurement phase
    pub acceptance_rate: f64,
}

/// Per-temperature results, in input temperature order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SweepResults {
    points: Vec<TemperaturePoint>,
}

impl SweepResults {
    pub fn points(&self) -> &[TemperaturePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<TemperaturePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (temperature, ⟨M⟩) pairs
    pub fn magnetization_series(&self) -> Vec<(f64, f64)> {
        self.series(|p| p.magnetization)
    }

    /// (temperature, ⟨E⟩) pairs
    pub fn energy_series(&self) -> Vec<(f64, f64)> {
        self.series(|p| p.energy)
    }

    /// (temperature, C) pairs
    pub fn specific_heat_series(&self) -> Vec<(f64, f64)> {
        self.series(|p| p.specific_heat)
    }

    fn series(&self, value: impl Fn(&TemperaturePoint) -> Option<f64>) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| value(p).map(|v| (p.temperature, v)))
            .collect()
    }
}

/// Equilibrate-then-measure driver over an ordered temperature sequence
#[derive(Debug, Clone)]
pub struct TemperatureSweep {
    config: SweepConfig,
}

impl TemperatureSweep {
    /// Validate the configuration; no simulation work happens here
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run every temperature sequentially on the injected random stream
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SweepResults> {
        let config = &self.config;
        info!(
            "Temperature sweep: N={}, {} temperatures, {} equilibration + {} measurement sweeps, {:?} lattices",
            config.params.size,
            config.temperatures.len(),
            config.equilibration_sweeps,
            config.measurement_sweeps,
            config.reuse
        );

        let mut carried: Option<Lattice> = None;
        let mut points = Vec::with_capacity(config.temperatures.len());

        for &temperature in &config.temperatures {
            let mut lattice = match (config.reuse, carried.take()) {
                (ReusePolicy::CarryOver, Some(lattice)) => lattice,
                _ => Lattice::random(config.params.size, rng)?,
            };

            points.push(self.simulate_temperature(&mut lattice, temperature, rng));

            if config.reuse == ReusePolicy::CarryOver {
                carried = Some(lattice);
            }
        }

        Ok(SweepResults { points })
    }

    /// Run temperatures concurrently; temperature k draws from its own
    /// `ChaCha8Rng` seeded with `seed + k`.
    pub fn run_parallel(&self, seed: u64) -> Result<SweepResults> {
        let config = &self.config;
        if config.reuse == ReusePolicy::CarryOver {
            return Err(IsingError::ParallelCarryOver);
        }
        info!(
            "Parallel temperature sweep: N={}, {} temperatures, base seed {}",
            config.params.size,
            config.temperatures.len(),
            seed
        );

        let points = config
            .temperatures
            .par_iter()
            .enumerate()
            .map(|(k, &temperature)| -> Result<TemperaturePoint> {
                let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(k as u64));
                let mut lattice = Lattice::random(config.params.size, &mut rng)?;
                Ok(self.simulate_temperature(&mut lattice, temperature, &mut rng))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SweepResults { points })
    }

    fn simulate_temperature<R: Rng + ?Sized>(
        &self,
        lattice: &mut Lattice,
        temperature: f64,
        rng: &mut R,
    ) -> TemperaturePoint {
        let config = &self.config;
        let params = &config.params;

        let mut burn_in = SweepStats::default();
        for _ in 0..config.equilibration_sweeps {
            burn_in.merge(sweep(lattice, params, temperature, rng));
        }

        let mut stats = SweepStats::default();
        let mut buffer = SampleBuffer::with_capacity(config.measurement_sweeps);
        for _ in 0..config.measurement_sweeps {
            stats.merge(sweep(lattice, params, temperature, rng));
            buffer.record(lattice, params.coupling, &config.observables);
        }

        let moments = buffer.reduce();
        let heat = specific_heat(
            moments.energy_variance,
            params.sites(),
            params.boltzmann,
            temperature,
        );

        debug!(
            "T = {:.4}: <E> = {:.4}, <M> = {:.4}, C = {:.4}, acceptance {:.3} (burn-in {:.3})",
            temperature,
            moments.mean_energy,
            moments.mean_magnetization,
            heat,
            stats.acceptance_rate(),
            burn_in.acceptance_rate()
        );

        let requested = &config.observables;
        TemperaturePoint {
            temperature,
            magnetization: requested.magnetization.then_some(moments.mean_magnetization),
            energy: requested.energy.then_some(moments.mean_energy),
            specific_heat: requested.specific_heat.then_some(heat),
            acceptance_rate: stats.acceptance_rate(),
        }
    }
}
