//! Configuration management for Ising simulations
//!
//! This module handles configuration structures, defaults, and the
//! conversion into the simulation core's validated types.

mod args;

pub use args::{Args, OutputFormat};

use ising::{
    IsingParams, Observable, ObservableSet, ReusePolicy, SweepConfig, TemperatureRange,
    TemperatureSchedule,
};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lattice: LatticeParams,
    #[serde(default)]
    pub temperatures: TemperatureParams,
    #[serde(default)]
    pub sweep: SweepParams,
    pub animation: Option<AnimationParams>,
    pub seed: Option<u64>,
}

/// Lattice and Hamiltonian parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LatticeParams {
    pub size: Option<usize>,
    pub coupling: Option<f64>,
    pub boltzmann: Option<f64>,
}

impl Default for LatticeParams {
    fn default() -> Self {
        let params = IsingParams::default();
        LatticeParams {
            size: Some(params.size),
            coupling: Some(params.coupling),
            boltzmann: Some(params.boltzmann),
        }
    }
}

impl LatticeParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.size.is_none() {
            self.size = defaults.size;
        }
        if self.coupling.is_none() {
            self.coupling = defaults.coupling;
        }
        if self.boltzmann.is_none() {
            self.boltzmann = defaults.boltzmann;
        }
        self
    }
}

/// Temperatures as an explicit list or an inclusive linear range.
/// An explicit list wins when both are given.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TemperatureParams {
    pub values: Option<Vec<f64>>,
    pub range: Option<TemperatureRange>,
}

impl TemperatureParams {
    /// Apply the default range (1.5 to 3.5, 20 points) when nothing is given
    pub fn with_defaults(mut self) -> Self {
        if self.values.is_none() && self.range.is_none() {
            self.range = Some(TemperatureRange::new(1.5, 3.5, 20));
        }
        self
    }

    pub fn resolve(&self) -> ising::Result<Vec<f64>> {
        match (&self.values, &self.range) {
            (Some(values), _) => Ok(values.clone()),
            (None, Some(range)) => range.linspace(),
            (None, None) => Err(ising::IsingError::EmptyTemperatures),
        }
    }
}

/// Equilibration and measurement parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SweepParams {
    pub equilibration_sweeps: Option<usize>,
    pub measurement_sweeps: Option<usize>,
    pub reuse: Option<ReusePolicy>,
    pub observables: Option<Vec<Observable>>,
    pub parallel: Option<bool>,
}

impl Default for SweepParams {
    fn default() -> Self {
        SweepParams {
            equilibration_sweeps: Some(5000),
            measurement_sweeps: Some(1000),
            reuse: Some(ReusePolicy::Fresh),
            observables: Some(vec![
                Observable::Magnetization,
                Observable::Energy,
                Observable::SpecificHeat,
            ]),
            parallel: Some(false),
        }
    }
}

impl SweepParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.equilibration_sweeps.is_none() {
            self.equilibration_sweeps = defaults.equilibration_sweeps;
        }
        if self.measurement_sweeps.is_none() {
            self.measurement_sweeps = defaults.measurement_sweeps;
        }
        if self.reuse.is_none() {
            self.reuse = defaults.reuse;
        }
        if self.observables.is_none() {
            self.observables = defaults.observables;
        }
        if self.parallel.is_none() {
            self.parallel = defaults.parallel;
        }
        self
    }
}

/// How animation temperatures are laid out over the frames
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Segments,
    LegacyThirds,
}

/// Animation parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnimationParams {
    pub enabled: Option<bool>,
    pub frames: Option<usize>,
    pub temperatures: Option<Vec<f64>>,
    pub schedule: Option<ScheduleKind>,
}

impl Default for AnimationParams {
    fn default() -> Self {
        AnimationParams {
            enabled: Some(false),
            frames: Some(300),
            temperatures: Some(vec![5.0, 2.27, 1.0]),
            schedule: Some(ScheduleKind::Segments),
        }
    }
}

impl AnimationParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.frames.is_none() {
            self.frames = defaults.frames;
        }
        if self.temperatures.is_none() {
            self.temperatures = defaults.temperatures;
        }
        if self.schedule.is_none() {
            self.schedule = defaults.schedule;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.lattice = self.lattice.with_defaults();
        self.temperatures = self.temperatures.with_defaults();
        self.sweep = self.sweep.with_defaults();
        if let Some(animation) = self.animation.take() {
            self.animation = Some(animation.with_defaults());
        }
        self
    }

    /// Physical parameters with defaults filled in
    pub fn params(&self) -> IsingParams {
        let defaults = IsingParams::default();
        IsingParams::new(self.lattice.size.unwrap_or(defaults.size))
            .with_coupling(self.lattice.coupling.unwrap_or(defaults.coupling))
            .with_boltzmann(self.lattice.boltzmann.unwrap_or(defaults.boltzmann))
    }

    /// Requested observables; an empty list falls back to all three
    pub fn observables(&self) -> ObservableSet {
        let set: ObservableSet = self
            .sweep
            .observables
            .iter()
            .flatten()
            .copied()
            .collect();
        if set.is_empty() {
            ObservableSet::all()
        } else {
            set
        }
    }

    /// Unvalidated driver configuration; validation happens in the driver
    pub fn sweep_config(&self) -> ising::Result<SweepConfig> {
        let temperatures = self.temperatures.resolve()?;
        let mut config = SweepConfig::new(self.params(), temperatures)
            .with_reuse(self.sweep.reuse.unwrap_or_default())
            .with_observables(self.observables());

        if let Some(eq) = self.sweep.equilibration_sweeps {
            config.equilibration_sweeps = eq;
        }
        if let Some(meas) = self.sweep.measurement_sweeps {
            config.measurement_sweeps = meas;
        }
        Ok(config)
    }

    /// Check if parallel temperature fan-out is enabled
    pub fn is_parallel(&self) -> bool {
        self.sweep.parallel.unwrap_or(false)
    }

    /// Check if animation output is enabled
    pub fn is_animation_enabled(&self) -> bool {
        self.animation
            .as_ref()
            .and_then(|a| a.enabled)
            .unwrap_or(false)
    }

    /// Get the animation frame count
    pub fn animation_frames(&self) -> usize {
        self.animation.as_ref().and_then(|a| a.frames).unwrap_or(300)
    }

    /// Get the per-frame temperature schedule
    pub fn animation_schedule(&self) -> TemperatureSchedule {
        let defaults = AnimationParams::default();
        let animation = self.animation.as_ref();
        let temperatures = animation
            .and_then(|a| a.temperatures.clone())
            .or(defaults.temperatures)
            .unwrap_or_default();

        match animation.and_then(|a| a.schedule).or(defaults.schedule) {
            Some(ScheduleKind::LegacyThirds) => TemperatureSchedule::LegacyThirds(temperatures),
            _ => TemperatureSchedule::Segments(temperatures),
        }
    }

    /// Get the random seed
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }
}
