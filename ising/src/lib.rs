//! Metropolis Monte Carlo for the 2D Ising model on a periodic square lattice.

pub mod analysis;
pub mod animation;
pub mod driver;
pub mod energy;
pub mod error;
pub mod lattice;
pub mod metropolis;
pub mod observables;
pub mod params;

pub use animation::{Animation, Frame, TemperatureSchedule};
pub use driver::{
    ReusePolicy, SweepConfig, SweepResults, TemperaturePoint, TemperatureRange, TemperatureSweep,
};
pub use energy::delta_energy;
pub use error::{IsingError, Result};
pub use lattice::Lattice;
pub use metropolis::{acceptance_probability, sweep, SweepStats};
pub use observables::{
    energy, magnetization, specific_heat, Observable, ObservableSet, SampleBuffer,
};
pub use params::IsingParams;
