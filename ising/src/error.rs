use thiserror::Error;

/// Configuration errors raised before any Monte Carlo work starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IsingError {
    #[error("lattice size must be positive")]
    ZeroSize,
    #[error("coupling constant must be finite, got {0}")]
    InvalidCoupling(f64),
    #[error("Boltzmann constant must be positive and finite, got {0}")]
    InvalidBoltzmann(f64),
    #[error("temperature list must not be empty")]
    EmptyTemperatures,
    #[error("temperature[{index}] must be positive and finite, got {value}")]
    InvalidTemperature { index: usize, value: f64 },
    #[error("at least one measurement sweep is required")]
    ZeroMeasurementSweeps,
    #[error("animation needs at least one frame")]
    ZeroFrames,
    #[error("temperature range needs at least one point")]
    EmptyRange,
    #[error("spin rows must form a square grid (row {row} has {len} entries, expected {expected})")]
    NonSquareSpins {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("spin at ({row}, {col}) is {value}, expected -1 or +1")]
    InvalidSpin { row: usize, col: usize, value: i8 },
    #[error("carry-over lattices cannot be simulated in parallel")]
    ParallelCarryOver,
}

pub type Result<T> = std::result::Result<T, IsingError>;
