use crate::error::{IsingError, Result};
use serde::{Deserialize, Serialize};

/// Physical parameters shared by every stage of the simulation.
///
/// `coupling` is J and `boltzmann` is k_B, both in reduced units. They
/// only enter the dynamics through the ratio E / (k_B T).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsingParams {
    /// Lattice side length N (the lattice holds N x N spins)
    pub size: usize,
    /// Coupling constant J
    pub coupling: f64,
    /// Boltzmann constant k_B
    pub boltzmann: f64,
}

impl IsingParams {
    /// Parameters with J = k_B = 1
    pub fn new(size: usize) -> Self {
        Self {
            size,
            coupling: 1.0,
            boltzmann: 1.0,
        }
    }

    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    pub fn with_boltzmann(mut self, boltzmann: f64) -> Self {
        self.boltzmann = boltzmann;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(IsingError::ZeroSize);
        }
        if !self.coupling.is_finite() {
            return Err(IsingError::InvalidCoupling(self.coupling));
        }
        if !self.boltzmann.is_finite() || self.boltzmann <= 0.0 {
            return Err(IsingError::InvalidBoltzmann(self.boltzmann));
        }
        Ok(())
    }

    /// Inverse temperature β = 1 / (k_B T)
    pub fn beta(&self, temperature: f64) -> f64 {
        1.0 / (self.boltzmann * temperature)
    }

    /// Number of spins, N²
    pub fn sites(&self) -> usize {
        self.size * self.size
    }
}

impl Default for IsingParams {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Check a temperature sequence: non-empty, every entry finite and positive.
pub fn validate_temperatures(temperatures: &[f64]) -> Result<()> {
    if temperatures.is_empty() {
        return Err(IsingError::EmptyTemperatures);
    }
    for (index, &value) in temperatures.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(IsingError::InvalidTemperature { index, value });
        }
    }
    Ok(())
}
