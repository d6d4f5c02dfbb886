use crate::lattice::Lattice;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Total energy of the lattice
///
/// Each bond is counted once by pairing every site with its previous
/// neighbour along both axes: E = -J Σ s_ij (s_{i-1,j} + s_{i,j-1}).
pub fn energy(lattice: &Lattice, coupling: f64) -> f64 {
    let n = lattice.size() as isize;
    iproduct!(0..n, 0..n)
        .map(|(i, j)| {
            let spin = lattice.get(i, j) as f64;
            let up = lattice.get(i - 1, j) as f64;
            let left = lattice.get(i, j - 1) as f64;
            -coupling * spin * (up + left)
        })
        .sum()
}

/// Absolute magnetization per site, |Σ s| / N², in [0, 1]
pub fn magnetization(lattice: &Lattice) -> f64 {
    lattice.spin_sum().abs() as f64 / lattice.sites() as f64
}

/// Specific heat C = Var(E) / (N² k_B T²)
///
/// Zero variance gives zero at any temperature. T is divided out in two
/// steps so T² never underflows, and a result past the f64 range
/// saturates at `f64::MAX`.
pub fn specific_heat(energy_variance: f64, sites: usize, boltzmann: f64, temperature: f64) -> f64 {
    if energy_variance <= 0.0 {
        return 0.0;
    }
    let heat = energy_variance / (sites as f64 * boltzmann * temperature) / temperature;
    heat.min(f64::MAX)
}

/// Observable the driver can report per temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observable {
    Magnetization,
    Energy,
    SpecificHeat,
}

/// Subset of observables requested from a temperature sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableSet {
    pub magnetization: bool,
    pub energy: bool,
    pub specific_heat: bool,
}

impl ObservableSet {
    pub fn all() -> Self {
        Self {
            magnetization: true,
            energy: true,
            specific_heat: true,
        }
    }

    pub fn none() -> Self {
        Self {
            magnetization: false,
            energy: false,
            specific_heat: false,
        }
    }

    pub fn only(observable: Observable) -> Self {
        Self::none().with(observable)
    }

    pub fn with(mut self, observable: Observable) -> Self {
        match observable {
            Observable::Magnetization => self.magnetization = true,
            Observable::Energy => self.energy = true,
            Observable::SpecificHeat => self.specific_heat = true,
        }
        self
    }

    pub fn contains(&self, observable: Observable) -> bool {
        match observable {
            Observable::Magnetization => self.magnetization,
            Observable::Energy => self.energy,
            Observable::SpecificHeat => self.specific_heat,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.magnetization || self.energy || self.specific_heat)
    }

    /// Energy samples feed both ⟨E⟩ and the specific heat
    pub(crate) fn needs_energy(&self) -> bool {
        self.energy || self.specific_heat
    }
}

impl Default for ObservableSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Observable> for ObservableSet {
    fn from_iter<I: IntoIterator<Item = Observable>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Moments reduced from one temperature's measurement phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean_energy: f64,
    pub mean_energy_squared: f64,
    /// Mean squared deviation of the energy samples, never negative
    pub energy_variance: f64,
    pub mean_magnetization: f64,
    pub samples: usize,
}

/// Per-temperature buffers filled during the measurement phase
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    energies: Vec<f64>,
    magnetizations: Vec<f64>,
}

impl SampleBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            energies: Vec::with_capacity(capacity),
            magnetizations: Vec::with_capacity(capacity),
        }
    }

    /// Sample the requested observables from the current lattice
    pub fn record(&mut self, lattice: &Lattice, coupling: f64, observables: &ObservableSet) {
        if observables.needs_energy() {
            self.energies.push(energy(lattice, coupling));
        }
        if observables.magnetization {
            self.magnetizations.push(magnetization(lattice));
        }
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn magnetizations(&self) -> &[f64] {
        &self.magnetizations
    }

    pub fn len(&self) -> usize {
        self.energies.len().max(self.magnetizations.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arithmetic means of the buffered samples; empty buffers reduce to 0
    pub fn reduce(&self) -> Moments {
        let mean_energy = mean(&self.energies);
        let mean_energy_squared = mean_by(&self.energies, |e| e * e);
        let energy_variance = mean_by(&self.energies, |e| (e - mean_energy).powi(2));

        Moments {
            mean_energy,
            mean_energy_squared,
            energy_variance,
            mean_magnetization: mean(&self.magnetizations),
            samples: self.len(),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    mean_by(values, |v| v)
}

fn mean_by(values: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f(v)).sum::<f64>() / values.len() as f64
}
