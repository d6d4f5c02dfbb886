use crate::energy::delta_energy;
use crate::lattice::Lattice;
use crate::params::IsingParams;
use rand::Rng;

/// Flip counts from a single sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub attempted: u64,
    pub accepted: u64,
}

impl SweepStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempted as f64
        }
    }

    pub fn merge(&mut self, other: SweepStats) {
        self.attempted += other.attempted;
        self.accepted += other.accepted;
    }
}

/// Metropolis acceptance probability min(1, exp(-β ΔE))
///
/// Clamped to [0, 1]; an overflowing or undefined exponent for an
/// energy-raising move counts as rejection.
pub fn acceptance_probability(delta_e: f64, beta: f64) -> f64 {
    if delta_e <= 0.0 {
        return 1.0;
    }
    let probability = (-delta_e * beta).exp();
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// One Metropolis sweep: N² single-spin-flip attempts at uniformly random
/// sites (with replacement), applied sequentially in place.
pub fn sweep<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    params: &IsingParams,
    temperature: f64,
    rng: &mut R,
) -> SweepStats {
    let size = lattice.size();
    let beta = params.beta(temperature);
    let mut stats = SweepStats::default();

    for _ in 0..size * size {
        let i = rng.gen_range(0..size) as isize;
        let j = rng.gen_range(0..size) as isize;

        let delta_e = delta_energy(lattice, i, j, params.coupling);

        // The uniform draw is only taken for non-negative ΔE
        if delta_e < 0.0 || rng.gen::<f64>() < acceptance_probability(delta_e, beta) {
            lattice.flip(i, j);
            stats.accepted += 1;
        }
        stats.attempted += 1;
    }

    stats
}
