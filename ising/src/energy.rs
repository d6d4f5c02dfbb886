use crate::lattice::Lattice;

/// Energy change that flipping the spin at (i, j) would cause
///
/// ΔE = 2 J s_ij (s_{i-1,j} + s_{i+1,j} + s_{i,j-1} + s_{i,j+1}), with
/// periodic neighbours. Reads the pre-flip state, so call it before
/// committing the flip.
pub fn delta_energy(lattice: &Lattice, i: isize, j: isize, coupling: f64) -> f64 {
    let current_spin = lattice.get(i, j) as f64;

    let neighbors_sum = lattice.get(i - 1, j) as f64
        + lattice.get(i + 1, j) as f64
        + lattice.get(i, j - 1) as f64
        + lattice.get(i, j + 1) as f64;

    2.0 * coupling * current_spin * neighbors_sum
}
