use crate::error::{IsingError, Result};
use rand::Rng;
use std::fmt;

/// Square lattice of Ising spins with periodic boundary conditions
///
/// Every site holds +1 or -1. All accessors take signed coordinates and
/// wrap them modulo N, so the lattice never reports an out-of-range site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size: usize,
    spins: Vec<Vec<i8>>,
}

impl Lattice {
    /// Create an N x N lattice with independent, uniformly random spins
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::ZeroSize);
        }

        let mut spins = vec![vec![0i8; size]; size];
        for row in spins.iter_mut() {
            for spin in row.iter_mut() {
                *spin = if rng.gen_bool(0.5) { 1 } else { -1 };
            }
        }

        Ok(Self { size, spins })
    }

    /// Create an N x N lattice with every spin set to `spin`
    ///
    /// Any positive `spin` maps to +1, anything else to -1.
    pub fn ordered(size: usize, spin: i8) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::ZeroSize);
        }
        let spin = if spin > 0 { 1 } else { -1 };
        Ok(Self {
            size,
            spins: vec![vec![spin; size]; size],
        })
    }

    /// Build a lattice from explicit rows, rejecting non-square grids and
    /// values other than ±1.
    pub fn from_spins(spins: Vec<Vec<i8>>) -> Result<Self> {
        let size = spins.len();
        if size == 0 {
            return Err(IsingError::ZeroSize);
        }

        for (row, values) in spins.iter().enumerate() {
            if values.len() != size {
                return Err(IsingError::NonSquareSpins {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            if let Some((col, &value)) = values
                .iter()
                .enumerate()
                .find(|&(_, &s)| s != 1 && s != -1)
            {
                return Err(IsingError::InvalidSpin { row, col, value });
            }
        }

        Ok(Self { size, spins })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites, N²
    pub fn sites(&self) -> usize {
        self.size * self.size
    }

    fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.size as isize) as usize
    }

    /// Spin at (i, j) with periodic boundary conditions
    pub fn get(&self, i: isize, j: isize) -> i8 {
        self.spins[self.wrap(i)][self.wrap(j)]
    }

    /// Negate the spin at (i, j) in place
    pub fn flip(&mut self, i: isize, j: isize) {
        let (i, j) = (self.wrap(i), self.wrap(j));
        self.spins[i][j] = -self.spins[i][j];
    }

    /// Global spin inversion
    pub fn invert(&mut self) {
        for spin in self.spins.iter_mut().flat_map(|row| row.iter_mut()) {
            *spin = -*spin;
        }
    }

    /// Read-only view of the spin rows
    pub fn spins(&self) -> &[Vec<i8>] {
        &self.spins
    }

    /// Owned copy of the spin rows, for handing to a renderer
    pub fn snapshot(&self) -> Vec<Vec<i8>> {
        self.spins.clone()
    }

    /// Sum of all spins
    pub fn spin_sum(&self) -> i64 {
        self.spins
            .iter()
            .flat_map(|row| row.iter())
            .map(|&s| s as i64)
            .sum()
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.spins {
            for &spin in row {
                write!(f, "{:2}", if spin == 1 { "↑" } else { "↓" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
