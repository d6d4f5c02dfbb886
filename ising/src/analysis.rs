//! Reference values for the square-lattice Ising model

/// Critical temperature for the 2D Ising model (Onsager's exact result)
/// T_c = 2J / (k_B * ln(1 + √2)) ≈ 2.269 J/k_B
pub fn critical_temperature_2d() -> f64 {
    2.0 / (1.0 + 2.0_f64.sqrt()).ln()
}

/// Critical temperature in units of the given J and k_B
pub fn critical_temperature(coupling: f64, boltzmann: f64) -> f64 {
    critical_temperature_2d() * coupling / boltzmann
}

/// Total energy of the fully aligned N x N lattice
///
/// Each site owns two aligned bonds, so E = -2 J N².
pub fn ground_state_energy(size: usize, coupling: f64) -> f64 {
    -2.0 * coupling * (size * size) as f64
}
