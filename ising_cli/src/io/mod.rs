//! Input/Output operations for Ising simulations
//!
//! This module handles logging setup and writing sweep results and
//! animation frames.

mod output;

pub use output::{open_output, setup_output, write_frame, write_results};
