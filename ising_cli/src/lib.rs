// Command-line front end for the Ising Monte Carlo core

pub mod app;
pub mod config;
pub mod io;
