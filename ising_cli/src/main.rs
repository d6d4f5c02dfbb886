//! Ising Simulation Command-Line Interface
//!
//! Runs a temperature sweep or streams animation frames from a YAML configuration.

use color_eyre::eyre::Result;
use ising_cli::app::IsingApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    IsingApplication::from_cli()?.run()
}
