mod report;
mod runner;

pub use runner::{build_animation, build_sweep, run_sweep};

use self::report::{report_animation_summary, report_sweep_summary};
use crate::config::{Args, Config};
use crate::io::{open_output, setup_output, write_frame, write_results};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::io::Write;
use tracing::info;

pub struct IsingApplication {
    args: Args,
    config: Config,
}

impl IsingApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args.config_file)?;
        Ok(Self { args, config })
    }

    pub fn new(args: Args, config: Config) -> Self {
        Self { args, config }
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.log_file.as_ref());
        info!("Configuration loaded:\n{:?}", self.config);

        let mut output = open_output(self.args.output.as_ref())?;

        match RunMode::determine(&self.args, &self.config) {
            RunMode::TemperatureSweep => {
                let sweep = build_sweep(&self.args, &self.config)?;
                let results = run_sweep(&sweep, &self.args, &self.config)?;
                report_sweep_summary(&results, &sweep.config().params);
                write_results(&mut output, &results, self.args.format)?;
            }
            RunMode::Animation => {
                let mut animation = build_animation(&self.args, &self.config)?;
                let mut written = 0;
                for frame in animation.by_ref() {
                    write_frame(&mut output, &frame)?;
                    written += 1;
                }
                report_animation_summary(&animation, written);
            }
        }

        output.flush().wrap_err("Failed to flush output")?;
        Ok(())
    }
}

/// Read and parse a YAML configuration file, filling in defaults
pub fn load_config(path: &str) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    parse_config(&config_content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config = serde_yml::from_str::<Config>(content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();
    Ok(config)
}

enum RunMode {
    TemperatureSweep,
    Animation,
}

impl RunMode {
    fn determine(args: &Args, config: &Config) -> Self {
        if args.animate || config.is_animation_enabled() {
            RunMode::Animation
        } else {
            RunMode::TemperatureSweep
        }
    }
}
