//! Output formatting and logging utilities

use crate::config::OutputFormat;
use color_eyre::eyre::{Result, WrapErr};
use ising::{Frame, SweepResults};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Wall-clock timer with second precision (HH:MM:SS, UTC)
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let total_seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup logging to a file or stderr
///
/// A subscriber that is already installed is left in place.
pub fn setup_output(log_path: Option<&String>) {
    match log_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                let _ = Registry::default().with(file_layer).try_init();
                info!("Log will be written to: {}", path);
            }
            Err(err) => eprintln!("Could not create log file {}: {}", path, err),
        },
        None => {
            let stdout_layer = layer()
                .with_writer(io::stderr)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            let _ = Registry::default().with(stdout_layer).try_init();
        }
    }
}

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&String>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Unable to create output file: {}", path))?;
            info!("Output will be written to: {}", path);
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Write the per-temperature series in the requested format
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &SweepResults,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, results),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, results)
                .wrap_err("Failed to serialize sweep results")?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_csv<W: Write>(writer: &mut W, results: &SweepResults) -> Result<()> {
    writeln!(
        writer,
        "temperature,magnetization,energy,specific_heat,acceptance_rate"
    )?;
    for point in results.points() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            point.temperature,
            cell(point.magnetization),
            cell(point.energy),
            cell(point.specific_heat),
            point.acceptance_rate
        )?;
    }
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write one animation frame as a header line plus N rows of `+`/`-`
pub fn write_frame<W: Write>(writer: &mut W, frame: &Frame) -> Result<()> {
    writeln!(writer, "# frame {} T={}", frame.index, frame.temperature)?;
    for row in &frame.spins {
        let line: String = row
            .iter()
            .map(|&s| if s > 0 { '+' } else { '-' })
            .collect();
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
