//! Output formatting and logging utilities

use crate::error::Result;
use crate::rdf::RadialDistribution;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Format as HH:MM:SS (only seconds precision)
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup log output to file or stdout
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
                info!("Log output written to: {}", path);
            }
            Err(err) => {
                eprintln!("Could not create log file {}: {}", path, err);
            }
        },
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
}

/// Write the sampled g(r) and the dilute-limit curve as two whitespace-separated blocks
pub fn write_rdf_table<W: Write>(
    writer: &mut W,
    rdf: &RadialDistribution,
    dilute_limit: &[(f64, f64)],
) -> Result<()> {
    writeln!(writer, "# sampled g(r)")?;
    writeln!(writer, "# r g(r)")?;
    for (r, g) in rdf.points() {
        writeln!(writer, "{:.6} {:.8}", r, g)?;
    }

    writeln!(writer)?;
    writeln!(writer)?;
    writeln!(writer, "# dilute limit")?;
    writeln!(writer, "# r exp(-beta*U(r))")?;
    for &(r, g) in dilute_limit {
        writeln!(writer, "{:.6} {:.8}", r, g)?;
    }
    Ok(())
}

pub fn write_rdf_table_to_file<P: AsRef<Path>>(
    path: P,
    rdf: &RadialDistribution,
    dilute_limit: &[(f64, f64)],
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_rdf_table(&mut writer, rdf, dilute_limit)?;
    writer.flush()?;
    info!("g(r) table written to: {}", path.as_ref().display());
    Ok(())
}
