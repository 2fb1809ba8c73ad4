// cargo run --bin tle-report -- --output /tmp/stats.txt active.txt

use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, prelude::*};
use std::path::PathBuf;
use tracing::info;

/// Summarize a TLE catalog: satellite count, oldest epoch, launch years and inclinations
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Report format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file path to write.
    ///
    /// The report is printed to stdout when not provided.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TLE file to read, stdin is used when not provided
    input: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let opts = Opts::parse();

    let content = match &opts.input {
        Some(path) => {
            info!(path = %path.display(), "Reading TLE file");
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let stats = tleparse::aggregate(&content);
    info!(satellites = stats.satellite_count, "Parsed TLE entries");

    let report = match opts.format {
        Format::Text => stats.report(),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&stats)?;
            json.push('\n');
            json
        }
    };

    match &opts.output {
        Some(path) => {
            let mut output = File::create(path)?;
            output.write_all(report.as_bytes())?;
            info!(path = %path.display(), "Statistics saved");
        }
        None => io::stdout().lock().write_all(report.as_bytes())?,
    }

    Ok(())
}
