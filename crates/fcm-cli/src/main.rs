//! Binary entrypoint: generate a framework compatibility matrix from a list of
//! HAL fqnames.
//!
//! ```bash
//! # fqnames.txt -> framework_compatibility_matrix.xml
//! generate-fcm
//!
//! # Explicit paths, keep going on malformed lines
//! generate-fcm -i device/fqnames.txt -o out/fcm.xml --skip-invalid
//!
//! # Pipe through stdin/stdout
//! cat fqnames.txt | generate-fcm -i - -o -
//! ```

use anyhow::Result;
use clap::Parser;
use fcm_core::{Generator, GeneratorConfig};
use fcm_registry::TracingDiagnostics;
use std::path::PathBuf;
use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

/// Generate a framework compatibility matrix from HAL fqnames
#[derive(Parser, Debug)]
#[command(name = "generate-fcm")]
#[command(version)]
#[command(about = "Merge HAL fqnames into a framework compatibility matrix")]
struct Args {
    /// fqname list, one per line (`-` for stdin) [default: fqnames.txt]
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output matrix (`-` for stdout) [default: framework_compatibility_matrix.xml]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// YAML config file; command-line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip malformed lines instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Fail when a HAL is declared as both HIDL and AIDL
    #[arg(long)]
    strict_conflicts: bool,

    /// Write a JSON run report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(self, config: &mut GeneratorConfig) {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(report) = self.report {
            config.report = Some(report);
        }
        config.skip_invalid |= self.skip_invalid;
        config.strict_conflicts |= self.strict_conflicts;
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    args.apply(&mut config);
    debug!(?config, "starting");

    let report = Generator::new(config).run(&mut TracingDiagnostics)?;
    debug!(
        entries = report.entries,
        skipped = report.lines_skipped,
        conflicts = report.conflicts.len(),
        "done"
    );
    Ok(())
}

/// Logs go to stderr so `-o -` keeps stdout for the document.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
