use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cdfcheck::loader;
use cdfcheck::validation;

#[derive(Parser)]
#[command(
    name = "cdfcheck",
    about = "A CLI tool that validates CDF tables against a metadata schema",
    version,
    author,
    long_about = None
)]
struct Cli {
    /// Path to the metadata JSON document
    #[arg(long, value_name = "FILE")]
    metadata: PathBuf,

    /// Path to the CDF table (CSV with a header row)
    #[arg(long, value_name = "FILE")]
    cdf: PathBuf,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let metadata = loader::load_metadata(&cli.metadata)?;
    let rows = loader::load_table(&cli.cdf)?;

    let findings = validation::validate_table(&metadata, &rows)?;
    println!("{}", validation::render_report(&findings));

    if !findings.is_empty() {
        anyhow::bail!("validation reported {} finding(s)", findings.len());
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("cdfcheck=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("cdfcheck=info"), // -v: info messages
        _ => EnvFilter::new("cdfcheck=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
