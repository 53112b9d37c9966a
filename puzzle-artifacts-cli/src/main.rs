//! Puzzle Artifact Generator CLI
//!
//! Command-line front end for the puzzle-artifacts library. It adds:
//! - Argument parsing and TOML configuration
//! - Logging setup
//! - File I/O and result reporting

use anyhow::{Context, Result};
use clap::Parser;
use puzzle_artifacts::{ArtifactFormat, GenerationSummary, Generator};
use std::path::{Path, PathBuf};

mod config;

/// Puzzle Artifact Generator - turn puzzle input into hex/Verilog artifacts
#[derive(Parser, Debug)]
#[command(name = "puzzle-gen")]
#[command(about = "Generate hardware simulation artifacts from puzzle input", long_about = None)]
#[command(version)]
struct Args {
    /// Puzzle input file (overrides [input].file from the config)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Artifact format: verilog, crossings, packed or splitters
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<ArtifactFormat>,

    /// Output artifact path (default: format's file name next to INPUT)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial tracker position (default: 50)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    start_position: Option<i64>,

    /// Splitter grid width in columns (default: 141)
    #[arg(long, value_name = "N")]
    grid_width: Option<usize>,

    /// Print the generation summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::debug!("puzzle-gen v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using puzzle-artifacts library v{}", puzzle_artifacts::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };

    let Some(input) = args.input.clone().or_else(|| app_config.input.file.clone()) else {
        println!("Puzzle Artifact Generator - No input specified");
        println!("\nQuick Start:");
        println!("  puzzle-gen input.txt");
        println!("  puzzle-gen --format verilog input.txt");
        println!("  puzzle-gen --format splitters grid.txt -o splitters.hex");
        println!("\nUse --help for more options");
        return Ok(());
    };

    let summary = generate(&args, &app_config, &input)?;
    report(&summary, args.json)
}

/// Merge config and flags, then run the generator on one input file
fn generate(
    args: &Args,
    app_config: &config::AppConfig,
    input: &Path,
) -> Result<GenerationSummary> {
    let mut generator_config = app_config.generator_config();
    if let Some(format) = args.format {
        generator_config = generator_config.with_format(format);
    }
    if let Some(position) = args.start_position {
        generator_config = generator_config.with_start_position(position);
    }
    if let Some(width) = args.grid_width {
        generator_config = generator_config.with_grid_width(width);
    }
    let generator =
        Generator::new(generator_config).context("Invalid generator configuration")?;
    log::debug!("Generator configuration: {:?}", generator.config());

    let output = args.output.as_ref().or(app_config.output.path.as_ref());
    generator
        .generate_file(input, output.map(PathBuf::as_path))
        .with_context(|| format!("Failed to generate artifact from {:?}", input))
}

/// Print the run result for the caller
fn report(summary: &GenerationSummary, json: bool) -> Result<()> {
    if let Some(total) = summary.total_crossings {
        log::info!("Total crossings: {}", total);
    }

    if json {
        let text = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
        println!("{}", text);
        return Ok(());
    }

    let output = summary
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    println!(
        "Generated {} with {} {}",
        output,
        summary.records,
        summary.format.record_name()
    );
    if let Some(total) = summary.total_crossings {
        println!("Expected total: {}", total);
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
