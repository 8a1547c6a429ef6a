//! Freqalloc CLI: encode frequency allocation instances as WCSP files.
//!
//! Exits with status 0 when the requested file was written (or the instance
//! checked), and 1 after printing a diagnostic otherwise.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use freqalloc::console;
use freqalloc::prelude::*;
use freqalloc::{ConfigError, EncodeOutcome, SpacedStation};
use owo_colors::OwoColorize;
use thiserror::Error;

/// Configuration picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "freqalloc.toml";

#[derive(Parser, Debug)]
#[command(
    name = "freqalloc",
    version,
    about = "Encode frequency allocation problems as weighted CSP (WCSP) files"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, global = true)]
    quiet: bool,

    /// Configuration file path (TOML, or YAML by extension)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode an instance into a .wcsp file
    Encode(EncodeArgs),

    /// Validate an instance and report its domains without writing anything
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Instance file (JSON)
    model: PathBuf,

    /// Output file; overrides the directory, prefix and work name
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Directory receiving the generated file
    #[arg(long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Work name used in the file name instead of the work queue file
    #[arg(long = "work-name")]
    work_name: Option<String>,

    /// Problem name written in the header
    #[arg(long = "problem-name")]
    problem_name: Option<String>,

    /// How the header's maximum domain size is computed
    #[arg(long = "max-domain-size", value_enum)]
    max_domain_size: Option<DomainSizeArg>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Instance file (JSON)
    model: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DomainSizeArg {
    /// Twice the longest frequency list of any station
    Original,
    /// Largest number of valid pairs of any station
    TupleCount,
}

impl From<DomainSizeArg> for MaxDomainSizePolicy {
    fn from(arg: DomainSizeArg) -> Self {
        match arg {
            DomainSizeArg::Original => MaxDomainSizePolicy::Original,
            DomainSizeArg::TupleCount => MaxDomainSizePolicy::TupleCount,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encode(#[from] FreqAllocError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init_with_level(console::level_for_verbosity(
        cli.common.verbosity,
        cli.common.quiet,
    ));

    let result = match &cli.command {
        Command::Encode(args) => encode(&cli.common, args),
        Command::Check(args) => check(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(common: &CommonArgs) -> Result<EncoderConfig, ConfigError> {
    match &common.config {
        Some(path) => EncoderConfig::load(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => EncoderConfig::load(DEFAULT_CONFIG_FILE),
        None => Ok(EncoderConfig::default()),
    }
}

fn encode(common: &CommonArgs, args: &EncodeArgs) -> Result<(), CliError> {
    let mut config = load_config(common)?;
    if let Some(dir) = &args.output_dir {
        config = config.with_output_directory(dir);
    }
    if let Some(name) = &args.work_name {
        config = config.with_work_name(name);
    }
    if let Some(name) = &args.problem_name {
        config = config.with_problem_name(name);
    }
    if let Some(policy) = args.max_domain_size {
        config = config.with_max_domain_size(policy.into());
    }
    config.validate()?;

    let model = FrequencyModel::from_json_file(&args.model)?;
    let outcome = match &args.output {
        Some(path) => EncodeOutcome {
            path: path.clone(),
            summary: WcspEncoder::with_config(&model, &config).encode_to_path(path)?,
        },
        None => encode_model(&model, &config)?,
    };

    println!("{}", outcome.path.display());
    Ok(())
}

fn check(args: &CheckArgs) -> Result<(), CliError> {
    let model = FrequencyModel::from_json_file(&args.model)?;
    let spaced = WcspEncoder::new(&model).prepare()?;

    println!(
        "{} stations │ {} interferences │ {} connections",
        model.station_count(),
        model.interferences.len(),
        model.connections.len()
    );
    for (index, station) in spaced.iter().enumerate() {
        println!("{}", station_line(index, station));
    }
    for (region, capacity) in model.regions.iter().enumerate() {
        println!(
            "region {}: {} stations, at most {} frequencies",
            region,
            model.stations_in_region(region).count(),
            capacity
        );
    }
    println!("{}", "ok".bright_green().bold());
    Ok(())
}

fn station_line(index: usize, station: &SpacedStation) -> String {
    format!(
        "station {} (id {}, region {}): {} pairs",
        index,
        station.id,
        station.region,
        station.tuple_count()
    )
}
