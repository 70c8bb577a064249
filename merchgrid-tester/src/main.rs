mod report;
mod sweep;
mod validate;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use merchgrid_catalog::Catalog;
use report::CheckResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CheckMode {
    /// Lint catalog files for authoring mistakes
    Validate,
    /// Sweep browse and pagination invariants across every bucket
    Browse,
    /// Run both checks
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "merchgrid-tester", version = "0.1.0")]
#[command(about = "QA checks for MerchGrid catalogs - linting and browse/pagination sweeps")]
struct Args {
    /// Catalog JSON files to check
    #[arg(required = true)]
    catalogs: Vec<PathBuf>,

    /// Which checks to run
    #[arg(long, value_enum, default_value_t = CheckMode::Both)]
    mode: CheckMode,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Page size used by the browse sweep (must be at least 1)
    #[arg(long, default_value_t = merchgrid_catalog::PAGE_SIZE)]
    #[arg(value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    page_size: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();
    let start = Instant::now();

    let mut results: Vec<CheckResult> = Vec::new();
    for path in &args.catalogs {
        let name = path.display().to_string();
        let json = fs::read_to_string(path).with_context(|| format!("reading {name}"))?;
        let catalog = Catalog::from_json(&json).with_context(|| format!("parsing {name}"))?;

        if matches!(args.mode, CheckMode::Validate | CheckMode::Both) {
            results.push(validate::run(&name, &catalog));
        }
        if matches!(args.mode, CheckMode::Browse | CheckMode::Both) {
            results.push(sweep::run(&name, &catalog, args.page_size, args.verbose));
        }
    }

    write_report(&args, &results, start)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn announce_banner() {
    println!("{}", "🛍  MerchGrid Catalog Tester".bright_cyan().bold());
    println!("{}", "============================".cyan());
}

fn write_report(args: &Args, results: &[CheckResult], start: Instant) -> Result<()> {
    let elapsed = start.elapsed();
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(stdout().lock()),
    };
    match args.report.as_str() {
        "json" => report::write_json_report(&mut *writer, results, elapsed)?,
        _ => report::write_console_report(&mut *writer, results, elapsed)?,
    }
    writer.flush()?;
    Ok(())
}
