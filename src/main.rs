//! cfgcheck — config conformance checker CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use cfgcheck::config;
use cfgcheck::constants;
use cfgcheck::env;
use cfgcheck::models;
use cfgcheck::reader;
use cfgcheck::validator;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{CheckArgs, Cli, Command, InspectArgs, OutputFormat};
use config::Config;
use env::Env;
use models::{ExpectedConfig, Summary, report};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Validate each actual file against the reference config.
fn run_check(args: CheckArgs) -> Result<()> {
    let work_dir = std::env::current_dir().ok();
    let config = Config::load(work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;

    // Apply config defaults where CLI didn't override
    let sentinel = args
        .sentinel
        .clone()
        .unwrap_or_else(|| config.check.sentinel.clone());
    let format = resolve_format(&args, &config);

    let expected_map =
        reader::read(&args.expected).context("failed to load reference config")?;
    let expected = ExpectedConfig::from_map(&expected_map, &sentinel);

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let actual = reader::read(path).context("failed to load config")?;
        let label = path.display().to_string();
        reports.push(validator::validate(&actual, &expected, &label));
    }

    let rendered = format.render(&reports, args.quiet);
    print!("{rendered}");

    // Exit with non-zero code when the overall flag is set
    let flag = report::overall_flag(&reports);
    if flag != 0 && config.check.fail && !args.no_fail {
        let summary = Summary::from_reports(&reports);
        bail!(
            "found {} mismatch(es) across {} file(s)",
            summary.mismatches,
            summary.failed,
        );
    }

    Ok(())
}

/// Resolve the output format from CLI args and config.
fn resolve_format(args: &CheckArgs, config: &Config) -> OutputFormat {
    if let Some(format) = args.format {
        return format;
    }
    match config.output.format.as_deref() {
        Some(name) => name.parse().unwrap_or_else(|e| {
            eprintln!("Warning: {e}; using terminal");
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

/// Parse one config file and pretty-print its contents.
fn run_inspect(args: InspectArgs) -> Result<()> {
    use colored::Colorize;

    let map = reader::read(&args.file).context("failed to load config")?;

    println!(
        "  {} {}",
        "✔".green().bold(),
        args.file.display().to_string().bold()
    );

    let mut params = 0;
    for (section, entries) in &map {
        println!("  [{}]", section.cyan());
        for (key, value) in entries {
            println!("    {key} = {value}");
            params += 1;
        }
    }

    println!(
        "  {}",
        format!("{} section(s), {} parameter(s)", map.len(), params).dimmed()
    );
    Ok(())
}
