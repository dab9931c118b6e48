//! Clap argument types and output format dispatch.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cfgcheck::models::ValidationReport;

/// Config conformance checker for CI release gates.
#[derive(Parser, Debug)]
#[command(
    name = "cfgcheck",
    version = cfgcheck::constants::VERSION,
    about = "Validate deployed config files against a reference config",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Validate config files against a reference config.
    Check(CheckArgs),

    /// Parse one config file and print its sections and keys.
    Inspect(InspectArgs),

    /// Print version information.
    Version,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Config files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Reference config file describing the expected parameters.
    #[arg(long, short = 'e')]
    pub expected: PathBuf,

    /// Output format (default: terminal, or the configured default).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Expected-value token marking a key that must not be present.
    #[arg(long)]
    pub sentinel: Option<String>,

    /// Never exit non-zero on mismatches.
    #[arg(long, default_value_t = false)]
    pub no_fail: bool,

    /// Suppress per-file success lines. Mismatches and the summary still print.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

/// Arguments for the `inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the config file to inspect.
    pub file: PathBuf,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Github,
}

impl OutputFormat {
    /// Render reports using the renderer for this format.
    pub fn render(&self, reports: &[ValidationReport], quiet: bool) -> String {
        use cfgcheck::output::ReportRenderer;
        match self {
            OutputFormat::Terminal => {
                cfgcheck::output::terminal::TerminalRenderer { quiet }.render(reports)
            }
            OutputFormat::Json => cfgcheck::output::json::JsonRenderer.render(reports),
            OutputFormat::Github => cfgcheck::output::github::GithubRenderer.render(reports),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "github" => Ok(OutputFormat::Github),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgcheck::models::Mismatch;

    #[test]
    fn parse_check_command() {
        let cli = Cli::try_parse_from([
            "cfgcheck", "check", "a.cfg", "b.cfg", "--expected", "ref.cfg",
        ])
        .unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.files.len(), 2);
                assert_eq!(args.expected, PathBuf::from("ref.cfg"));
                assert!(args.format.is_none());
                assert!(args.sentinel.is_none());
                assert!(!args.no_fail);
                assert!(!args.quiet);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_check_short_flags() {
        let cli =
            Cli::try_parse_from(["cfgcheck", "check", "a.cfg", "-e", "ref.cfg", "-q"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert!(args.quiet);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn check_requires_files() {
        let result = Cli::try_parse_from(["cfgcheck", "check", "--expected", "ref.cfg"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_requires_expected() {
        let result = Cli::try_parse_from(["cfgcheck", "check", "a.cfg"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_format_value() {
        let cli = Cli::try_parse_from([
            "cfgcheck", "check", "a.cfg", "-e", "ref.cfg", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.format, Some(OutputFormat::Json)),
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_inspect_command() {
        let cli = Cli::try_parse_from(["cfgcheck", "inspect", "app.cfg"]).unwrap();
        match cli.command {
            Command::Inspect(args) => assert_eq!(args.file, PathBuf::from("app.cfg")),
            _ => panic!("expected Inspect command"),
        }
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("github".parse::<OutputFormat>(), Ok(OutputFormat::Github));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    fn sample_reports() -> Vec<ValidationReport> {
        let mut failing = ValidationReport::new("conf/stage.cfg");
        failing.record(Mismatch::section_missing("cache"));
        vec![ValidationReport::new("conf/prod.cfg"), failing]
    }

    #[test]
    fn output_format_render_terminal() {
        let output = OutputFormat::Terminal.render(&sample_reports(), false);
        assert!(output.contains("conf/prod.cfg"));
        assert!(output.contains("Section [cache] is missing"));
    }

    #[test]
    fn output_format_render_json() {
        let output = OutputFormat::Json.render(&sample_reports(), false);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["flag"], 1);
    }

    #[test]
    fn output_format_render_github() {
        let output = OutputFormat::Github.render(&sample_reports(), false);
        assert!(output.contains("::error"));
    }

    #[test]
    fn output_format_render_empty_reports() {
        // All formats should handle an empty report list without panicking
        let empty: Vec<ValidationReport> = vec![];
        let _ = OutputFormat::Terminal.render(&empty, false);
        let _ = OutputFormat::Json.render(&empty, false);
        let _ = OutputFormat::Github.render(&empty, false);
    }
}
