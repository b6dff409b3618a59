//! Command-line interface definitions.
//!
//! Defines the CLI structure for the breakeven application using `clap`.
//! Every calculation reads its inputs from a scenario file; `--rate` and
//! `--duration` override the file's `[mode]` table.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::params::SolveMode;

/// Break-even calculator for water and sewer connection contracts
#[derive(Parser, Debug)]
#[command(name = "breakeven")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the application config [default: ~/.breakeven/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the breakeven CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a scenario for its break-even point
    Solve(SolveArgs),

    /// Write the cumulative revenue and expense curves as CSV
    Curve(CurveArgs),

    /// Contract value of a single connection
    Value(ValueArgs),

    /// Create and check scenario files
    #[command(subcommand)]
    Scenario(ScenarioCommand),

    /// Show project and author information
    About,
}

/// Subcommands for `breakeven scenario`.
#[derive(Subcommand, Debug)]
pub enum ScenarioCommand {
    /// Write a documented scenario template.
    Init(ScenarioInitArgs),
    /// Parse and validate a scenario without solving it.
    Validate(ScenarioPathArg),
}

/// Mutually exclusive overrides of the scenario's solve mode.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ModeArgs {
    /// Solve for duration at this many connections per month.
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Solve for the connection rate that breaks even in this many months.
    #[arg(long)]
    pub duration: Option<Decimal>,
}

impl ModeArgs {
    /// Solve mode requested on the command line, if any.
    #[must_use]
    pub fn solve_mode(&self) -> Option<SolveMode> {
        match (self.rate, self.duration) {
            (Some(rate), _) => Some(SolveMode::ConnectionRate(rate)),
            (None, Some(months)) => Some(SolveMode::Duration(months)),
            (None, None) => None,
        }
    }
}

/// Report format for `solve`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Labelled report, one metric per line
    #[default]
    Text,
    /// Two-column table
    Table,
    /// JSON document
    Json,
    /// Header row plus one data row
    Csv,
}

/// Arguments for the `solve` subcommand.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to the scenario file.
    pub scenario: PathBuf,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `curve` subcommand.
#[derive(Parser, Debug)]
pub struct CurveArgs {
    /// Path to the scenario file.
    pub scenario: PathBuf,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Write the CSV to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `value` subcommand.
#[derive(Parser, Debug)]
pub struct ValueArgs {
    /// Connection variant: 25mm, 32mm, mainline or manhole.
    pub variant: String,

    /// Connection length in metres.
    pub length: Decimal,
}

/// Arguments for `scenario init`.
#[derive(Parser, Debug)]
pub struct ScenarioInitArgs {
    /// Output path for the generated scenario file.
    #[arg(default_value = "scenario.toml")]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Shared argument struct for commands that take only a scenario path.
#[derive(Parser, Debug)]
pub struct ScenarioPathArg {
    /// Path to the scenario file.
    pub scenario: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve_defaults() {
        let cli = Cli::try_parse_from(["breakeven", "solve", "scenario.toml"]).unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.scenario, PathBuf::from("scenario.toml"));
        assert_eq!(args.format, ReportFormat::Text);
        assert!(args.mode.solve_mode().is_none());
        assert!(args.output.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_rate_override() {
        let cli =
            Cli::try_parse_from(["breakeven", "solve", "s.toml", "--rate", "12.5"]).unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(
            args.mode.solve_mode(),
            Some(SolveMode::ConnectionRate(dec!(12.5)))
        );
    }

    #[test]
    fn test_parse_duration_override() {
        let cli = Cli::try_parse_from(["breakeven", "curve", "s.toml", "--duration", "9"]).unwrap();
        let Commands::Curve(args) = cli.command else {
            panic!("expected curve");
        };
        assert_eq!(args.mode.solve_mode(), Some(SolveMode::Duration(dec!(9))));
    }

    #[test]
    fn test_rate_and_duration_conflict() {
        let result = Cli::try_parse_from([
            "breakeven",
            "solve",
            "s.toml",
            "--rate",
            "10",
            "--duration",
            "6",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_format_and_output() {
        let cli = Cli::try_parse_from([
            "breakeven", "solve", "s.toml", "--format", "csv", "-o", "out.csv",
        ])
        .unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.format, ReportFormat::Csv);
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "breakeven", "about", "--json", "-vv", "--config", "alt.toml",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::About));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_parse_value_command() {
        let cli = Cli::try_parse_from(["breakeven", "value", "25mm", "10"]).unwrap();
        let Commands::Value(args) = cli.command else {
            panic!("expected value");
        };
        assert_eq!(args.variant, "25mm");
        assert_eq!(args.length, dec!(10));
    }

    #[test]
    fn test_parse_scenario_init_default_path() {
        let cli = Cli::try_parse_from(["breakeven", "scenario", "init"]).unwrap();
        let Commands::Scenario(ScenarioCommand::Init(args)) = cli.command else {
            panic!("expected scenario init");
        };
        assert_eq!(args.path, PathBuf::from("scenario.toml"));
        assert!(!args.force);
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["breakeven", "--color", "never", "about"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }
}
