use std::path::Path;

use clap::Parser;
use tracing::{debug, error};

use breakeven::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ScenarioCommand};
use breakeven::adapter::inbound::cli::diagnostic::TomlError;
use breakeven::adapter::inbound::cli::output::{self, OutputConfig};
use breakeven::adapter::inbound::cli::{about, curve, paths, scenario, solve, value};
use breakeven::error::{ConfigError, Error, Result};
use breakeven::infrastructure::config::settings::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(&cli) {
        error!(error = %e, "Command failed");
        report(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(level) = log_level(output::verbosity(), output::is_quiet()) {
        config.logging.level = level.to_string();
    }
    config.init_logging();
    debug!(command = ?cli.command, "Dispatching");

    match &cli.command {
        Commands::Solve(args) => solve::execute(args, &config),
        Commands::Curve(args) => curve::execute(args, &config),
        Commands::Value(args) => value::execute(args, &config),
        Commands::Scenario(ScenarioCommand::Init(args)) => {
            scenario::execute_init(&args.path, args.force)
        }
        Commands::Scenario(ScenarioCommand::Validate(args)) => {
            scenario::execute_validate(&args.scenario)
        }
        Commands::About => about::execute(&config),
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default(paths::default_config()),
    }
}

/// Log level implied by `-v`/`-q`, overriding the configured one.
fn log_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    match (verbose, quiet) {
        (0, true) => Some("error"),
        (0, false) => None,
        (1, _) => Some("info"),
        (2, _) => Some("debug"),
        _ => Some("trace"),
    }
}

fn report(e: &Error) {
    match e {
        Error::Config(ConfigError::ParseFile {
            name,
            content,
            source,
        }) if !output::is_json() => {
            let diagnostic = TomlError::from_toml(name, content, source)
                .with_help("check the key names and value types against the template");
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
        _ => output::error(&e.to_string()),
    }
}
