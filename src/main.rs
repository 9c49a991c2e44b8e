//! fuzzy-vikor - Ranks alternatives from expert linguistic judgments.
//!
//! Reads an assessment document (or the built-in sample), runs the fuzzy
//! VIKOR pipeline and prints the report. Settings come from `FUZZY_VIKOR__*`
//! environment variables and are overridden by command-line flags.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};

use fuzzy_vikor::adapters::{
    FileAssessmentSource, InMemoryAssessmentSource, JsonReportSink, TextReportSink,
};
use fuzzy_vikor::application::{EvaluateAssessmentCommand, EvaluateAssessmentHandler};
use fuzzy_vikor::config::{
    AppConfig, ConfigError, LoggingConfig, ReportFormat, ValidationError,
};
use fuzzy_vikor::domain::foundation::{Defuzzification, DomainError, StrategyWeight};
use fuzzy_vikor::ports::{AssessmentSource, ReportSink};

/// Command-line arguments for fuzzy-vikor
#[derive(Parser, Debug)]
#[command(name = "fuzzy-vikor")]
#[command(about = "Fuzzy VIKOR group decision ranking")]
#[command(version)]
struct Cli {
    /// Assessment document (.json, .yaml or .yml)
    #[arg(short, long, required_unless_present = "sample", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Evaluate the built-in sample assessment
    #[arg(long)]
    sample: bool,

    /// Strategy weight v in [0, 1]
    #[arg(short = 'v', long, value_parser = parse_strategy_weight)]
    strategy_weight: Option<StrategyWeight>,

    /// Defuzzification rule: centroid or mode_weighted
    #[arg(short, long)]
    defuzzification: Option<Defuzzification>,

    /// Report format: text or json
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

fn parse_strategy_weight(value: &str) -> Result<StrategyWeight, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    StrategyWeight::try_new(parsed).map_err(|e| e.to_string())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), ValidationError> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn run(cli: Cli, config: AppConfig) -> Result<(), CliError> {
    let source: Arc<dyn AssessmentSource> = match &cli.input {
        Some(path) => Arc::new(FileAssessmentSource::new(path)),
        None => Arc::new(InMemoryAssessmentSource::sample()),
    };

    let format = cli.format.unwrap_or(config.report.format);
    let sink: Arc<dyn ReportSink> = match format {
        ReportFormat::Text => Arc::new(TextReportSink::new()),
        ReportFormat::Json => Arc::new(JsonReportSink::new()),
    };

    let handler = EvaluateAssessmentHandler::new(source, sink, config.engine.settings()?);
    let result = handler.handle(EvaluateAssessmentCommand {
        strategy_weight: cli.strategy_weight,
        defuzzification: cli.defuzzification,
    })?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &result.report)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{}", result.report),
    }

    Ok(())
}

/// Loads and validates configuration, then installs the subscriber.
fn prepare() -> Result<AppConfig, CliError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match prepare() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "evaluation failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
