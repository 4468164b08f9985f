//! mar-tools: MAR technique-selection decision support
//!
//! Scores a hydrogeological case record, classifies its completeness tier,
//! and ranks the three candidate recharge technique groups.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use mar_tools::{
    cli::{run_assess, run_scenario, run_schema, run_weights, AssessConfig, SchemaTarget},
    config::{load_or_default, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scheme info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nDecision scheme:",
        "\n  Indicators: V1..V35 over 10 case modules",
        "\n  Criteria:   C1..C5 (AHP-weighted, WLC-combined)",
        "\n  Groups:     G1 cauces, G2 pozos, G3 infiltración superficial",
        "\n\nOutput Formats:",
        "\n  json, markdown, summary"
    )
}

#[derive(Parser)]
#[command(name = "mar-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Decision support for managed aquifer recharge technique selection", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Threshold not met (--min-score, --tier, or weights --strict)
    3  Error occurred

EXAMPLES:
    # Full assessment with uniform criteria weights
    mar-tools assess caso.json

    # CI-style gate: require tier 2 completeness and a suitability index >= 2.5
    mar-tools assess caso.json --tier 2 --min-score 2.5 -o summary

    # Custom AHP judgments
    mar-tools assess caso.json --matrix juicios.json -o markdown -O informe.md

    # Where does this case stand?
    mar-tools scenario caso.json

    # Check judgment consistency before trusting the ranking
    mar-tools weights juicios.json --strict")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Path to the case file (JSON)
    case: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Pairwise-comparison matrix file (JSON, 5x5 reciprocal)
    #[arg(long)]
    matrix: Option<PathBuf>,

    /// Score overrides file (JSON)
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Let per-group custom overrides participate
    #[arg(long)]
    custom_influence: bool,

    /// Fail when the winner's suitability index is below this
    #[arg(long)]
    min_score: Option<f64>,

    /// Fail when the completeness tier is below this (0..=3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    tier: Option<u8>,
}

/// Arguments for the `scenario` subcommand
#[derive(Parser)]
struct ScenarioArgs {
    /// Path to the case file (JSON)
    case: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `weights` subcommand
#[derive(Parser)]
struct WeightsArgs {
    /// Pairwise-comparison matrix file (JSON); falls back to the configured
    /// or uniform matrix
    matrix: Option<PathBuf>,

    /// Non-zero exit when CR exceeds the configured threshold
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `schema` subcommand
#[derive(Parser)]
struct SchemaArgs {
    /// What to emit
    #[arg(value_enum, default_value = "case")]
    target: SchemaTarget,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a case and rank the technique groups
    Assess(AssessArgs),
    /// Classify a case's completeness tier
    Scenario(ScenarioArgs),
    /// Derive AHP weights from pairwise judgments
    Weights(WeightsArgs),
    /// Emit JSON Schemas and example configuration
    Schema(SchemaArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration (explicit path, discovery, or defaults)
    let (app_config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    let config_errors = app_config.validate();
    if !config_errors.is_empty() {
        for error in &config_errors {
            tracing::error!("config: {error}");
        }
        std::process::exit(exit_codes::ERROR);
    }

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Assess(args) => run_assess(
            AssessConfig {
                case_path: args.case,
                matrix_path: args.matrix,
                overrides_path: args.overrides,
                output: args.output,
                output_file: args.output_file,
                min_score: args.min_score,
                min_tier: args.tier,
                custom_influence: args.custom_influence,
                quiet: cli.quiet,
            },
            &app_config,
        )?,
        Commands::Scenario(args) => {
            run_scenario(args.case, args.output, args.output_file, cli.quiet)?
        }
        Commands::Weights(args) => run_weights(
            args.matrix,
            args.strict,
            args.output,
            args.output_file,
            cli.quiet,
            &app_config,
        )?,
        Commands::Schema(args) => run_schema(args.target, args.output_file, cli.quiet)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            exit_codes::SUCCESS
        }
    };

    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
    Ok(())
}
