//! skillscope: scenario-based leadership self-assessment
//!
//! Interactive TUI questionnaire plus headless scoring of saved response
//! files.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use skillscope::cli::{run_assessment, run_questions, run_score};
use skillscope::cli::{QuestionsConfig, RunConfig, ScoreConfig};
use skillscope::config;
use skillscope::reports::ReportFormat;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with dimension info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nMeasured Dimensions:",
        "\n  Psy: Psychological Metrics",
        "\n  CT:  Critical Thinking",
        "\n  LD:  Leadership",
        "\n  Cog: Cognitive Skills",
        "\n  TR:  Team Roles",
        "\n\nOutput Formats:",
        "\n  tui, summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "skillscope")]
#[command(version, long_version = build_long_version())]
#[command(about = "Scenario-based leadership self-assessment in the terminal", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-overall
    2  Error occurred

EXAMPLES:
    # Take the assessment interactively
    skillscope run --subject jane

    # Save a machine-readable report after finishing
    skillscope run -o json -O results.json

    # Score a saved response file in CI
    skillscope score answers.json -o summary --min-overall 40

    # Inspect the question catalog
    skillscope questions -o markdown")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `run` subcommand
#[derive(Parser)]
struct RunArgs {
    /// Subject name shown on the dashboard
    #[arg(long)]
    subject: Option<String>,

    /// TUI color theme (dark, light)
    #[arg(long)]
    theme: Option<String>,

    /// Emit a final report in this format after completion
    #[arg(short = 'o', long)]
    report: Option<ReportFormat>,

    /// Final report file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the saved response JSON file
    responses: PathBuf,

    /// Subject name override
    #[arg(long)]
    subject: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the overall score is below this threshold
    #[arg(long)]
    min_overall: Option<f32>,

    /// Omit the per-recommendation action lists
    #[arg(long)]
    no_actions: bool,
}

/// Arguments for the `questions` subcommand
#[derive(Parser)]
struct QuestionsArgs {
    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively
    Run(RunArgs),

    /// Score a saved response file
    Score(ScoreArgs),

    /// Print the question catalog
    Questions(QuestionsArgs),

    /// Inspect or document the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as YAML
    Show,
    /// Print config file search paths and the active file
    Path,
    /// Print the JSON schema for the config file format
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Layer CLI flags over the discovered config file
    let (mut app_config, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("loaded configuration from {}", path.display());
    }
    if cli.no_color {
        app_config.output.no_color = true;
    }
    app_config.validate().context("invalid configuration")?;

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Run(args) => {
            let config = RunConfig {
                subject: args
                    .subject
                    .unwrap_or_else(|| app_config.subject_name().to_string()),
                theme: args.theme.unwrap_or_else(|| app_config.tui.theme.clone()),
                tick_rate_ms: app_config.tui.tick_rate_ms,
                report: args.report,
                output_file: args.output_file,
                no_color: app_config.output.no_color,
                quiet: cli.quiet,
            };
            run_assessment(config)?
        }

        Commands::Score(args) => {
            let config = ScoreConfig {
                responses_path: args.responses,
                subject: args.subject,
                output: args.output,
                output_file: args.output_file,
                min_overall: args.min_overall,
                no_actions: args.no_actions,
                no_color: app_config.output.no_color,
                quiet: cli.quiet,
            };
            run_score(config)?
        }

        Commands::Questions(args) => {
            let config = QuestionsConfig {
                output: args.output,
                output_file: args.output_file,
                quiet: cli.quiet,
            };
            run_questions(config)?
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml = serde_yaml::to_string(&app_config)
                        .context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    eprintln!("Config file search paths (in order):");
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir()
                            .ok()
                            .map(|p| p.display().to_string()),
                        dirs::config_dir().map(|p| p.join("skillscope").display().to_string()),
                        dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    match config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
                ConfigAction::Schema => {
                    println!("{}", config::generate_json_schema());
                }
            }
            0
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "skillscope", &mut io::stdout());
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
