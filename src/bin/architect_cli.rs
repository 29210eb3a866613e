//! Guided Component Architect CLI
//!
//! Generates design-system-compliant Angular components from natural-language
//! descriptions, or validates existing component source.
//!
//! # Usage
//!
//! ```bash
//! # Generate a component (requires GROQ_API_KEY, or DEMO_MODE=true)
//! architect_cli generate "A login card with a primary action button"
//!
//! # Validate an existing component file
//! architect_cli validate --file login-card.component.ts
//!
//! # Machine-readable report
//! architect_cli validate --file x.ts --format json
//! ```
//!
//! Diagnostics go to stderr; only the final component source goes to stdout,
//! so output can be piped or redirected.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use component_architect::design_system::{DesignTokenSet, DEFAULT_DESIGN_SYSTEM_PATH};
use component_architect::generator::{ComponentGenerator, DemoGenerator, LlmComponentGenerator};
use component_architect::orchestrator::{run_pipeline, ArchitectConfig};
use component_architect::validator::{validate_component, ValidationReport};

#[derive(Parser)]
#[command(name = "architect_cli")]
#[command(version = "0.1.0")]
#[command(about = "Guided Component Architect: generate and validate design-system-compliant Angular components")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the design-system token file
    #[arg(long, global = true, default_value = DEFAULT_DESIGN_SYSTEM_PATH)]
    tokens: PathBuf,

    /// Output format for validation reports
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a component from a natural-language description
    Generate {
        /// Description of the desired component
        description: String,

        /// Self-correction retries after the initial generation
        #[arg(long, default_value_t = 2)]
        max_retries: usize,

        /// Skip the LLM call and use the built-in demo fixture
        #[arg(long, env = "DEMO_MODE")]
        demo: bool,
    },

    /// Validate existing component source against the design system
    Validate {
        /// Input file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let tokens = match DesignTokenSet::load_from_path(&cli.tokens) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Generate {
            description,
            max_retries,
            demo,
        } => run_generate(&description, &tokens, max_retries, demo, cli.format).await,
        Commands::Validate { file } => run_validate(file, &tokens, cli.format),
    }
}

async fn run_generate(
    description: &str,
    tokens: &DesignTokenSet,
    max_retries: usize,
    demo: bool,
    format: OutputFormat,
) -> ExitCode {
    let generator: Box<dyn ComponentGenerator> = if demo {
        Box::new(DemoGenerator)
    } else {
        match LlmComponentGenerator::from_env() {
            Ok(g) => Box::new(g),
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        }
    };

    let config = ArchitectConfig { max_retries };
    let outcome = match run_pipeline(description, tokens, generator.as_ref(), &config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    print_report(&outcome.report, format);
    // the component source itself is the only stdout payload
    println!("{}", outcome.code);

    if outcome.report.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_validate(file: Option<PathBuf>, tokens: &DesignTokenSet, format: OutputFormat) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let report = validate_component(&source, tokens);
    print_report(&report, format);

    if report.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_source(file: Option<PathBuf>) -> anyhow::Result<String> {
    use anyhow::Context;
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_report(report: &ValidationReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            // report JSON goes to stderr to keep stdout clean for piped code
            eprintln!(
                "{}",
                serde_json::to_string_pretty(report).expect("report serializes")
            );
        }
        OutputFormat::Pretty => {
            if report.is_valid {
                eprintln!("{}", "validation passed".green().bold());
            } else {
                eprintln!(
                    "{} {} error(s)",
                    "validation failed:".red().bold(),
                    report.errors.len()
                );
                for error in &report.errors {
                    eprintln!("  {} {error}", "✗".red());
                }
            }
            for warning in &report.warnings {
                eprintln!("  {} {warning}", "!".yellow());
            }
        }
    }
}
