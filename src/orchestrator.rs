//! Self-correcting generation loop
//!
//! Single entry point for: describe -> generate -> validate -> retry.
//! On validation failure the rendered error list is fed back to the generator
//! for a corrected attempt, up to a fixed retry budget. Retries are
//! sequential and bounded; when the budget is exhausted the last generated
//! source is returned together with its (possibly non-empty) report rather
//! than an error, so callers always get a best-effort component.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::design_system::DesignTokenSet;
use crate::generator::ComponentGenerator;
use crate::validator::{validate_component, ValidationReport};

/// Maximum number of self-correction attempts after the initial generation.
pub const DEFAULT_MAX_RETRIES: usize = 2;

/// Configuration for the generation pipeline.
#[derive(Debug, Clone)]
pub struct ArchitectConfig {
    /// Self-correction retries allowed after the first generation.
    pub max_retries: usize,
}

impl Default for ArchitectConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Final result of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Last generated component source (valid or best-effort).
    pub code: String,
    /// Validation report for `code`.
    pub report: ValidationReport,
    /// Total generation attempts made (1 initial + retries used).
    pub attempts: usize,
}

/// End-to-end loop: generate, validate, and self-correct until the report is
/// clean or the retry budget is exhausted.
///
/// Generator failures (network, provider errors) propagate; validation
/// failures never do - they drive the retry loop and are reported in the
/// outcome.
pub async fn run_pipeline(
    description: &str,
    tokens: &DesignTokenSet,
    generator: &dyn ComponentGenerator,
    config: &ArchitectConfig,
) -> Result<PipelineOutcome> {
    info!("generating initial component");
    let mut code = generator
        .generate(description, tokens)
        .await
        .context("initial generation failed")?;

    let mut report = validate_component(&code, tokens);
    let mut attempts = 1;
    log_report(&report, attempts);

    if report.is_valid {
        return Ok(PipelineOutcome {
            code,
            report,
            attempts,
        });
    }

    for retry in 1..=config.max_retries {
        info!(retry, max = config.max_retries, "sending errors back for self-correction");
        let errors = report.error_messages();

        code = generator
            .regenerate(&code, &errors, description, tokens)
            .await
            .with_context(|| format!("regeneration failed on retry {retry}"))?;

        report = validate_component(&code, tokens);
        attempts += 1;
        log_report(&report, attempts);

        if report.is_valid {
            return Ok(PipelineOutcome {
                code,
                report,
                attempts,
            });
        }
    }

    warn!(
        errors = report.errors.len(),
        "retry budget exhausted, returning best-effort output"
    );
    Ok(PipelineOutcome {
        code,
        report,
        attempts,
    })
}

fn log_report(report: &ValidationReport, attempt: usize) {
    if report.is_valid {
        info!(attempt, "component passed all validation checks");
    } else {
        warn!(
            attempt,
            errors = report.errors.len(),
            "validation found errors"
        );
        for error in &report.errors {
            warn!("  {error}");
        }
    }
    for warning in &report.warnings {
        info!("  {warning}");
    }
}
