//! Guided Component Architect
//!
//! Generates Angular standalone components from natural-language descriptions
//! and holds them to a fixed design system. The pipeline is:
//!
//! 1. `generator` — LLM-backed component generation (Groq/OpenAI-compatible API)
//! 2. `validator` — deterministic design-system and structure linting,
//!    returning a structured `ValidationReport`
//! 3. `orchestrator` — self-correction loop that feeds validation errors back
//!    to the model until the report is clean or retries are exhausted
//!
//! The validator is pure string analysis (regex rules plus a hand-rolled
//! bracket scanner) and makes zero network calls; everything nondeterministic
//! lives behind the [`generator::ComponentGenerator`] trait.

pub mod design_system;
pub mod generator;
pub mod orchestrator;
pub mod validator;

pub use design_system::{DesignSystemError, DesignTokenSet};
pub use orchestrator::{run_pipeline, ArchitectConfig, PipelineOutcome};
pub use validator::{
    validate_component, Diagnostic, DiagnosticCategory, ValidationReport,
};
