//! Diagnostic types for validation results
//!
//! A `Diagnostic` is a single categorized finding; a `ValidationReport` is the
//! aggregate outcome of one validation pass. The category wire forms (the
//! SCREAMING_SNAKE strings) are the contract with the self-correction loop:
//! they are embedded verbatim in the error text sent back to the model.

use serde::{Deserialize, Serialize};

/// Closed set of validation findings.
///
/// The mixed -ized/-ised spellings are deliberate and load-bearing: they match
/// the strings the regeneration prompt was tuned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    #[serde(rename = "MISSING_PRIMARY_COLOR")]
    MissingPrimaryColor,
    #[serde(rename = "MISSING_BORDER_RADIUS")]
    MissingBorderRadius,
    #[serde(rename = "MISSING_FONT_FAMILY")]
    MissingFontFamily,
    #[serde(rename = "UNAUTHORIZED_COLOR_FORMAT")]
    UnauthorizedColorFormat,
    #[serde(rename = "UNAUTHORISED_HEX_COLOR")]
    UnauthorisedHexColor,
    #[serde(rename = "UNAUTHORISED_NAMED_COLOR")]
    UnauthorisedNamedColor,
    #[serde(rename = "INCOMPLETE_STRUCTURE")]
    IncompleteStructure,
    #[serde(rename = "SYNTAX_ERROR")]
    SyntaxError,
    #[serde(rename = "SPACING_SUGGESTION")]
    SpacingSuggestion,
}

impl DiagnosticCategory {
    /// Wire-form label used in rendered messages and JSON output.
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingPrimaryColor => "MISSING_PRIMARY_COLOR",
            Self::MissingBorderRadius => "MISSING_BORDER_RADIUS",
            Self::MissingFontFamily => "MISSING_FONT_FAMILY",
            Self::UnauthorizedColorFormat => "UNAUTHORIZED_COLOR_FORMAT",
            Self::UnauthorisedHexColor => "UNAUTHORISED_HEX_COLOR",
            Self::UnauthorisedNamedColor => "UNAUTHORISED_NAMED_COLOR",
            Self::IncompleteStructure => "INCOMPLETE_STRUCTURE",
            Self::SyntaxError => "SYNTAX_ERROR",
            Self::SpacingSuggestion => "SPACING_SUGGESTION",
        }
    }
}

impl std::fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single categorized, human-readable validation finding.
///
/// Immutable once produced; checkers build these and never revisit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Structured result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff `errors` is empty; warnings never affect validity.
    pub is_valid: bool,
    /// Hard failures that block acceptance, in deterministic checker order.
    pub errors: Vec<Diagnostic>,
    /// Soft suggestions, informational only.
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Assemble a report; `is_valid` is derived, not supplied.
    pub fn from_parts(errors: Vec<Diagnostic>, warnings: Vec<Diagnostic>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Rendered error lines in report order, for feedback to the model.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|d| d.to_string()).collect()
    }
}
