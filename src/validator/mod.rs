//! Deterministic design-system validator
//!
//! Validation is split into four independent sub-validators, each a pure
//! function `(source, tokens) -> Vec<Diagnostic>`:
//!
//! - [`tokens::validate_design_tokens`] — required token presence
//! - [`colors::validate_colors`] — strict colour enforcement
//! - [`structure::validate_structure`] — component structural completeness
//! - [`syntax::validate_syntax`] — stack-based bracket balance
//!
//! [`validate_component`] runs them in that fixed order and merges their
//! output into a [`ValidationReport`], then appends the soft spacing check as
//! a warning. All checks are deterministic string analysis; no network calls,
//! no shared state, and no failure path: adversarial input only ever produces
//! diagnostics.

pub mod colors;
pub mod diagnostic;
pub mod structure;
pub mod syntax;
pub mod tokens;

pub use diagnostic::{Diagnostic, DiagnosticCategory, ValidationReport};

use crate::design_system::DesignTokenSet;

/// Run all sub-validators and return a structured validation report.
///
/// Hard-check order is fixed (tokens, colours, structure, syntax) so the
/// error list is deterministic for identical input. Warnings never affect
/// `is_valid`.
pub fn validate_component(code: &str, tokens: &DesignTokenSet) -> ValidationReport {
    let mut errors = Vec::new();
    errors.extend(tokens::validate_design_tokens(code, tokens));
    errors.extend(colors::validate_colors(code, tokens));
    errors.extend(structure::validate_structure(code));
    errors.extend(syntax::validate_syntax(code));

    let warnings = warn_spacing_token(code, tokens);

    ValidationReport::from_parts(errors, warnings)
}

/// Soft check: encourage use of the spacing token.
///
/// Returns a warning when the spacing token value does not appear verbatim in
/// the source. The orchestration loop treats warnings as informational and
/// never retries on their account.
fn warn_spacing_token(code: &str, tokens: &DesignTokenSet) -> Vec<Diagnostic> {
    if !tokens.spacing.is_empty() && !code.contains(&tokens.spacing) {
        return vec![Diagnostic::new(
            DiagnosticCategory::SpacingSuggestion,
            format!(
                "The spacing token '{}' was not detected. Consider applying it to \
                 padding/margin for visual consistency.",
                tokens.spacing
            ),
        )];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> DesignTokenSet {
        DesignTokenSet {
            primary_color: "#6366f1".into(),
            secondary_color: "#f1f5f9".into(),
            border_radius: "8px".into(),
            font_family: "Inter".into(),
            spacing: "16px".into(),
        }
    }

    #[test]
    fn errors_keep_checker_order() {
        // trips one rule in each sub-validator
        let code = "@Component({})\nexport class X {\n  color: string = 'red: ';\n  x(): void { rgb(1,2,3); }\n}\n]";
        let report = validate_component(code, &tokens());
        assert!(!report.is_valid);

        let categories: Vec<_> = report.errors.iter().map(|e| e.category).collect();
        let first_syntax = categories
            .iter()
            .position(|c| *c == DiagnosticCategory::SyntaxError)
            .unwrap();
        let first_presence = categories
            .iter()
            .position(|c| *c == DiagnosticCategory::MissingPrimaryColor)
            .unwrap();
        let first_color = categories
            .iter()
            .position(|c| *c == DiagnosticCategory::UnauthorizedColorFormat)
            .unwrap();
        assert!(first_presence < first_color);
        assert!(first_color < first_syntax);
    }

    #[test]
    fn spacing_warning_does_not_block() {
        let spacing_free = DesignTokenSet {
            spacing: "24px".into(),
            ..tokens()
        };
        let code = "@Component({})\nexport class X {\n  v: number = 1;\n  /* #6366f1 Inter 8px */\n}";
        let report = validate_component(code, &spacing_free);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].category,
            DiagnosticCategory::SpacingSuggestion
        );
    }

    #[test]
    fn validity_matches_error_count() {
        let report = validate_component("", &tokens());
        assert_eq!(report.is_valid, report.errors.is_empty());
        assert!(!report.is_valid);
    }
}
