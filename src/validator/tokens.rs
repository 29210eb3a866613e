//! Design-token presence checks
//!
//! Confirms the generated source actually references the required tokens.
//! Colour and font lookups are case-insensitive; the border-radius token is an
//! exact CSS length and matched case-sensitively.

use crate::design_system::DesignTokenSet;
use crate::validator::diagnostic::{Diagnostic, DiagnosticCategory};

/// Verify that every required design token is referenced in the output.
///
/// The three checks are independent; all of them can fire on one input.
pub fn validate_design_tokens(code: &str, tokens: &DesignTokenSet) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let code_lower = code.to_lowercase();

    if !code_lower.contains(&tokens.primary_color.to_lowercase()) {
        errors.push(Diagnostic::new(
            DiagnosticCategory::MissingPrimaryColor,
            format!(
                "The primary colour '{}' was not found in the generated component. \
                 It must be applied to at least one interactive or accent element.",
                tokens.primary_color
            ),
        ));
    }

    if !code.contains(&tokens.border_radius) {
        errors.push(Diagnostic::new(
            DiagnosticCategory::MissingBorderRadius,
            format!(
                "The design-system border-radius '{}' was not found in the component \
                 styles. Apply it to cards, inputs, and buttons.",
                tokens.border_radius
            ),
        ));
    }

    if !code_lower.contains(&tokens.font_family.to_lowercase()) {
        errors.push(Diagnostic::new(
            DiagnosticCategory::MissingFontFamily,
            format!(
                "The design-system font-family '{}' was not found in the component \
                 styles. Set font-family: '{}', sans-serif on the host or wrapper element.",
                tokens.font_family, tokens.font_family
            ),
        ));
    }

    errors
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
    fn all_tokens_present_yields_no_errors() {
        let code = "color: #6366F1; border-radius: 8px; font-family: 'inter', sans-serif;";
        assert!(validate_design_tokens(code, &tokens()).is_empty());
    }

    #[test]
    fn missing_primary_color_fires_exactly_one_diagnostic() {
        let code = "border-radius: 8px; font-family: 'Inter', sans-serif;";
        let errors = validate_design_tokens(code, &tokens());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, DiagnosticCategory::MissingPrimaryColor);
    }

    #[test]
    fn border_radius_match_is_case_sensitive() {
        // "8PX" is not the literal token text
        let code = "color: #6366f1; border-radius: 8PX; font-family: 'Inter';";
        let errors = validate_design_tokens(code, &tokens());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, DiagnosticCategory::MissingBorderRadius);
    }

    #[test]
    fn all_three_checks_are_independent() {
        let errors = validate_design_tokens("", &tokens());
        let categories: Vec<_> = errors.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                DiagnosticCategory::MissingPrimaryColor,
                DiagnosticCategory::MissingBorderRadius,
                DiagnosticCategory::MissingFontFamily,
            ]
        );
    }
}
