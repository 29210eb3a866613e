//! Strict colour-token enforcement
//!
//! Three independent rules:
//! 1. Functional colour notations (rgb/rgba/hsl/hsla/hwb) are banned outright.
//! 2. Every hex literal must normalize into the approved set (the two design
//!    tokens plus neutral white/black).
//! 3. Named CSS colour keywords after a `:` are banned, except a small set of
//!    structural keywords that never carry a colour value.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::design_system::DesignTokenSet;
use crate::validator::diagnostic::{Diagnostic, DiagnosticCategory};

/// CSS keywords that are structurally valid and never represent a colour.
const SAFE_CSS_KEYWORDS: &[&str] = &[
    "transparent",
    "inherit",
    "currentcolor",
    "initial",
    "unset",
    "none",
];

/// Named CSS colours that are explicitly forbidden.
const NAMED_COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "orange", "pink", "purple", "brown", "cyan", "magenta",
    "lime", "teal", "maroon", "navy", "olive", "aqua", "fuchsia", "coral", "crimson", "gold",
    "indigo", "khaki", "lavender", "salmon", "sienna", "tan", "tomato", "turquoise", "violet",
    "wheat",
];

static FUNCTIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(rgba?|hsla?|hwb)\s*\(").unwrap());

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").unwrap());

static NAMED_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i):\s*({})\b", NAMED_COLORS.join("|"));
    Regex::new(&pattern).unwrap()
});

/// Expand a 3-digit hex shorthand to lowercase 6-digit form.
///
/// Idempotent; other lengths are lowercased unchanged.
pub fn normalise_hex(hex: &str) -> String {
    let hex = hex.to_lowercase();
    let bytes = hex.as_bytes();
    if bytes.len() == 4 {
        // #rgb -> #rrggbb
        let (r, g, b) = (bytes[1] as char, bytes[2] as char, bytes[3] as char);
        return format!("#{r}{r}{g}{g}{b}{b}");
    }
    hex
}

/// Enforce strict colour-token compliance.
pub fn validate_colors(code: &str, tokens: &DesignTokenSet) -> Vec<Diagnostic> {
    let mut errors = Vec::new();

    // Rule 1: functional notations are forbidden, one diagnostic regardless
    // of occurrence count.
    if FUNCTIONAL_RE.is_match(code) {
        errors.push(Diagnostic::new(
            DiagnosticCategory::UnauthorizedColorFormat,
            format!(
                "Functional colour notations (rgba, rgb, hsl, hsla, hwb) are not \
                 permitted. Use only the exact hex tokens defined in the design \
                 system: {} and {}.",
                tokens.primary_color, tokens.secondary_color
            ),
        ));
    }

    // Rule 2: every hex literal must be in the approved set.
    let approved = approved_hex_set(tokens);
    let mut seen_violations: HashSet<String> = HashSet::new();
    for m in HEX_RE.find_iter(code) {
        let raw = m.as_str();
        let normalised = normalise_hex(raw);
        if !approved.contains(&normalised) && seen_violations.insert(raw.to_string()) {
            errors.push(Diagnostic::new(
                DiagnosticCategory::UnauthorisedHexColor,
                format!(
                    "'{}' is not in the design system. Approved hex values: {}, {}, \
                     #ffffff, #000000.",
                    raw, tokens.primary_color, tokens.secondary_color
                ),
            ));
        }
    }

    // Rule 3: named CSS colour keywords after a colon are forbidden.
    for caps in NAMED_RE.captures_iter(code) {
        let name = &caps[1];
        if SAFE_CSS_KEYWORDS.contains(&name.to_lowercase().as_str()) {
            continue;
        }
        errors.push(Diagnostic::new(
            DiagnosticCategory::UnauthorisedNamedColor,
            format!(
                "Named CSS colour '{name}' is not permitted. Use only design-system \
                 hex tokens."
            ),
        ));
    }

    errors
}

/// Build the normalized approved hex set: the two tokens, neutral white and
/// black, plus 3-digit aliases of any 6-digit member with doubled channels.
fn approved_hex_set(tokens: &DesignTokenSet) -> HashSet<String> {
    let mut approved: HashSet<String> = HashSet::new();
    approved.insert(tokens.primary_color.to_lowercase());
    approved.insert(tokens.secondary_color.to_lowercase());
    for neutral in ["#ffffff", "#fff", "#000000", "#000"] {
        approved.insert(neutral.to_string());
    }

    let six_digit: Vec<String> = approved.iter().filter(|h| h.len() == 7).cloned().collect();
    for hex in six_digit {
        let b = hex.as_bytes();
        if b[1] == b[2] && b[3] == b[4] && b[5] == b[6] {
            approved.insert(format!("#{}{}{}", b[1] as char, b[3] as char, b[5] as char));
        }
    }

    approved.into_iter().map(|h| normalise_hex(&h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

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
    fn normalise_expands_shorthand() {
        assert_eq!(normalise_hex("#fff"), "#ffffff");
        assert_eq!(normalise_hex("#ABC"), "#aabbcc");
        assert_eq!(normalise_hex("#6366f1"), "#6366f1");
    }

    #[test]
    fn functional_notation_fires_once() {
        let code = "background: rgba(0, 0, 0, 0.5); color: RGB(1,2,3); border: hsl(10, 5%, 5%);";
        let errors = validate_colors(code, &tokens());
        let format_errors: Vec<_> = errors
            .iter()
            .filter(|e| e.category == DiagnosticCategory::UnauthorizedColorFormat)
            .collect();
        assert_eq!(format_errors.len(), 1);
    }

    #[test]
    fn approved_hex_values_pass() {
        let code = "color: #6366f1; background: #F1F5F9; text: #fff; border: #000000;";
        assert!(validate_colors(code, &tokens()).is_empty());
    }

    #[test]
    fn unapproved_hex_reported_per_distinct_literal() {
        let code = "a: #ff0000; b: #ff0000; c: #FF0000;";
        let errors = validate_colors(code, &tokens());
        // dedupe key is the exact matched text, so the case variant gets its
        // own diagnostic
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.category == DiagnosticCategory::UnauthorisedHexColor));
        assert!(errors[0].message.contains("'#ff0000'"));
        assert!(errors[1].message.contains("'#FF0000'"));
    }

    #[test]
    fn shorthand_alias_of_approved_token_passes() {
        let secondary_shorthand = DesignTokenSet {
            secondary_color: "#aabbcc".into(),
            ..tokens()
        };
        let code = "color: #6366f1; background: #abc;";
        assert!(validate_colors(code, &secondary_shorthand).is_empty());
    }

    #[test]
    fn named_colors_are_rejected() {
        let errors = validate_colors("color: red;", &tokens());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].category,
            DiagnosticCategory::UnauthorisedNamedColor
        );
        assert!(errors[0].message.contains("'red'"));
    }

    #[test]
    fn safe_keywords_are_exempt() {
        let code = "background: transparent; color: inherit; outline: none;";
        assert!(validate_colors(code, &tokens()).is_empty());
    }

    #[test]
    fn all_three_rules_can_fire_together() {
        let code = "a: rgb(1,2,3); b: #ff0000; c: coral;";
        let errors = validate_colors(code, &tokens());
        let categories: Vec<_> = errors.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                DiagnosticCategory::UnauthorizedColorFormat,
                DiagnosticCategory::UnauthorisedHexColor,
                DiagnosticCategory::UnauthorisedNamedColor,
            ]
        );
    }

    proptest! {
        #[test]
        fn normalisation_is_idempotent(hex in "#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}") {
            let once = normalise_hex(&hex);
            prop_assert_eq!(normalise_hex(&once), once);
        }
    }
}
