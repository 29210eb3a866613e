//! End-to-end validator scenarios
//!
//! Exercises `validate_component` across all four sub-validators on realistic
//! component sources, pinning the report invariant and the deterministic
//! error ordering the self-correction loop depends on.

use component_architect::design_system::DesignTokenSet;
use component_architect::generator::DEMO_COMPONENT;
use component_architect::validator::{validate_component, DiagnosticCategory};

fn design_tokens() -> DesignTokenSet {
    DesignTokenSet {
        primary_color: "#6366f1".into(),
        secondary_color: "#f1f5f9".into(),
        border_radius: "8px".into(),
        font_family: "Inter".into(),
        spacing: "16px".into(),
    }
}

#[test]
fn canonical_compliant_component_round_trips_clean() {
    let report = validate_component(DEMO_COMPONENT, &design_tokens());
    assert!(
        report.is_valid,
        "demo fixture should pass every rule, got: {:?}",
        report.errors
    );
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn validity_always_mirrors_error_count() {
    let inputs = [
        "",
        "garbage ((((",
        DEMO_COMPONENT,
        "@Component({}) export class X { v: number = 1; }",
        "color: red; background: rgb(0,0,0); }{",
    ];
    for source in inputs {
        let report = validate_component(source, &design_tokens());
        assert_eq!(report.is_valid, report.errors.is_empty(), "input: {source:?}");
    }
}

#[test]
fn missing_primary_color_is_the_only_presence_error() {
    // everything present except the primary colour hex
    let source = DEMO_COMPONENT.replace("#6366f1", "#f1f5f9");
    let report = validate_component(&source, &design_tokens());

    let presence: Vec<_> = report
        .errors
        .iter()
        .filter(|e| {
            matches!(
                e.category,
                DiagnosticCategory::MissingPrimaryColor
                    | DiagnosticCategory::MissingBorderRadius
                    | DiagnosticCategory::MissingFontFamily
            )
        })
        .collect();
    assert_eq!(presence.len(), 1);
    assert_eq!(presence[0].category, DiagnosticCategory::MissingPrimaryColor);
}

#[test]
fn named_color_after_colon_is_rejected_but_safe_keywords_pass() {
    let bad = DEMO_COMPONENT.replace("cursor: pointer;", "color: red;");
    let report = validate_component(&bad, &design_tokens());
    let named: Vec<_> = report
        .errors
        .iter()
        .filter(|e| e.category == DiagnosticCategory::UnauthorisedNamedColor)
        .collect();
    assert_eq!(named.len(), 1);

    let safe = DEMO_COMPONENT.replace("cursor: pointer;", "background: transparent;");
    let report = validate_component(&safe, &design_tokens());
    assert!(report.is_valid, "safe keyword tripped: {:?}", report.errors);
}

#[test]
fn error_ordering_is_presence_then_color_then_structure_then_syntax() {
    // missing font + rogue hex + truncated body + unclosed brace, all at once
    let source = "\
@Component({
  selector: 'app-broken',
  template: `<div>x</div>`,
  styles: [`div { color: #6366f1; border-radius: 8px; padding: 16px; background: #123456; }`]
})
export class BrokenComponent {
  count: number = 0;
";
    let report = validate_component(source, &design_tokens());
    assert!(!report.is_valid);

    let categories: Vec<_> = report.errors.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![
            DiagnosticCategory::MissingFontFamily,
            DiagnosticCategory::UnauthorisedHexColor,
            DiagnosticCategory::IncompleteStructure,
            DiagnosticCategory::SyntaxError,
        ]
    );
}

#[test]
fn brackets_inside_template_strings_never_count() {
    let source = "\
@Component({
  template: `){ {{ value }} <button (click)=\"go()\">}{</button>`
})
export class TemplateComponent {
  value: string = 'ok';
  go(): void { }
}";
    let report = validate_component(source, &design_tokens());
    let syntax: Vec<_> = report
        .errors
        .iter()
        .filter(|e| e.category == DiagnosticCategory::SyntaxError)
        .collect();
    assert!(syntax.is_empty(), "got syntax errors: {syntax:?}");
}

#[test]
fn spacing_absence_warns_without_blocking() {
    let tokens = DesignTokenSet {
        spacing: "32px".into(),
        ..design_tokens()
    };
    let report = validate_component(DEMO_COMPONENT, &tokens);
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        report.warnings[0].category,
        DiagnosticCategory::SpacingSuggestion
    );
    assert!(report.warnings[0].message.contains("32px"));
}

#[test]
fn report_serializes_with_wire_form_categories() {
    let report = validate_component("{", &design_tokens());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"SYNTAX_ERROR\""));
    assert!(json.contains("\"is_valid\":false"));
}
