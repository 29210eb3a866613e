//! Angular component structural completeness
//!
//! Lint-level surface checks that the output looks like a complete standalone
//! component declaration: decorator present, exported class present, body not
//! truncated, and at least one real class member. No AST is built; these are
//! regex probes tuned to avoid matching CSS property lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::validator::diagnostic::{Diagnostic, DiagnosticCategory};

static EXPORT_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bexport\s+class\b").unwrap());

/// Access-modifier-prefixed declaration, e.g. `private count`.
static ACCESS_MODIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(public|private|protected)\s+\w+").unwrap());

/// Typed property with a TypeScript type, e.g. `name: string = ''`. The type
/// list is fixed so CSS lines like `padding: 8px` do not count as members.
static TYPED_PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\w+\s*:\s*(string|number|boolean|any|void|object|Array|Observable|Subject|EventEmitter)\b",
    )
    .unwrap()
});

/// Method signature with optional return type, e.g. `onLogin(): void {`.
static METHOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s*\([^)]*\)\s*(?::\s*\w+\s*)?\{").unwrap());

/// Angular lifecycle hooks and the constructor.
static LIFECYCLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(constructor|ngOnInit|ngOnDestroy|ngOnChanges|ngAfterViewInit)\b").unwrap()
});

/// Verify the source contains a complete, well-formed component declaration.
pub fn validate_structure(code: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();

    if !code.contains("@Component") {
        errors.push(Diagnostic::new(
            DiagnosticCategory::IncompleteStructure,
            "Missing @Component decorator. The generated output must be a valid \
             Angular standalone component.",
        ));
    }

    let has_export_class = EXPORT_CLASS_RE.is_match(code);
    if !has_export_class {
        errors.push(Diagnostic::new(
            DiagnosticCategory::IncompleteStructure,
            "Missing 'export class' declaration. The component class must be \
             exported for Angular to register it.",
        ));
    }

    let trimmed = code.trim();
    if !trimmed.is_empty() && !trimmed.ends_with('}') {
        errors.push(Diagnostic::new(
            DiagnosticCategory::IncompleteStructure,
            "Component source does not end with '}'. The class body may be \
             truncated or improperly closed.",
        ));
    }

    // Member check only makes sense when a class was found; its absence is
    // already reported above.
    if has_export_class {
        let has_member = ACCESS_MODIFIER_RE.is_match(code)
            || TYPED_PROPERTY_RE.is_match(code)
            || METHOD_RE.is_match(code)
            || LIFECYCLE_RE.is_match(code);
        if !has_member {
            errors.push(Diagnostic::new(
                DiagnosticCategory::IncompleteStructure,
                "No TypeScript class members (typed properties or methods) detected \
                 inside the component class body. The class appears to be empty.",
            ));
        }
    }

    errors
}
