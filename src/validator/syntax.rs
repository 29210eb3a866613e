//! Bracket, brace, and parenthesis balance scanner
//!
//! Single-pass, stack-based scan over the raw source bytes. String literals
//! (single-quoted, double-quoted, backtick/template) and comments (`//` and
//! `/* */`) are skipped so bracket characters inside them never count, while a
//! running line counter stays accurate through the skipped regions.
//!
//! Recovery policy: a closer that does not match the top of the stack reports
//! a mismatch and pops the top anyway, on the assumption that the innermost
//! open context was abandoned. This avoids a cascade of spurious reports for
//! every later closer, at the cost of a possible secondary mismatch once
//! context is lost. Unterminated strings and block comments consume to end of
//! input without a diagnostic of their own; the truncation surfaces through
//! the structural checks or the trailing unclosed-opener reports instead.

use crate::validator::diagnostic::{Diagnostic, DiagnosticCategory};

/// One open bracket awaiting its closer. Lives only for the scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BracketStackEntry {
    opener: u8,
    line: usize,
}

fn bracket_name(ch: u8) -> &'static str {
    match ch {
        b'(' => "opening parenthesis '('",
        b')' => "closing parenthesis ')'",
        b'{' => "opening brace '{'",
        b'}' => "closing brace '}'",
        b'[' => "opening bracket '['",
        b']' => "closing bracket ']'",
        _ => unreachable!("not a bracket character"),
    }
}

fn matching_opener(closer: u8) -> u8 {
    match closer {
        b')' => b'(',
        b'}' => b'{',
        b']' => b'[',
        _ => unreachable!("not a closer"),
    }
}

fn matching_closer(opener: u8) -> char {
    match opener {
        b'(' => ')',
        b'{' => '}',
        b'[' => ']',
        _ => unreachable!("not an opener"),
    }
}

/// Verify all brackets, braces, and parentheses are correctly balanced.
pub fn validate_syntax(code: &str) -> Vec<Diagnostic> {
    let bytes = code.as_bytes();
    let mut errors = Vec::new();
    let mut stack: Vec<BracketStackEntry> = Vec::new();
    let mut line = 1usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let byte = bytes[i];

        if byte == b'\n' {
            line += 1;
            i += 1;
            continue;
        }

        // String literals: backslash escapes the next byte unconditionally,
        // newlines inside (template strings) still advance the line counter.
        if byte == b'\'' || byte == b'"' || byte == b'`' {
            let quote = byte;
            i += 1;
            while i < bytes.len() {
                if bytes[i] == b'\n' {
                    line += 1;
                }
                if bytes[i] == b'\\' && i + 1 < bytes.len() {
                    i += 2;
                    continue;
                }
                if bytes[i] == quote {
                    i += 1;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // Line comments end at the newline, which is left for the main loop
        // so the line counter advances exactly once.
        if byte == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }

        // Block comments run to `*/` or end of input.
        if byte == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
            i += 2;
            while i < bytes.len() {
                if bytes[i] == b'\n' {
                    line += 1;
                }
                if bytes[i] == b'*' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        match byte {
            b'(' | b'{' | b'[' => {
                stack.push(BracketStackEntry { opener: byte, line });
            }
            b')' | b'}' | b']' => match stack.last().copied() {
                None => {
                    errors.push(Diagnostic::new(
                        DiagnosticCategory::SyntaxError,
                        format!(
                            "Unexpected {} on line {} - no matching opener exists. \
                             Check for an extra or misplaced '{}'.",
                            bracket_name(byte),
                            line,
                            byte as char
                        ),
                    ));
                }
                Some(top) if top.opener != matching_opener(byte) => {
                    errors.push(Diagnostic::new(
                        DiagnosticCategory::SyntaxError,
                        format!(
                            "Mismatched brackets - {} on line {} does not match {} \
                             opened on line {}.",
                            bracket_name(byte),
                            line,
                            bracket_name(top.opener),
                            top.line
                        ),
                    ));
                    // consume the abandoned context to avoid cascading errors
                    stack.pop();
                }
                Some(_) => {
                    stack.pop();
                }
            },
            _ => {}
        }

        i += 1;
    }

    // Remaining entries are unclosed openers, reported in original open order.
    for entry in &stack {
        errors.push(Diagnostic::new(
            DiagnosticCategory::SyntaxError,
            format!(
                "Unclosed {} opened on line {} - missing closing '{}'.",
                bracket_name(entry.opener),
                entry.line,
                matching_closer(entry.opener)
            ),
        ));
    }

    errors
}
