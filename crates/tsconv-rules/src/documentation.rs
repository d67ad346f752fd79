//! Rule requiring TODO assignees and function doc comments.
//!
//! # Detected Patterns
//!
//! - `// TODO: fix this` without an assignee
//! - `function load() {}` or `const load = function () {}` without a `/**`
//!   comment opening on one of the three lines above it
//!
//! # Good Patterns
//!
//! ```typescript
//! // TODO(@alice): cache the result
//! /**
//!  * Loads the user.
//!  */
//! function load() {}
//! ```
//!
//! A function on the first line has nothing above it and is not reported.

use std::sync::LazyLock;

use regex::Regex;
use tsconv_core::{FileContext, Location, Rule, RuleId, Violation};

/// Number of lines above a function searched for a doc comment.
const DOC_LOOKBACK: usize = 3;

#[allow(clippy::expect_used)]
static TODO_ASSIGNEE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TODO\s*\(@\w+\)").expect("valid regex"));

#[allow(clippy::expect_used)]
static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*function|^\s*const\s+\w+\s*=\s*function").expect("valid regex")
});

/// Checks TODO comments and function documentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Documentation;

impl Documentation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Documentation {
    fn id(&self) -> RuleId {
        RuleId::Documentation
    }

    fn description(&self) -> &'static str {
        "Requires TODO(@name) assignees and /** */ comments on functions"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let lines: Vec<&str> = ctx.lines().map(|(_, l)| l).collect();
        let mut violations = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let line_no = idx + 1;

            if line.contains("TODO") && !TODO_ASSIGNEE_RE.is_match(line) {
                violations.push(Violation::new(
                    self.id(),
                    Location::new(ctx.path, line_no),
                    "TODO comment should have an assignee (@username)",
                ));
            }

            if idx > 0 && FUNCTION_RE.is_match(line) {
                let preceding = &lines[idx.saturating_sub(DOC_LOOKBACK)..idx];
                if !preceding.iter().any(|l| l.contains("/**")) {
                    violations.push(Violation::new(
                        self.id(),
                        Location::new(ctx.path, line_no),
                        "Missing JSDoc comment for function",
                    ));
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check_code(code: &str) -> Vec<Violation> {
        let ctx = FileContext::new(Path::new("/p/src/app.ts"), code);
        Documentation::new().check(&ctx)
    }

    fn lines(violations: &[Violation]) -> Vec<usize> {
        violations.iter().map(|v| v.location.line).collect()
    }

    #[test]
    fn test_detects_todo_without_assignee() {
        let violations = check_code("const a = 1;\n// TODO: remove\n");
        assert_eq!(lines(&violations), vec![2]);
        assert_eq!(
            violations[0].message,
            "TODO comment should have an assignee (@username)"
        );
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let violations = check_code("const a = 1;\r\r// TODO fix\rfunction load() {}\r");
        assert_eq!(lines(&violations), vec![3, 4]);
    }

    #[test]
    fn test_allows_todo_with_assignee() {
        assert!(check_code("// TODO(@alice): remove\n").is_empty());
        assert!(check_code("// TODO (@bob) later\n").is_empty());
    }

    #[test]
    fn test_one_violation_per_todo_line() {
        let violations = check_code("// TODO one TODO two\nok\n// TODO three\n");
        assert_eq!(lines(&violations), vec![1, 3]);
    }

    #[test]
    fn test_detects_undocumented_function() {
        let violations = check_code(
            r"const x = 1;

function load() {}
",
        );
        assert_eq!(lines(&violations), vec![3]);
        assert_eq!(violations[0].message, "Missing JSDoc comment for function");
    }

    #[test]
    fn test_detects_undocumented_function_expression() {
        let violations = check_code("// header\nconst load = function () {};\n");
        assert_eq!(lines(&violations), vec![2]);
    }

    #[test]
    fn test_allows_documented_function() {
        let violations = check_code(
            r"const x = 1;
/**
 * Loads things.
 */
function load() {}
",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_doc_comment_too_far_above() {
        let violations = check_code(
            r"/**
 * Loads things.
 *
 *
 */
function load() {}
",
        );
        assert_eq!(lines(&violations), vec![6]);
    }

    #[test]
    fn test_function_on_first_line_is_not_reported() {
        assert!(check_code("function load() {}\n").is_empty());
    }

    #[test]
    fn test_ignores_exported_and_arrow_functions() {
        let code = "const x = 1;\nexport function a() {}\nconst b = () => {};\n";
        assert!(check_code(code).is_empty());
    }
}
