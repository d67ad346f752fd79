//! Report rendering.
//!
//! The Markdown report groups violations by file. Groups appear in the order
//! each file was first reported and keep the order violations were found in;
//! nothing is sorted.

use std::collections::HashMap;
use std::fmt::Write;
use std::path::Path;

use crate::types::{LintResult, Violation};

const TITLE: &str = "# Convention Check Report";

/// Renders violations as a Markdown report.
///
/// Headings show each file relative to `root`; violations are grouped by the
/// exact path they were reported with.
#[must_use]
pub fn render_markdown(violations: &[Violation], root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}\n");

    if violations.is_empty() {
        out.push_str("No violations found.\n");
        return out;
    }

    let _ = writeln!(out, "Total violations found: {}", violations.len());

    for (file, group) in group_by_file(violations) {
        let _ = writeln!(out, "\n## {}\n", display_path(file, root));
        for v in group {
            let _ = writeln!(out, "- {}", v.format());
        }
    }

    out
}

/// Renders the full result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(result: &LintResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

fn group_by_file(violations: &[Violation]) -> Vec<(&Path, Vec<&Violation>)> {
    let mut groups: Vec<(&Path, Vec<&Violation>)> = Vec::new();
    let mut index: HashMap<&Path, usize> = HashMap::new();

    for v in violations {
        let file = v.location.file.as_path();
        match index.get(file) {
            Some(&i) => groups[i].1.push(v),
            None => {
                index.insert(file, groups.len());
                groups.push((file, vec![v]));
            }
        }
    }

    groups
}

fn display_path(file: &Path, root: &Path) -> String {
    match file.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => file.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, RuleId};

    fn v(file: &str, line: usize, rule: RuleId, message: &str) -> Violation {
        Violation::new(rule, Location::new(file, line), message)
    }

    #[test]
    fn empty_report_has_fixed_message() {
        let report = render_markdown(&[], Path::new("/project"));
        assert_eq!(report, "# Convention Check Report\n\nNo violations found.\n");
    }

    #[test]
    fn groups_by_first_occurrence() {
        let violations = vec![
            v("/project", 0, RuleId::ProjectStructure, "Missing required directory: dist"),
            v("/project/src/zeta.ts", 4, RuleId::Imports, "Avoid using parent directory imports (..)"),
            v("/project/src/alpha.ts", 1, RuleId::Documentation, "TODO comment should have an assignee (@username)"),
            v("/project/src/zeta.ts", 2, RuleId::LineLength, "Line exceeds 100 characters"),
            v("/elsewhere/lib.ts", 9, RuleId::Eslint, "Unexpected var"),
        ];

        let report = render_markdown(&violations, Path::new("/project"));

        insta::assert_snapshot!(report, @r"
# Convention Check Report

Total violations found: 5

## .

- Line 0: [project_structure] Missing required directory: dist

## src/zeta.ts

- Line 4: [imports] Avoid using parent directory imports (..)
- Line 2: [line_length] Line exceeds 100 characters

## src/alpha.ts

- Line 1: [documentation] TODO comment should have an assignee (@username)

## /elsewhere/lib.ts

- Line 9: [eslint] Unexpected var
");
    }

    #[test]
    fn keeps_per_file_order() {
        let violations = vec![
            v("/p/a.ts", 9, RuleId::LineLength, "late"),
            v("/p/a.ts", 1, RuleId::LineLength, "early"),
        ];
        let report = render_markdown(&violations, Path::new("/p"));
        let late = report.find("late").unwrap();
        let early = report.find("early").unwrap();
        assert!(late < early);
    }

    #[test]
    fn duplicate_violations_are_all_rendered() {
        let dup = v("/p/a.ts", 3, RuleId::Imports, "dup");
        let report = render_markdown(&[dup.clone(), dup], Path::new("/p"));
        assert_eq!(report.matches("- Line 3: [imports] dup").count(), 2);
        assert_eq!(report.matches("## a.ts").count(), 1);
    }

    #[test]
    fn json_contains_rule_names() {
        let mut result = LintResult::new();
        result.files_checked = 1;
        result.push_all([v("/p/a.ts", 3, RuleId::NamingConvention, "bad")]);

        let json = render_json(&result).unwrap();
        assert!(json.contains("\"naming_convention\""));
        assert!(json.contains("\"files_checked\": 1"));
    }
}
