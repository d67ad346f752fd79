//! Core types for convention violations and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier of the rule that produced a violation.
///
/// The set is closed: every finding the tool reports belongs to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Required project files and directories.
    ProjectStructure,
    /// File extension and base-name casing.
    FileNaming,
    /// Maximum line length.
    LineLength,
    /// Class and interface naming.
    NamingConvention,
    /// Import statement hygiene.
    Imports,
    /// TODO assignees and function doc comments.
    Documentation,
    /// Findings reported by ESLint.
    Eslint,
}

impl RuleId {
    /// Every rule identifier, in execution order.
    pub const ALL: [Self; 7] = [
        Self::ProjectStructure,
        Self::FileNaming,
        Self::LineLength,
        Self::NamingConvention,
        Self::Imports,
        Self::Documentation,
        Self::Eslint,
    ];

    /// Returns the snake_case name used in reports and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectStructure => "project_structure",
            Self::FileNaming => "file_naming",
            Self::LineLength => "line_length",
            Self::NamingConvention => "naming_convention",
            Self::Imports => "imports",
            Self::Documentation => "documentation",
            Self::Eslint => "eslint",
        }
    }

    /// Returns the stable rule code (e.g., "TC003").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ProjectStructure => "TC001",
            Self::FileNaming => "TC002",
            Self::LineLength => "TC003",
            Self::NamingConvention => "TC004",
            Self::Imports => "TC005",
            Self::Documentation => "TC006",
            Self::Eslint => "TC100",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as discovered (absolute under the analyzed root) or as
    /// reported by an external tool.
    pub file: PathBuf,
    /// Line number (1-indexed), or 0 for whole-file and whole-project scope.
    pub line: usize,
}

impl Location {
    /// Creates a location pointing at a specific line.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Creates a location covering a whole file or project (line 0).
    #[must_use]
    pub fn whole(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0)
    }
}

/// A convention violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule that produced this violation.
    pub rule: RuleId,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(rule: RuleId, location: Location, message: impl Into<String>) -> Self {
        Self {
            rule,
            location,
            message: message.into(),
        }
    }

    /// Formats the violation as a report line body.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "Line {}: [{}] {}",
            self.location.line, self.rule, self.message
        )
    }
}

/// Result of running convention analysis.
///
/// Violations are kept in the order they were produced.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in discovery order.
    pub violations: Vec<Violation>,
    /// Number of source files visited.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns violations produced by one rule.
    #[must_use]
    pub fn by_rule(&self, rule: RuleId) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.rule == rule).collect()
    }

    /// Appends violations, keeping their order.
    pub fn push_all(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(rule: RuleId, line: usize) -> Violation {
        Violation::new(
            rule,
            Location::new("src/app.ts", line),
            "Line exceeds 100 characters",
        )
    }

    #[test]
    fn rule_names_are_snake_case() {
        let names: Vec<&str> = RuleId::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "project_structure",
                "file_naming",
                "line_length",
                "naming_convention",
                "imports",
                "documentation",
                "eslint",
            ]
        );
    }

    #[test]
    fn rule_id_serializes_as_name() {
        let json = serde_json::to_string(&RuleId::NamingConvention).unwrap();
        assert_eq!(json, "\"naming_convention\"");
    }

    #[test]
    fn violation_format_matches_report_line() {
        let v = make_violation(RuleId::LineLength, 12);
        assert_eq!(
            v.format(),
            "Line 12: [line_length] Line exceeds 100 characters"
        );
    }

    #[test]
    fn whole_location_has_line_zero() {
        assert_eq!(Location::whole("/project").line, 0);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut result = LintResult::new();
        result.push_all([
            make_violation(RuleId::LineLength, 3),
            make_violation(RuleId::LineLength, 3),
        ]);
        assert_eq!(result.violations.len(), 2);
        assert_eq!(result.violations[0], result.violations[1]);
    }

    #[test]
    fn by_rule_filters() {
        let mut result = LintResult::new();
        result.push_all([
            make_violation(RuleId::LineLength, 1),
            make_violation(RuleId::Imports, 2),
            make_violation(RuleId::LineLength, 3),
        ]);
        let lines: Vec<usize> = result
            .by_rule(RuleId::LineLength)
            .iter()
            .map(|v| v.location.line)
            .collect();
        assert_eq!(lines, vec![1, 3]);
    }
}
