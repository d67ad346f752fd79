//! Rule traits for defining convention checks.

use crate::context::{FileContext, ProjectContext};
use crate::types::{RuleId, Violation};

/// What a per-file rule needs to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Only the file path; runs even when the file cannot be read.
    Path,
    /// The decoded file contents.
    Content,
}

/// A per-file convention rule.
///
/// Rules are independent: each one returns its own violations and never sees
/// what other rules produced.
///
/// # Example
///
/// ```ignore
/// use tsconv_core::{FileContext, Location, Rule, RuleId, Violation};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn id(&self) -> RuleId { RuleId::LineLength }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         ctx.lines()
///             .filter(|(_, line)| line.contains('\t'))
///             .map(|(n, _)| Violation::new(self.id(), Location::new(ctx.path, n), "Tab"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the identifier of this rule.
    fn id(&self) -> RuleId;

    /// Returns the snake_case name of this rule (e.g., "line_length").
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Returns the rule code (e.g., "TC003").
    fn code(&self) -> &'static str {
        self.id().code()
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns what this rule needs from the file.
    fn scope(&self) -> RuleScope {
        RuleScope::Content
    }

    /// Checks a single file and returns any violations found.
    ///
    /// For [`RuleScope::Path`] rules the context content may be empty.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// A project-wide rule based on the directory layout.
pub trait ProjectRule: Send + Sync {
    /// Returns the identifier of this rule.
    fn id(&self) -> RuleId;

    /// Returns the snake_case name of this rule.
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Returns the rule code.
    fn code(&self) -> &'static str {
        self.id().code()
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks the project layout and returns any violations found.
    fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation>;
}

/// Type alias for boxed `ProjectRule` trait objects.
pub type ProjectRuleBox = Box<dyn ProjectRule>;
