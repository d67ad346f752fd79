//! Rule enforcing class and interface naming.
//!
//! # Detected Patterns
//!
//! - `class userService {}`: classes must be PascalCase
//! - `interface User {}`: interfaces must be PascalCase with an `I` prefix
//!
//! # Good Patterns
//!
//! ```typescript
//! class UserService implements IUserService {}
//! interface IUserService {}
//! ```
//!
//! Declarations are found textually (keyword, whitespace, identifier), so a
//! match inside a comment or string is checked too. All classes are reported
//! before all interfaces.

use std::sync::LazyLock;

use regex::Regex;
use tsconv_core::{FileContext, Location, Rule, RuleId, Violation};

use crate::case::{is_interface_name, is_pascal_case};

#[allow(clippy::expect_used)]
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+(\w+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static INTERFACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\binterface\s+(\w+)").expect("valid regex"));

/// Checks class and interface names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingConvention;

impl NamingConvention {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn scan(
        &self,
        ctx: &FileContext,
        pattern: &Regex,
        is_valid: fn(&str) -> bool,
        message: &str,
    ) -> Vec<Violation> {
        pattern
            .captures_iter(ctx.content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str();
                (!is_valid(name)).then(|| {
                    Violation::new(
                        self.id(),
                        Location::new(ctx.path, ctx.line_at(whole.start())),
                        format!("{message}: {name}"),
                    )
                })
            })
            .collect()
    }
}

impl Rule for NamingConvention {
    fn id(&self) -> RuleId {
        RuleId::NamingConvention
    }

    fn description(&self) -> &'static str {
        "Requires PascalCase classes and I-prefixed PascalCase interfaces"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = self.scan(
            ctx,
            &CLASS_RE,
            is_pascal_case,
            "Class name should be PascalCase",
        );
        violations.extend(self.scan(
            ctx,
            &INTERFACE_RE,
            is_interface_name,
            "Interface name should be PascalCase with I prefix",
        ));
        violations
    }
}
