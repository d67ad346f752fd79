//! Rule forbidding parent-directory imports.
//!
//! # Detected Patterns
//!
//! ```typescript
//! import { db } from '../infra/db';
//! ```
//!
//! Any line starting with `import` that contains `..` is reported. Import
//! ordering and grouping are not checked.

use tsconv_core::{FileContext, Location, Rule, RuleId, Violation};

/// Forbids `..` in import statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Imports;

impl Imports {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Imports {
    fn id(&self) -> RuleId {
        RuleId::Imports
    }

    fn description(&self) -> &'static str {
        "Forbids parent directory (..) imports"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.lines()
            .filter(|(_, line)| line.trim().starts_with("import") && line.contains(".."))
            .map(|(line_no, _)| {
                Violation::new(
                    self.id(),
                    Location::new(ctx.path, line_no),
                    "Avoid using parent directory imports (..)",
                )
            })
            .collect()
    }
}
