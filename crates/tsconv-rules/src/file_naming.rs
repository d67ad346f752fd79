//! Rule enforcing file extensions and file-name casing.
//!
//! # Detected Patterns
//!
//! - A file whose name ends with none of `.ts`, `.tsx`, `.test.ts`, `.spec.ts`
//! - A base name (everything before the first `.`) that is neither camelCase
//!   nor kebab-case, e.g. `UserService.ts` or `user_service.ts`
//!
//! # Good Patterns
//!
//! ```text
//! userService.ts
//! user-service.test.ts
//! ```

use crate::case::{is_camel_case, is_kebab_case};
use tsconv_core::{FileContext, Location, Rule, RuleId, RuleScope, Violation};

/// Accepted file-name endings. `.test.ts` and `.spec.ts` are also covered by
/// `.ts`; they are listed as the conventional test suffixes.
const VALID_ENDINGS: &[&str] = &[".ts", ".tsx", ".test.ts", ".spec.ts"];

/// Checks file extensions and base-name casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileNaming;

impl FileNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FileNaming {
    fn id(&self) -> RuleId {
        RuleId::FileNaming
    }

    fn description(&self) -> &'static str {
        "Requires .ts/.tsx files with camelCase or kebab-case names"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Path
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let file_name = ctx.file_name();
        let mut violations = Vec::new();

        if !VALID_ENDINGS.iter().any(|ending| file_name.ends_with(ending)) {
            violations.push(Violation::new(
                self.id(),
                Location::whole(ctx.path),
                format!("Invalid file extension: {file_name}"),
            ));
        }

        let base = file_name.split('.').next().unwrap_or_default();
        if !(is_camel_case(base) || is_kebab_case(base)) {
            violations.push(Violation::new(
                self.id(),
                Location::whole(ctx.path),
                format!("File name should be camelCase or kebab-case: {file_name}"),
            ));
        }

        violations
    }
}
