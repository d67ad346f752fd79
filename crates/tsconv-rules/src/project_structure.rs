//! Rule requiring the standard Node.js/TypeScript project layout.
//!
//! # Detected Patterns
//!
//! - A missing `package.json`, `tsconfig.json` or `README.md` at the root
//! - A missing `src`, `test` or `dist` directory
//!
//! Each missing item is reported once, at line 0 of the project root.
//!
//! # Configuration
//!
//! - `required_files`: replaces the default file list
//! - `required_dirs`: replaces the default directory list

use tsconv_core::{Location, ProjectContext, ProjectRule, RuleConfig, RuleId, Violation};

/// Files every project must have.
pub const DEFAULT_REQUIRED_FILES: &[&str] = &["package.json", "tsconfig.json", "README.md"];

/// Directories every project must have.
pub const DEFAULT_REQUIRED_DIRS: &[&str] = &["src", "test", "dist"];

/// Requires a fixed set of files and directories at the project root.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    /// Required file names, relative to the root.
    pub required_files: Vec<String>,
    /// Required directory names, relative to the root.
    pub required_dirs: Vec<String>,
}

impl Default for ProjectStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStructure {
    /// Creates a new rule with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            required_files: to_strings(DEFAULT_REQUIRED_FILES),
            required_dirs: to_strings(DEFAULT_REQUIRED_DIRS),
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let mut rule = Self::new();
        if let Some(config) = config {
            if let Some(files) = config.get_str_array("required_files") {
                rule.required_files = files;
            }
            if let Some(dirs) = config.get_str_array("required_dirs") {
                rule.required_dirs = dirs;
            }
        }
        rule
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl ProjectRule for ProjectStructure {
    fn id(&self) -> RuleId {
        RuleId::ProjectStructure
    }

    fn description(&self) -> &'static str {
        "Requires package.json, tsconfig.json, README.md and src/, test/, dist/"
    }

    fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation> {
        let missing = |kind: &str, names: &[String]| -> Vec<Violation> {
            names
                .iter()
                .filter(|name| !ctx.root.join(name.as_str()).exists())
                .map(|name| {
                    Violation::new(
                        self.id(),
                        Location::whole(ctx.root),
                        format!("Missing required {kind}: {name}"),
                    )
                })
                .collect()
        };

        let mut violations = missing("file", &self.required_files);
        violations.extend(missing("directory", &self.required_dirs));
        violations
    }
}
