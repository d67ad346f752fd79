//! # tsconv-rules
//!
//! Built-in convention rules for TypeScript projects.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TC001 | `project_structure` | Requires the standard Node.js/TypeScript layout |
//! | TC002 | `file_naming` | Requires `.ts`/`.tsx` files with camelCase or kebab-case names |
//! | TC003 | `line_length` | Limits line length (default 100) |
//! | TC004 | `naming_convention` | PascalCase classes, `I`-prefixed interfaces |
//! | TC005 | `imports` | Forbids `..` imports |
//! | TC006 | `documentation` | TODO assignees and function doc comments |
//!
//! ## Usage
//!
//! ```ignore
//! use tsconv_core::{Analyzer, Config};
//! use tsconv_rules::{default_project_rules, default_rules};
//!
//! let config = Config::default();
//! let mut builder = Analyzer::builder().root(".");
//! for rule in default_project_rules(&config) {
//!     builder = builder.project_rule_box(rule);
//! }
//! for rule in default_rules(&config) {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.config(config).build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod case;

mod documentation;
mod file_naming;
mod imports;
mod line_length;
mod naming_convention;
mod presets;
mod project_structure;

pub use documentation::Documentation;
pub use file_naming::FileNaming;
pub use imports::Imports;
pub use line_length::LineLength;
pub use naming_convention::NamingConvention;
pub use presets::{all_project_rules, all_rules, default_project_rules, default_rules};
pub use project_structure::ProjectStructure;

/// Re-export core types for convenience.
pub use tsconv_core::{ProjectRule, Rule, RuleId, Violation};
