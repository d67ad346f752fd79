//! # tsconv-core
//!
//! Core framework for checking TypeScript projects against style and layout
//! conventions.
//!
//! This crate provides the foundational traits and types. It includes:
//!
//! - [`Rule`] trait for per-file rules
//! - [`ProjectRule`] trait for project-wide layout rules
//! - [`ExternalLinter`] trait and the [`Eslint`] runner
//! - [`Analyzer`] for orchestrating a run
//! - [`Violation`] for representing findings
//! - [`report`] for rendering the Markdown report
//!
//! ## Example
//!
//! ```ignore
//! use tsconv_core::{report, Analyzer};
//!
//! let analyzer = Analyzer::builder()
//!     .root(".")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! println!("{}", report::render_markdown(&result.violations, analyzer.root()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub mod external;
pub mod report;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, ExternalConfig, RuleConfig};
pub use context::{FileContext, ProjectContext};
pub use external::{Eslint, ExternalLinter, ToolError};
pub use rule::{ProjectRule, ProjectRuleBox, Rule, RuleBox, RuleScope};
pub use types::{LintResult, Location, RuleId, Violation};
