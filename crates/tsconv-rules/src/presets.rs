//! Rule sets built from configuration.

use crate::{Documentation, FileNaming, Imports, LineLength, NamingConvention, ProjectStructure};
use tsconv_core::{Config, ProjectRuleBox, RuleBox, RuleId};

/// Returns the per-file rules in execution order, configured from `config`.
///
/// Order: file naming, line length, naming convention, imports,
/// documentation.
#[must_use]
pub fn default_rules(config: &Config) -> Vec<RuleBox> {
    vec![
        Box::new(FileNaming::new()),
        Box::new(LineLength::from_config(
            config.rule(RuleId::LineLength.as_str()),
        )),
        Box::new(NamingConvention::new()),
        Box::new(Imports::new()),
        Box::new(Documentation::new()),
    ]
}

/// Returns the project-wide rules, configured from `config`.
#[must_use]
pub fn default_project_rules(config: &Config) -> Vec<ProjectRuleBox> {
    vec![Box::new(ProjectStructure::from_config(
        config.rule(RuleId::ProjectStructure.as_str()),
    ))]
}

/// Returns all built-in per-file rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    default_rules(&Config::default())
}

/// Returns all built-in project rules with default settings.
#[must_use]
pub fn all_project_rules() -> Vec<ProjectRuleBox> {
    default_project_rules(&Config::default())
}
