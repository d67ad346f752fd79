//! Core analyzer for orchestrating convention checks.

use crate::config::Config;
use crate::context::{FileContext, ProjectContext};
use crate::external::{ExternalLinter, ExternalLinterBox};
use crate::rule::{ProjectRule, ProjectRuleBox, Rule, RuleBox, RuleScope};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Errors that abort an analysis.
///
/// Everything below the project root is isolated per file and only logged.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the working directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The project root cannot be listed.
    #[error("Cannot read project root {path}: {source}")]
    RootUnreadable {
        /// Root that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    project_rules: Vec<ProjectRuleBox>,
    external: Vec<ExternalLinterBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a per-file rule. Rules run in the order they are added.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a project-wide rule.
    #[must_use]
    pub fn project_rule<R: ProjectRule + 'static>(mut self, rule: R) -> Self {
        self.project_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed project-wide rule.
    #[must_use]
    pub fn project_rule_box(mut self, rule: ProjectRuleBox) -> Self {
        self.project_rules.push(rule);
        self
    }

    /// Adds an external linter, run after all built-in rules.
    #[must_use]
    pub fn external<L: ExternalLinter + 'static>(mut self, linter: L) -> Self {
        self.external.push(Box::new(linter));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved for a
    /// relative root.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };
        let root = normalize(&root);

        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());

        Ok(Analyzer {
            root,
            rules: self.rules,
            project_rules: self.project_rules,
            external: self.external,
            exclude_patterns,
            config,
        })
    }
}

/// Removes `.` components so joined paths read cleanly in reports.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

/// The main analyzer that orchestrates convention checks.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    project_rules: Vec<ProjectRuleBox>,
    external: Vec<ExternalLinterBox>,
    exclude_patterns: Vec<String>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len() + self.project_rules.len()
    }

    /// Runs every check and returns the violations in discovery order.
    ///
    /// Project rules run first, then each per-file rule for every discovered
    /// file, then external linters. Unreadable files and failing external
    /// linters are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the project root cannot be listed.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting convention checks at {}", self.root.display());

        std::fs::read_dir(&self.root).map_err(|source| AnalyzerError::RootUnreadable {
            path: self.root.clone(),
            source,
        })?;

        let mut result = LintResult::new();
        let files = self.discover_files();

        let project_ctx = ProjectContext::new(&self.root);
        for rule in &self.project_rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            result.push_all(rule.check_project(&project_ctx));
        }

        for file_path in &files {
            info!("Checking file: {}", file_path.display());
            result.push_all(self.analyze_file(file_path));
            result.files_checked += 1;
        }

        for linter in &self.external {
            if !self.config.is_rule_enabled(linter.id().as_str()) {
                debug!("Skipping disabled linter: {}", linter.name());
                continue;
            }
            match linter.lint(&self.root) {
                Ok(violations) => {
                    debug!("{} reported {} violation(s)", linter.name(), violations.len());
                    result.push_all(violations);
                }
                Err(e) => error!("Error running {}: {}", linter.name(), e),
            }
        }

        info!(
            "Convention checks completed: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Runs per-file rules on one file.
    ///
    /// When the file cannot be read as UTF-8, only path rules run.
    fn analyze_file(&self, path: &Path) -> Vec<Violation> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        };

        let ctx = match &content {
            Some(content) => FileContext::new(path, content),
            None => FileContext::path_only(path),
        };

        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            if content.is_none() && rule.scope() == RuleScope::Content {
                continue;
            }
            violations.extend(rule.check(&ctx));
        }

        violations
    }

    /// Discovers source files under the root, in a stable order.
    fn discover_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !self.should_exclude(e.path(), e.file_type().is_dir())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            // Symlinked files count by their target; symlinked dirs are not followed
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self
                .config
                .analyzer
                .extensions
                .iter()
                .any(|ext| name.ends_with(ext.as_str()))
            {
                continue;
            }

            files.push(entry.into_path());
        }

        files
    }

    /// Checks if a path should be excluded.
    ///
    /// Patterns match the path relative to the root. Directories are tested
    /// with a trailing separator so `**/dir/**` prunes the whole subtree.
    fn should_exclude(&self, path: &Path, is_dir: bool) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let rel_str = rel.to_string_lossy().replace('\\', "/");
        let candidate = if is_dir {
            format!("{rel_str}/")
        } else {
            rel_str
        };
        let anchored = format!("/{candidate}");

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&candidate) {
                    debug!("Excluding: {}", path.display());
                    return true;
                }
            }

            // Also check as substring for patterns like "**/node_modules/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty()
                && !normalized_pattern.contains('*')
                && anchored.contains(&normalized_pattern)
            {
                debug!("Excluding: {}", path.display());
                return true;
            }
        }

        false
    }
}
