//! External linter integration.
//!
//! Runs a structured-output linter (ESLint by default) over the project and
//! maps each reported message to a [`Violation`]. Failures here never abort
//! a run: the analyzer logs them and moves on.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::ExternalConfig;
use crate::types::{Location, RuleId, Violation};

/// Errors from running an external linter.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No program was configured.
    #[error("External linter command is empty")]
    EmptyCommand,

    /// The process could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The output was not the expected JSON.
    #[error("Failed to parse {program} output: {source}")]
    Parse {
        /// Program whose output failed to parse.
        program: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// A linter run as a separate tool over the whole project.
pub trait ExternalLinter: Send + Sync {
    /// Returns the rule its findings are reported under.
    fn id(&self) -> RuleId;

    /// Returns a display name for logs.
    fn name(&self) -> &str;

    /// Lints the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started or its output cannot
    /// be parsed.
    fn lint(&self, root: &Path) -> Result<Vec<Violation>, ToolError>;
}

/// Type alias for boxed `ExternalLinter` trait objects.
pub type ExternalLinterBox = Box<dyn ExternalLinter>;

/// ESLint invoked with `--format json`.
#[derive(Debug, Clone)]
pub struct Eslint {
    program: String,
    args: Vec<String>,
}

impl Default for Eslint {
    fn default() -> Self {
        Self::from_config(&ExternalConfig::default())
    }
}

impl Eslint {
    /// Creates the runner with the default `npx eslint . --format json`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the runner from configuration.
    #[must_use]
    pub fn from_config(config: &ExternalConfig) -> Self {
        let mut parts = config.command.iter().cloned();
        let program = parts.next().unwrap_or_default();
        Self {
            program,
            args: parts.collect(),
        }
    }
}

impl ExternalLinter for Eslint {
    fn id(&self) -> RuleId {
        RuleId::Eslint
    }

    fn name(&self) -> &str {
        "eslint"
    }

    fn lint(&self, root: &Path) -> Result<Vec<Violation>, ToolError> {
        if self.program.is_empty() {
            return Err(ToolError::EmptyCommand);
        }

        debug!("Running {} {:?} in {}", self.program, self.args, root.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // ESLint exits 0 when it has nothing to report
        if output.status.success() {
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_eslint_output(&stdout).map_err(|source| ToolError::Parse {
            program: self.program.clone(),
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
struct EslintFileResult {
    #[serde(rename = "filePath")]
    file_path: PathBuf,
    #[serde(default)]
    messages: Vec<EslintMessage>,
}

#[derive(Debug, Deserialize)]
struct EslintMessage {
    message: String,
    #[serde(default)]
    line: Option<usize>,
}

/// Parses ESLint JSON output into violations.
///
/// Messages without a line number are reported at line 0.
///
/// # Errors
///
/// Returns an error if the output is not an array of ESLint file results.
pub fn parse_eslint_output(stdout: &str) -> Result<Vec<Violation>, serde_json::Error> {
    let results: Vec<EslintFileResult> = serde_json::from_str(stdout)?;

    Ok(results
        .into_iter()
        .flat_map(|file| {
            let path = file.file_path;
            file.messages.into_iter().map(move |m| {
                Violation::new(
                    RuleId::Eslint,
                    Location::new(path.clone(), m.line.unwrap_or(0)),
                    m.message,
                )
            })
        })
        .collect())
}
