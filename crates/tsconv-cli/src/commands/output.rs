//! Report rendering and writing.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tsconv_core::{report, LintResult};

use crate::{ReportFormat, DEFAULT_REPORT};

/// Resolves the report path: the explicit one, or the default for `format`.
#[must_use]
pub fn report_path(explicit: Option<&Path>, format: ReportFormat) -> PathBuf {
    match (explicit, format) {
        (Some(p), _) => p.to_path_buf(),
        (None, ReportFormat::Markdown) => PathBuf::from(DEFAULT_REPORT),
        (None, ReportFormat::Json) => PathBuf::from(DEFAULT_REPORT).with_extension("json"),
    }
}

/// Renders the result in `format` and writes it to `path`.
pub fn write(result: &LintResult, root: &Path, format: ReportFormat, path: &Path) -> Result<()> {
    let rendered = match format {
        ReportFormat::Markdown => report::render_markdown(&result.violations, root),
        ReportFormat::Json => report::render_json(result).context("Failed to serialize report")?,
    };

    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
