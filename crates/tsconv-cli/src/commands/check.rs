//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tsconv_core::{Analyzer, Eslint};
use tsconv_rules::{default_project_rules, default_rules};

use crate::config_file;
use crate::CheckArgs;

/// Runs the check command.
///
/// Violations never fail the command; only an unreadable project root, a bad
/// config file or an unwritable report do.
pub fn run(args: &CheckArgs, explicit_config: Option<&Path>) -> Result<()> {
    let mut config = config_file::load(&args.path, explicit_config)?;

    if args.no_external {
        config.external.enabled = false;
    }

    let mut builder = Analyzer::builder().root(&args.path);

    for rule in default_project_rules(&config) {
        builder = builder.project_rule_box(rule);
    }
    for rule in default_rules(&config) {
        builder = builder.rule_box(rule);
    }
    if config.external.enabled {
        builder = builder.external(Eslint::from_config(&config.external));
    }

    let analyzer = builder
        .config(config)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    let output = super::output::report_path(args.output.as_deref(), args.format);
    super::output::write(&result, analyzer.root(), args.format, &output)?;

    println!(
        "Found {} violations. See {} for details.",
        result.violations.len(),
        output.display()
    );

    Ok(())
}
