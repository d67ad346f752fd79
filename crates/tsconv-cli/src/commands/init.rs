//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# tsconv configuration

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
]

# File extensions to check
extensions = [".ts", ".tsx"]

[external]
# Run ESLint after the built-in rules. Setting this or
# [rules.eslint] enabled = false skips it.
enabled = true
command = ["npx", "eslint", ".", "--format", "json"]

# Each rule can be disabled and may take options

[rules.project_structure]
enabled = true
required_files = ["package.json", "tsconfig.json", "README.md"]
required_dirs = ["src", "test", "dist"]

[rules.file_naming]
enabled = true

[rules.line_length]
enabled = true
max_length = 100

[rules.naming_convention]
enabled = true

[rules.imports]
enabled = true

[rules.documentation]
enabled = true

[rules.eslint]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("tsconv.toml"), force)?;

    println!("Created tsconv.toml");
    println!("\nNext steps:");
    println!("  1. Edit tsconv.toml to configure rules");
    println!("  2. Run: tsconv");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}
