//! List rules command implementation.

use tsconv_core::RuleId;
use tsconv_rules::{all_project_rules, all_rules};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_project_rules() {
        print_row(rule.code(), rule.name(), rule.description());
    }
    for rule in all_rules() {
        print_row(rule.code(), rule.name(), rule.description());
    }
    print_row(
        RuleId::Eslint.code(),
        RuleId::Eslint.as_str(),
        "Findings reported by ESLint (also [external] enabled, --no-external)",
    );

    println!("\nDisable a rule in tsconv.toml, e.g.:");
    println!("  [rules.line_length]");
    println!("  enabled = false");
}

fn print_row(code: &str, name: &str, description: &str) {
    println!("{code:<10} {name:<20} {description}");
}
