//! Rule limiting line length.
//!
//! Length is counted in characters after trailing whitespace is stripped.
//! Lines strictly longer than the limit are reported.
//!
//! # Configuration
//!
//! - `max_length`: maximum allowed characters (default: 100)

use tsconv_core::{FileContext, Location, Rule, RuleConfig, RuleId, Violation};

/// Default maximum line length.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Limits the number of characters per line.
#[derive(Debug, Clone, Copy)]
pub struct LineLength {
    /// Maximum allowed characters.
    pub max_length: usize,
}

impl Default for LineLength {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLength {
    /// Creates a new rule with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Sets the maximum line length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let default = i64::try_from(DEFAULT_MAX_LENGTH).unwrap_or(i64::MAX);
        let configured = config.map_or(default, |c| c.get_int("max_length", default));
        Self::new().max_length(usize::try_from(configured).unwrap_or(DEFAULT_MAX_LENGTH))
    }
}

impl Rule for LineLength {
    fn id(&self) -> RuleId {
        RuleId::LineLength
    }

    fn description(&self) -> &'static str {
        "Limits lines to a maximum number of characters"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.lines()
            .filter(|(_, line)| line.trim_end().chars().count() > self.max_length)
            .map(|(line_no, _)| {
                Violation::new(
                    self.id(),
                    Location::new(ctx.path, line_no),
                    format!("Line exceeds {} characters", self.max_length),
                )
            })
            .collect()
    }
}
