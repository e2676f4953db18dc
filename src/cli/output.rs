use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::extract::Diagnostic;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn from_args(robot: bool) -> Self {
        if robot { Self::Json } else { Self::Human }
    }

    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print diagnostics one per line, or a success line when there are none.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        println!("{} No diagnostics", "✓".green());
        return;
    }
    for diagnostic in diagnostics {
        println!(
            "  {} {} {}",
            "!".yellow(),
            diagnostic.kind.label().yellow(),
            diagnostic.path.dimmed()
        );
    }
}
