//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escape codes when the
//! stream is not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark
pub const CHECK: &str = "✓";
/// Cross mark
pub const CROSS: &str = "✗";
/// Arrow used in lists
pub const ARROW: &str = "→";

/// Semantic styles for anything displayable
pub trait Stylize: Display {
    /// De-emphasised secondary text
    fn muted(&self) -> String {
        self.to_string().dimmed().to_string()
    }

    /// Headings and labels
    fn emphasis(&self) -> String {
        self.to_string().bold().to_string()
    }

    /// Branch names and counts
    fn accent(&self) -> String {
        self.to_string().cyan().to_string()
    }

    /// Completed actions
    fn success(&self) -> String {
        self.to_string().green().to_string()
    }

    /// Things that need attention
    fn warn(&self) -> String {
        self.to_string().yellow().to_string()
    }

    /// Failures
    fn error(&self) -> String {
        self.to_string().red().bold().to_string()
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled cross mark
pub fn cross() -> String {
    CROSS.error()
}

/// Styled arrow
pub fn arrow() -> String {
    ARROW.muted()
}
