//! Output formatting module
//!
//! Stdout carries nothing but the inventory JSON; every human-facing message
//! goes to stderr.

pub mod json;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Diagnostic context carrying styling.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let use_colors =
            !no_color && Term::stderr().is_term() && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles }
    }

    /// Format a fatal diagnostic line.
    #[must_use]
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {msg}", "Error:".style(self.styles.error))
    }

    /// Print a fatal diagnostic to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.format_error(msg));
    }
}
