//! Styled terminal output.
//!
//! All user-facing lines go through here and land on stderr, keeping
//! stdout free for anything a caller might want to pipe.

use console::{Style, Term};

/// Writer for user-facing CLI lines.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, styled: &str) {
        let _ = self.term.write_line(styled);
    }

    /// Plain informational line.
    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    /// Green completion line.
    pub(crate) fn success(&self, msg: &str) {
        self.line(&Style::new().green().apply_to(msg).to_string());
    }

    /// Red failure line.
    pub(crate) fn error(&self, msg: &str) {
        self.line(&Style::new().red().apply_to(msg).to_string());
    }

    /// Bold cyan heading line.
    pub(crate) fn highlight(&self, msg: &str) {
        self.line(&Style::new().cyan().bold().apply_to(msg).to_string());
    }
}
