//! Styled progress output
//!
//! Narration only: nothing downstream depends on what is written here.

use console::{Style as TermStyle, Term};

/// Severity marker attached to each line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Notice,
    HttpInfo,
    MigrateHeading,
    Success,
    Warning,
    Error,
}

impl Style {
    fn term_style(&self) -> TermStyle {
        match self {
            Style::Plain => TermStyle::new(),
            Style::Notice => TermStyle::new().red(),
            Style::HttpInfo => TermStyle::new().bold(),
            Style::MigrateHeading => TermStyle::new().cyan().bold(),
            Style::Success => TermStyle::new().green(),
            Style::Warning => TermStyle::new().yellow(),
            Style::Error => TermStyle::new().red().bold(),
        }
    }
}

/// Sink for styled progress messages
pub trait OutputSink {
    fn write(&mut self, style: Style, message: &str);
}

/// Writes styled lines to the terminal
pub struct ConsoleOutput {
    term: Term,
}

impl ConsoleOutput {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl OutputSink for ConsoleOutput {
    fn write(&mut self, style: Style, message: &str) {
        let line = style.term_style().apply_to(message).to_string();
        if let Err(e) = self.term.write_line(&line) {
            tracing::debug!(error = %e, "failed to write output line");
        }
    }
}

/// Records every line in memory
///
/// Used by tests and by callers that want to post-process the narration.
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    lines: Vec<(Style, String)>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Style, String)] {
        &self.lines
    }

    /// Messages without their styles
    pub fn messages(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, m)| m.as_str()).collect()
    }

    /// True if any line with `style` contains `needle`
    pub fn contains(&self, style: Style, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|(s, m)| *s == style && m.contains(needle))
    }

    /// True if any line was written with `style`
    pub fn has_style(&self, style: Style) -> bool {
        self.lines.iter().any(|(s, _)| *s == style)
    }
}

impl OutputSink for BufferedOutput {
    fn write(&mut self, style: Style, message: &str) {
        self.lines.push((style, message.to_string()));
    }
}
