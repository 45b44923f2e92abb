//! Source snippets shown under a diagnostic.

/// One source line with a caret under the offending column.
///
/// ```
/// use clex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::point("int $x;", 1, 5).with_label("not a token");
/// assert!(snippet.format().ends_with("    ^ not a token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line, without its line terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column the caret points at (1-based, in bytes)
    pub column: usize,
    /// Text printed after the caret
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            column,
            label: None,
        }
    }

    /// Set the label printed after the caret
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet as a numbered source line and a caret line.
    ///
    /// The gutter is at least three characters wide.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut out = format!("{:>width$} | {}\n", self.line_number, self.line, width = width);
        out.push_str(&format!("{:>width$} | ", "", width = width));

        // Tabs stay tabs so the caret lines up under them.
        let indent: String = self
            .line
            .bytes()
            .take(self.column.saturating_sub(1))
            .map(|b| if b == b'\t' { '\t' } else { ' ' })
            .collect();
        out.push_str(&indent);
        out.push('^');

        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}
