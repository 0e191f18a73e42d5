//! Styled command output
//!
//! Commands describe their output as lines of spans tagged with a [`Tone`];
//! the active theme decides the actual colors at render time.

/// Semantic color of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Accent,
    Link,
    Success,
    Error,
}

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Option<Tone>,
    pub bold: bool,
}

impl Span {
    /// Unstyled text
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
            bold: false,
        }
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One output line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(vec![Span::raw(text)])
    }

    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Output of one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub lines: Vec<Line>,
}

impl Output {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Unstyled text, one line per `\n`
    pub fn plain(text: &str) -> Self {
        Self {
            lines: text.lines().map(Line::raw).collect(),
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text without styling, lines joined with `\n`
    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Line> for Output {
    fn from(line: Line) -> Self {
        Self { lines: vec![line] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_splits_lines() {
        let output = Output::plain("one\ntwo\n");
        assert_eq!(output.lines.len(), 2);
        assert_eq!(output.to_plain(), "one\ntwo");
    }

    #[test]
    fn test_line_concatenates_spans() {
        let line = Line::new(vec![
            Span::styled("dir/", Tone::Accent).bold(),
            Span::raw(" x"),
        ]);
        assert_eq!(line.to_plain(), "dir/ x");
        assert!(line.spans[0].bold);
    }
}
