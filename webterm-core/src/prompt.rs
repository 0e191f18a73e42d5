//! Prompt text and input-line editing

use crate::history::History;
use crate::output::{Line, Span, Tone};

/// Everything the prompt line displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
    pub cwd: String,
    pub last_failed: bool,
}

impl Prompt {
    /// `user@host: cwd ❯ `, the marker colored by the last command's status
    pub fn line(&self) -> Line {
        let marker_tone = if self.last_failed {
            Tone::Error
        } else {
            Tone::Success
        };
        Line::new(vec![
            Span::styled(format!("{}@{}", self.user, self.host), Tone::Link),
            Span::raw(": "),
            Span::styled(self.cwd.clone(), Tone::Error),
            Span::styled(" ❯ ", marker_tone),
        ])
    }
}

/// The text currently typed at the prompt
///
/// Stepping back through history saves what was being typed; stepping
/// forward past the newest entry brings it back.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    input: String,
    draft: Option<String>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the typed text (e.g. from an input event)
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Show the previous history entry; returns whether the text changed
    pub fn history_back(&mut self, history: &mut History) -> bool {
        match history.nav_back() {
            Some(cmd) => {
                let cmd = cmd.clone();
                if self.draft.is_none() {
                    self.draft = Some(std::mem::take(&mut self.input));
                }
                self.input = cmd;
                true
            }
            None => false,
        }
    }

    /// Show the next history entry, or the saved draft past the newest one
    pub fn history_forward(&mut self, history: &mut History) -> bool {
        match history.nav_front() {
            Some(cmd) => {
                self.input = cmd.clone();
                true
            }
            None => match self.draft.take() {
                Some(draft) => {
                    self.input = draft;
                    true
                }
                None => false,
            },
        }
    }

    /// Take the typed line and reset the editor
    pub fn submit(&mut self) -> String {
        self.draft = None;
        std::mem::take(&mut self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_line() {
        let prompt = Prompt {
            user: "user".into(),
            host: "localhost".into(),
            cwd: "/home/user".into(),
            last_failed: true,
        };
        let line = prompt.line();
        assert_eq!(line.to_plain(), "user@localhost: /home/user ❯ ");
        assert_eq!(line.spans[3].tone, Some(Tone::Error));
    }

    #[test]
    fn test_draft_survives_history_navigation() {
        let mut history = History::with_entries(vec!["ls".into(), "pwd".into()]);
        let mut editor = LineEditor::new();
        editor.set_input("cd pro");

        assert!(editor.history_back(&mut history));
        assert_eq!(editor.input(), "pwd");
        assert!(editor.history_back(&mut history));
        assert_eq!(editor.input(), "ls");
        assert!(!editor.history_back(&mut history));
        assert_eq!(editor.input(), "ls");

        assert!(editor.history_forward(&mut history));
        assert_eq!(editor.input(), "pwd");
        assert!(editor.history_forward(&mut history));
        assert_eq!(editor.input(), "cd pro");
        assert!(!editor.history_forward(&mut history));
    }

    #[test]
    fn test_submit_resets() {
        let mut history = History::with_entries(vec!["ls".into()]);
        let mut editor = LineEditor::new();
        editor.set_input("help");
        editor.history_back(&mut history);

        assert_eq!(editor.submit(), "ls");
        assert_eq!(editor.input(), "");
        assert!(!editor.history_forward(&mut history));
    }
}
