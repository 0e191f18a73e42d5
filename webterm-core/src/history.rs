//! Command history with prompt navigation

use crate::settings::Settings;

/// Submitted command lines plus a navigation pointer
///
/// The pointer equals `len()` when it sits past the newest entry, which is
/// where it returns after every `push`.
#[derive(Debug, Clone, Default)]
pub struct History {
    commands: Vec<String>,
    nav_pointer: usize,
    limit: Option<usize>,
}

impl From<&Settings> for History {
    fn from(value: &Settings) -> Self {
        Self::with_entries(value.history.clone())
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(commands: Vec<String>) -> Self {
        let len = commands.len();
        Self {
            commands,
            nav_pointer: len,
            limit: None,
        }
    }

    /// Builder method: keep at most `limit` entries, dropping the oldest
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.truncate();
        self
    }

    /// Step to the previous entry, `None` at the oldest one
    pub fn nav_back(&mut self) -> Option<&String> {
        if self.nav_pointer == 0 {
            None
        } else {
            self.nav_pointer -= 1;
            self.commands.get(self.nav_pointer)
        }
    }

    /// Step to the next entry, `None` when moving past the newest one
    pub fn nav_front(&mut self) -> Option<&String> {
        if self.nav_pointer >= self.commands.len() {
            None
        } else {
            self.nav_pointer += 1;
            self.commands.get(self.nav_pointer)
        }
    }

    pub fn push(&mut self, cmd: String) {
        self.commands.push(cmd);
        self.truncate();
        self.nav_pointer = self.commands.len();
    }

    pub fn entries(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.nav_pointer = 0;
    }

    fn truncate(&mut self) {
        if let Some(limit) = self.limit {
            if self.commands.len() > limit {
                let overflow = self.commands.len() - limit;
                self.commands.drain(..overflow);
            }
        }
        self.nav_pointer = self.nav_pointer.min(self.commands.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(entries: &[&str]) -> History {
        History::with_entries(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_navigation() {
        let mut history = history(&["ls", "pwd"]);

        assert_eq!(history.nav_front(), None);
        assert_eq!(history.nav_back().map(String::as_str), Some("pwd"));
        assert_eq!(history.nav_back().map(String::as_str), Some("ls"));
        assert_eq!(history.nav_back(), None);
        assert_eq!(history.nav_front().map(String::as_str), Some("pwd"));
        // Moving past the newest entry
        assert_eq!(history.nav_front(), None);
        assert_eq!(history.nav_front(), None);
        assert_eq!(history.nav_back().map(String::as_str), Some("pwd"));
    }

    #[test]
    fn test_push_resets_pointer() {
        let mut history = history(&["ls", "pwd"]);
        history.nav_back();
        history.nav_back();
        history.push("cd /".to_string());
        assert_eq!(history.nav_back().map(String::as_str), Some("cd /"));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = history(&["a", "b", "c"]).with_limit(2);
        assert_eq!(history.entries(), ["b", "c"]);
        history.push("d".to_string());
        assert_eq!(history.entries(), ["c", "d"]);
    }

    #[test]
    fn test_clear() {
        let mut history = history(&["ls"]);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.nav_back(), None);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            history: vec!["help".to_string()],
            ..Settings::default()
        };
        let mut history = History::from(&settings);
        assert_eq!(history.len(), 1);
        assert_eq!(history.nav_back().map(String::as_str), Some("help"));
    }
}
