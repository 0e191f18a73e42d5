//! Terminal configuration types
//!
//! Only what the terminal itself needs: identity shown in the prompt and
//! the history size. Front ends layer their own configuration on top.

use serde::{Deserialize, Serialize};

/// Configuration for a terminal session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// User name shown in the prompt
    #[serde(default = "default_user")]
    pub user: String,

    /// Host name shown in the prompt
    #[serde(default = "default_host")]
    pub host: String,

    /// Maximum number of history entries kept (default: 1000)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_user() -> String {
    "user".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_history_limit() -> usize {
    1000
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            history_limit: default_history_limit(),
        }
    }
}

impl TerminalConfig {
    /// Create a new terminal configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the prompt user name
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Builder method: set the prompt host name
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Builder method: set the history size limit
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_config_builder() {
        let config = TerminalConfig::new()
            .with_user("guest")
            .with_host("example.org")
            .with_history_limit(10);

        assert_eq!(config.user, "guest");
        assert_eq!(config.host, "example.org");
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: TerminalConfig = serde_json::from_str(r#"{"host": "box"}"#).unwrap();
        assert_eq!(config.user, "user");
        assert_eq!(config.host, "box");
        assert_eq!(config.history_limit, 1000);
    }
}
