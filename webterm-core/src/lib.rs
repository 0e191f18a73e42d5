//! Web Terminal Core Library
//!
//! A UI-agnostic model of a small shell-like terminal: a virtual read-only
//! filesystem, a handful of commands, command history, an output buffer and
//! color themes. Front ends (the native CLI and the browser crate) only feed
//! input lines in and render the resulting styled output.
//!
//! # Architecture
//!
//! - [`Terminal`] owns all state and executes input lines
//! - [`commands`] parses and runs individual commands
//! - [`output`] describes styled text, [`render`] turns it into HTML or ANSI
//! - [`settings`] persists the theme and history through a [`SettingsStore`]
//! - [`viewport`] holds the visibility-observer logic used by the browser
//!   front end to keep the input line in view
//!
//! The library does NOT touch the DOM or the process terminal.
//!
//! # Example Usage
//!
//! ```
//! use webterm_core::{MemoryStore, Terminal, TerminalConfig};
//!
//! let config = TerminalConfig::new().with_user("guest").with_host("example.org");
//! let mut terminal = Terminal::new(config, Box::new(MemoryStore::new()));
//!
//! terminal.submit("cd projects");
//! let entry = terminal.submit("pwd").unwrap();
//! assert_eq!(entry.output.to_plain(), "/home/user/projects");
//! ```

// Public modules
pub mod buffer;
pub mod commands;
pub mod config;
pub mod filesystem;
pub mod history;
pub mod output;
pub mod prompt;
pub mod render;
pub mod settings;
pub mod terminal;
pub mod theme;
pub mod types;
pub mod viewport;

// Re-export main types for convenience
pub use buffer::{CommandEntry, TerminalBuffer};
pub use config::TerminalConfig;
pub use filesystem::{Filesystem, LsEntry, LsEntryKind};
pub use history::History;
pub use output::{Line, Output, Span, Tone};
pub use prompt::{LineEditor, Prompt};
pub use settings::{JsonFileStore, MemoryStore, Settings, SettingsStore};
pub use terminal::Terminal;
pub use theme::{Color, TerminalTheme, ThemeName};
pub use types::{FsError, Result, TermError};
pub use viewport::{
    ObserverOptions, ObserverRoot, RevealOnVisible, ScrollIntoView, ThresholdCrossings,
    VisibilityEntry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
