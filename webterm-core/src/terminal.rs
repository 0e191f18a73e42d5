//! Terminal session
//!
//! The [`Terminal`] struct is the entry point for front ends: it owns all
//! terminal state, executes submitted lines and persists settings.

use crate::buffer::{CommandEntry, TerminalBuffer};
use crate::commands::{self, CommandContext, CommandResult};
use crate::config::TerminalConfig;
use crate::filesystem::Filesystem;
use crate::history::History;
use crate::output::Output;
use crate::prompt::Prompt;
use crate::settings::{Settings, SettingsStore};
use crate::theme::{TerminalTheme, ThemeName};

/// A terminal session
pub struct Terminal {
    config: TerminalConfig,
    theme: ThemeName,
    buffer: TerminalBuffer,
    filesystem: Filesystem,
    history: History,
    store: Box<dyn SettingsStore>,
}

impl Terminal {
    /// Create a session, restoring theme and history from `store`
    ///
    /// Unreadable settings are logged and replaced by defaults.
    pub fn new(config: TerminalConfig, store: Box<dyn SettingsStore>) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
        };
        log::info!(
            "Terminal started (theme: {}, {} history entries)",
            settings.theme_name(),
            settings.history.len()
        );

        Self {
            theme: settings.theme_name(),
            history: History::from(&settings).with_limit(config.history_limit),
            buffer: TerminalBuffer::new(),
            filesystem: Filesystem::new(),
            config,
            store,
        }
    }

    /// Replace the filesystem (e.g. with one seeded from configuration)
    pub fn with_filesystem(mut self, filesystem: Filesystem) -> Self {
        self.filesystem = filesystem;
        self
    }

    /// Execute a line and record it
    ///
    /// Returns the new buffer entry, or `None` when the line cleared the
    /// screen. Non-blank lines are added to the history and settings are
    /// saved afterwards.
    pub fn submit(&mut self, line: &str) -> Option<&CommandEntry> {
        let result = commands::exec(
            line,
            &mut CommandContext {
                fs: &mut self.filesystem,
                history: &mut self.history,
                theme: &mut self.theme,
            },
        );
        self.process(line, result);

        if !line.trim().is_empty() {
            self.history.push(line.to_string());
        }
        self.persist();

        self.buffer.last()
    }

    fn process(&mut self, line: &str, result: CommandResult) {
        let entry = match result {
            CommandResult::Empty => CommandEntry::empty(),
            CommandResult::Silent => CommandEntry::no_output(line),
            CommandResult::Output(output) => CommandEntry::ok(line, output),
            CommandResult::Failed(output) => CommandEntry::err(line, output),
            CommandResult::Unknown(name) => CommandEntry::err(
                line,
                Output::plain(&format!("command not found: {}", name)),
            ),
            CommandResult::Clear => {
                self.buffer.clear();
                return;
            }
        };
        self.buffer.push(entry);
    }

    /// Current settings snapshot
    pub fn settings(&self) -> Settings {
        Settings {
            theme: self.theme.to_string(),
            history: self.history.entries().to_vec(),
        }
    }

    fn persist(&mut self) {
        let settings = self.settings();
        if let Err(e) = self.store.save(&settings) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn theme(&self) -> &'static TerminalTheme {
        self.theme.palette()
    }

    pub fn theme_name(&self) -> ThemeName {
        self.theme
    }

    /// Switch theme outside of the `theme` command
    pub fn change_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
        self.persist();
    }

    pub fn buffer(&self) -> &TerminalBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TerminalBuffer {
        &mut self.buffer
    }

    pub fn fs(&self) -> &Filesystem {
        &self.filesystem
    }

    pub fn fs_mut(&mut self) -> &mut Filesystem {
        &mut self.filesystem
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// The prompt as it should be displayed right now
    pub fn prompt(&self) -> Prompt {
        Prompt {
            user: self.config.user.clone(),
            host: self.config.host.clone(),
            cwd: self.filesystem.cwd(),
            last_failed: self.buffer.last_failed(),
        }
    }
}
