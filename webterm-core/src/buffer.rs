//! Scrollback of executed commands and their output

use crate::output::Output;

/// An executed command line with its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub cmd: String,
    pub output: Output,
    pub failed: bool,
}

impl CommandEntry {
    pub fn new(cmd: impl Into<String>, output: Output, failed: bool) -> Self {
        Self {
            cmd: cmd.into(),
            output,
            failed,
        }
    }

    pub fn ok(cmd: &str, output: Output) -> Self {
        Self::new(cmd, output, false)
    }

    pub fn err(cmd: &str, output: Output) -> Self {
        Self::new(cmd, output, true)
    }

    pub fn no_output(cmd: &str) -> Self {
        Self::new(cmd, Output::empty(), false)
    }

    /// A blank prompt line
    pub fn empty() -> Self {
        Self::no_output("")
    }
}

/// Everything shown above the prompt
#[derive(Debug, Clone, Default)]
pub struct TerminalBuffer {
    commands: Vec<CommandEntry>,
}

impl TerminalBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CommandEntry) {
        log::debug!("Buffer entry: {:?} (failed: {})", entry.cmd, entry.failed);
        self.commands.push(entry);
    }

    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn last(&self) -> Option<&CommandEntry> {
        self.commands.last()
    }

    /// Whether the most recent command failed (drives the prompt color)
    pub fn last_failed(&self) -> bool {
        self.commands.last().map_or(false, |cmd| cmd.failed)
    }

    pub fn clear(&mut self) {
        self.commands.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
