//! Built-in commands
//!
//! An input line is split on whitespace; the first word selects the command
//! and the whole word list is handed to that command's `clap` parser, so
//! every command gets `--help`, `--version` and argument validation for free.

use crate::filesystem::Filesystem;
use crate::output::Output;
use crate::theme::ThemeName;
use clap::error::ErrorKind;
use clap::Parser;

mod cd;
mod clear;
mod help;
mod history;
mod ls;
mod pwd;
mod theme;

/// Names of the built-in commands, in the order `help` lists them
pub const COMMAND_NAMES: [&str; 7] = ["help", "clear", "pwd", "cd", "ls", "theme", "history"];

/// What executing a line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Blank input line
    Empty,
    /// Successful command with output
    Output(Output),
    /// Successful command without output
    Silent,
    /// Request to empty the screen
    Clear,
    /// Command ran but failed
    Failed(Output),
    /// No such command
    Unknown(String),
}

/// The terminal state commands may read and change
pub struct CommandContext<'a> {
    pub fs: &'a mut Filesystem,
    pub history: &'a mut crate::history::History,
    pub theme: &'a mut ThemeName,
}

/// Execute one input line
pub fn exec(line: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = parts.first() else {
        return CommandResult::Empty;
    };

    log::info!("Executing command: {:?}", line);

    let result = match name {
        "help" => parse::<help::Help>(&parts).map(|_| help::help()),
        "clear" => parse::<clear::Clear>(&parts).map(|_| CommandResult::Clear),
        "pwd" => parse::<pwd::Pwd>(&parts).map(|_| pwd::pwd(ctx.fs)),
        "cd" => parse::<cd::Cd>(&parts).map(|args| cd::cd(args, ctx.fs)),
        "ls" => parse::<ls::Ls>(&parts).map(|_| ls::ls(ctx.fs)),
        "theme" => parse::<theme::Theme>(&parts).map(|args| theme::theme(args, ctx.theme)),
        "history" => parse::<history::History>(&parts).map(|args| history::history(args, ctx.history)),
        other => Ok(CommandResult::Unknown(other.to_string())),
    };

    result.unwrap_or_else(|early| early)
}

/// Parse arguments, turning `--help`/`--version` into output and anything
/// else clap rejects into a failure
fn parse<T: Parser>(parts: &[&str]) -> Result<T, CommandResult> {
    T::try_parse_from(parts.iter().copied()).map_err(|err| {
        let text = err.to_string();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                CommandResult::Output(Output::plain(&text))
            }
            _ => CommandResult::Failed(Output::plain(&text)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    struct Fixture {
        fs: Filesystem,
        history: History,
        theme: ThemeName,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                fs: Filesystem::new(),
                history: History::new(),
                theme: ThemeName::Mocha,
            }
        }

        fn run(&mut self, line: &str) -> CommandResult {
            let mut ctx = CommandContext {
                fs: &mut self.fs,
                history: &mut self.history,
                theme: &mut self.theme,
            };
            exec(line, &mut ctx)
        }
    }

    fn text(result: CommandResult) -> String {
        match result {
            CommandResult::Output(output) | CommandResult::Failed(output) => output.to_plain(),
            other => panic!("expected output, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(""), CommandResult::Empty);
        assert_eq!(fx.run("   "), CommandResult::Empty);
    }

    #[test]
    fn test_unknown_command() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("rm -rf /"), CommandResult::Unknown("rm".into()));
    }

    #[test]
    fn test_help_lists_commands() {
        let mut fx = Fixture::new();
        let out = text(fx.run("help"));
        assert!(out.starts_with("Available commands:"));
        for name in COMMAND_NAMES {
            assert!(out.contains(&format!("- {}", name)), "missing {}", name);
        }
    }

    #[test]
    fn test_pwd_and_cd() {
        let mut fx = Fixture::new();
        assert_eq!(text(fx.run("pwd")), "/home/user");
        assert_eq!(fx.run("cd  projects"), CommandResult::Silent);
        assert_eq!(text(fx.run("pwd")), "/home/user/projects");
        assert_eq!(fx.run("cd"), CommandResult::Silent);
        assert_eq!(text(fx.run("pwd")), "/home/user");
    }

    #[test]
    fn test_cd_failure() {
        let mut fx = Fixture::new();
        let result = fx.run("cd nowhere");
        assert_eq!(
            result,
            CommandResult::Failed(Output::plain("no such directory: nowhere"))
        );
    }

    #[test]
    fn test_argument_errors_fail() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.run("pwd extra"), CommandResult::Failed(_)));
        assert!(matches!(fx.run("theme -t solarized"), CommandResult::Failed(_)));
        assert!(matches!(fx.run("history --bogus"), CommandResult::Failed(_)));
    }

    #[test]
    fn test_help_flag_is_not_a_failure() {
        let mut fx = Fixture::new();
        let out = text(fx.run("cd --help"));
        assert!(out.contains("Change directory"));
        assert!(matches!(fx.run("ls --help"), CommandResult::Output(_)));
    }

    #[test]
    fn test_ls_table() {
        let mut fx = Fixture::new();
        fx.fs.create_file("/home/user/about.txt", "0123456789").unwrap();
        let out = text(fx.run("ls"));
        assert_eq!(
            out,
            "lrwx  - .. -> /home\ndrwx  - projects/\n.rwx 10 about.txt"
        );
    }

    #[test]
    fn test_theme_switch() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("theme --theme latte"), CommandResult::Silent);
        assert_eq!(fx.theme, ThemeName::Latte);
        assert_eq!(fx.run("theme -t Frappe"), CommandResult::Silent);
        assert_eq!(fx.theme, ThemeName::Frappe);

        let out = text(fx.run("theme"));
        assert!(out.contains("Current theme: frappe"));
        assert!(out.contains("latte, frappe, macchiato, mocha"));
    }

    #[test]
    fn test_history_listing_and_clear() {
        let mut fx = Fixture::new();
        fx.history.push("ls".into());
        fx.history.push("pwd".into());

        assert_eq!(text(fx.run("history")), "   1  ls\n   2  pwd");
        assert_eq!(fx.run("history --clear"), CommandResult::Silent);
        assert!(fx.history.is_empty());
        assert_eq!(fx.run("history"), CommandResult::Silent);
    }

    #[test]
    fn test_clear() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("clear"), CommandResult::Clear);
    }
}
