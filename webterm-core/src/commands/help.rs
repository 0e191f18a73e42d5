use clap::Parser;

use super::{CommandResult, COMMAND_NAMES};
use crate::output::{Line, Output, Span, Tone};

/// List available commands
#[derive(Parser, Debug)]
#[command(name = "help", version, about, long_about = None)]
pub(crate) struct Help;

pub(crate) fn help() -> CommandResult {
    let mut output = Output::from(Line::new(vec![
        Span::styled("Available commands:", Tone::Accent).bold(),
    ]));
    for name in COMMAND_NAMES {
        output.push(Line::raw(format!("- {}", name)));
    }
    output.push(Line::default());
    output.push(Line::raw(
        "Run [command] --help to get help for a specific command",
    ));
    CommandResult::Output(output)
}
