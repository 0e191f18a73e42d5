use clap::Parser;

use super::CommandResult;
use crate::output::{Line, Output};

/// View and clear the command history
#[derive(Parser, Debug)]
#[command(name = "history", version, about, long_about = None)]
pub(crate) struct History {
    /// Forget every stored command
    #[arg(long)]
    pub(crate) clear: bool,
}

pub(crate) fn history(args: History, history: &mut crate::history::History) -> CommandResult {
    if args.clear {
        history.clear();
        return CommandResult::Silent;
    }
    if history.is_empty() {
        return CommandResult::Silent;
    }

    let mut output = Output::empty();
    for (idx, cmd) in history.entries().iter().enumerate() {
        output.push(Line::raw(format!("{:>4}  {}", idx + 1, cmd)));
    }
    CommandResult::Output(output)
}
