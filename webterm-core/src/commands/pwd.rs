use clap::Parser;

use super::CommandResult;
use crate::filesystem::Filesystem;
use crate::output::Output;

/// Print the working directory
#[derive(Parser, Debug)]
#[command(name = "pwd", version, about, long_about = None)]
pub(crate) struct Pwd;

pub(crate) fn pwd(fs: &Filesystem) -> CommandResult {
    CommandResult::Output(Output::plain(&fs.cwd()))
}
