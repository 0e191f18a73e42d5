use clap::Parser;

use super::CommandResult;
use crate::filesystem::Filesystem;
use crate::output::Output;

/// Change directory
#[derive(Parser, Debug)]
#[command(name = "cd", version, about, long_about = None)]
pub(crate) struct Cd {
    /// The path to change directory to (defaults to the home directory)
    pub(crate) path: Option<String>,
}

pub(crate) fn cd(args: Cd, fs: &mut Filesystem) -> CommandResult {
    let Some(path) = args.path else {
        fs.cd_home();
        return CommandResult::Silent;
    };
    match fs.cd(&path) {
        Ok(()) => CommandResult::Silent,
        Err(err) => CommandResult::Failed(Output::plain(&err.to_string())),
    }
}
