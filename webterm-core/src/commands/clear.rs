use clap::Parser;

/// Clear the console
#[derive(Parser, Debug)]
#[command(name = "clear", version, about, long_about = None)]
pub(crate) struct Clear;
