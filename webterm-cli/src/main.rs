//! Web Terminal CLI Application
//!
//! Runs the terminal from `webterm-core` in the process terminal:
//! - Interactive prompt with history persisted to a JSON file
//! - One-shot execution of commands (`-e`)
//! - Filesystem contents and prompt identity from config.toml

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use webterm_core::{JsonFileStore, MemoryStore, SettingsStore, Terminal};

mod config;
mod repl;

use config::AppConfig;
use repl::Repl;

/// Web Terminal - a tiny shell over a virtual filesystem
#[derive(Parser, Debug)]
#[command(name = "webterm")]
#[command(about = "A small terminal emulator over a virtual filesystem", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Settings file for theme and history (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Execute a command and exit (can be repeated)
    #[arg(short, long, value_name = "CMD")]
    exec: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Web Terminal CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using terminal library v{}", webterm_core::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let filesystem = config
        .filesystem
        .build()
        .context("Invalid filesystem configuration")?;

    let store: Box<dyn SettingsStore> = match args.settings.as_ref().or(config.settings.path.as_ref()) {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };

    let terminal = Terminal::new(config.terminal.clone(), store).with_filesystem(filesystem);
    let color = !args.no_color && io::stdout().is_terminal();
    let mut repl = Repl::new(terminal, color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.exec.is_empty() {
        let stdin = io::stdin();
        repl.run(stdin.lock(), &mut out)?;
        return Ok(());
    }

    // One-shot mode: run each command, exit non-zero if the last one failed
    for cmd in &args.exec {
        if repl.execute(cmd, &mut out)? == repl::Flow::Exit {
            break;
        }
    }
    if repl.last_failed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
