use clap::Parser;

use super::CommandResult;
use crate::output::{Line, Output, Span, Tone};
use crate::theme::ThemeName;

/// Show or change the color theme
#[derive(Parser, Debug)]
#[command(name = "theme", version, about, long_about = None)]
pub(crate) struct Theme {
    /// Theme to switch to
    #[arg(value_enum, short, long, ignore_case = true)]
    pub(crate) theme: Option<ThemeName>,
}

pub(crate) fn theme(args: Theme, current: &mut ThemeName) -> CommandResult {
    match args.theme {
        Some(name) => {
            log::info!("Switching theme: {} -> {}", current, name);
            *current = name;
            CommandResult::Silent
        }
        None => {
            let available = ThemeName::ALL
                .iter()
                .map(ThemeName::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            let mut output = Output::from(Line::new(vec![
                Span::raw("Current theme: "),
                Span::styled(current.as_str(), Tone::Accent),
            ]));
            output.push(Line::raw(format!("Available themes: {}", available)));
            CommandResult::Output(output)
        }
    }
}
