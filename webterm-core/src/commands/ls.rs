use clap::Parser;

use super::CommandResult;
use crate::filesystem::{Filesystem, LsEntry, LsEntryKind};
use crate::output::{Line, Output, Span, Tone};

/// List files in the current directory
#[derive(Parser, Debug)]
#[command(name = "ls", version, about, long_about = None)]
pub(crate) struct Ls;

fn size_text(entry: &LsEntry) -> String {
    entry.size.map_or("-".to_string(), |x| x.to_string())
}

fn name_tone(kind: LsEntryKind) -> Tone {
    match kind {
        LsEntryKind::Directory => Tone::Accent,
        LsEntryKind::File => Tone::Text,
        LsEntryKind::Link => Tone::Link,
    }
}

pub(crate) fn ls(fs: &Filesystem) -> CommandResult {
    let entries = match fs.ls() {
        Ok(entries) => entries,
        Err(err) => return CommandResult::Failed(Output::plain(&err.to_string())),
    };

    let width = entries
        .iter()
        .map(|entry| size_text(entry).len())
        .max()
        .unwrap_or(1);

    let mut output = Output::empty();
    for entry in &entries {
        output.push(Line::new(vec![
            Span::raw(format!("{} {:>width$} ", entry.permissions, size_text(entry))),
            Span::styled(entry.name.clone(), name_tone(entry.kind)),
        ]));
    }
    CommandResult::Output(output)
}
