//! Rendering of styled output to HTML and ANSI text

use crate::buffer::CommandEntry;
use crate::output::{Line, Output, Span, Tone};
use crate::theme::{Color, TerminalTheme};

/// Prompt marker shown before echoed commands
pub const PROMPT_MARKER: &str = "❯ ";

/// Theme color for a tone
pub fn tone_color(theme: &TerminalTheme, tone: Tone) -> Color {
    match tone {
        Tone::Text => theme.text,
        Tone::Accent => theme.peach,
        Tone::Link => theme.sapphire,
        Tone::Success => theme.green,
        Tone::Error => theme.red,
    }
}

/// Escape text for use in HTML content and single-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub mod html {
    use super::*;

    pub fn span(span: &Span, theme: &TerminalTheme) -> String {
        let text = escape_html(&span.text);
        let tag = if span.bold { "b" } else { "span" };
        match span.tone {
            Some(tone) => format!(
                "<{tag} style='{}'>{text}</{tag}>",
                tone_color(theme, tone).style_text()
            ),
            None if span.bold => format!("<b>{text}</b>"),
            None => text,
        }
    }

    pub fn line(line: &Line, theme: &TerminalTheme) -> String {
        line.spans.iter().map(|s| span(s, theme)).collect()
    }

    /// Lines joined with `<br />`
    pub fn output(output: &Output, theme: &TerminalTheme) -> String {
        output
            .lines
            .iter()
            .map(|l| line(l, theme))
            .collect::<Vec<_>>()
            .join("<br />")
    }

    /// Echoed command followed by its output block
    pub fn entry(entry: &CommandEntry, theme: &TerminalTheme) -> String {
        let marker = Span::styled(PROMPT_MARKER, marker_tone(entry.failed));
        format!(
            "<div>{}{}</div><div class='cmd-output'>{}</div>",
            span(&marker, theme),
            escape_html(&entry.cmd),
            output(&entry.output, theme)
        )
    }

    pub fn entries(entries: &[CommandEntry], theme: &TerminalTheme) -> String {
        entries.iter().map(|e| entry(e, theme)).collect()
    }
}

pub mod ansi {
    use super::*;

    const RESET: &str = "\x1b[0m";
    const BOLD: &str = "\x1b[1m";

    fn foreground(color: Color) -> String {
        format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    pub fn span(span: &Span, theme: &TerminalTheme) -> String {
        if span.tone.is_none() && !span.bold {
            return span.text.clone();
        }
        let mut out = String::new();
        if span.bold {
            out.push_str(BOLD);
        }
        if let Some(tone) = span.tone {
            out.push_str(&foreground(tone_color(theme, tone)));
        }
        out.push_str(&span.text);
        out.push_str(RESET);
        out
    }

    pub fn line(line: &Line, theme: &TerminalTheme) -> String {
        line.spans.iter().map(|s| span(s, theme)).collect()
    }

    pub fn output(output: &Output, theme: &TerminalTheme) -> String {
        output
            .lines
            .iter()
            .map(|l| line(l, theme))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn marker_tone(failed: bool) -> Tone {
    if failed {
        Tone::Error
    } else {
        Tone::Success
    }
}
