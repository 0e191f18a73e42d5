//! Interactive loop over stdin/stdout

use anyhow::Result;
use std::io::{BufRead, Write};
use webterm_core::render::ansi;
use webterm_core::{Output, Terminal};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl {
    terminal: Terminal,
    color: bool,
}

impl Repl {
    pub fn new(terminal: Terminal, color: bool) -> Self {
        Self { terminal, color }
    }

    /// Read lines until EOF or `exit`, echoing the prompt before each one
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            self.write_prompt(out)?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            if self.execute(&line?, out)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one line and print what it produced
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        if line.trim() == "exit" {
            return Ok(Flow::Exit);
        }

        let output = self.terminal.submit(line).map(|entry| entry.output.clone());
        match output {
            Some(output) => {
                if !output.is_empty() {
                    let text = render(&output, self.terminal.theme(), self.color);
                    writeln!(out, "{}", text)?;
                }
            }
            None => {
                if self.color {
                    write!(out, "{}", CLEAR_SCREEN)?;
                }
            }
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// Whether the most recent command failed
    pub fn last_failed(&self) -> bool {
        self.terminal.buffer().last_failed()
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        let line = self.terminal.prompt().line();
        let output = Output::from(line);
        write!(out, "{}", render(&output, self.terminal.theme(), self.color))?;
        out.flush()?;
        Ok(())
    }
}

fn render(output: &Output, theme: &webterm_core::TerminalTheme, color: bool) -> String {
    if color {
        ansi::output(output, theme)
    } else {
        output.to_plain()
    }
}
