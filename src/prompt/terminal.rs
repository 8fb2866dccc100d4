//! Interactive channel on top of dialoguer's terminal handle

use super::interface::LineChannel;
use crate::error::Result;
use dialoguer::console::{style, Term};
use log::trace;
use std::io;

/// End-of-transmission character a raw-mode terminal yields for Ctrl-D.
const EOT: char = '\x04';

/// Line channel for an attended terminal
///
/// Diagnostics are highlighted when the terminal supports colours. The text
/// itself is identical to what the stream channel writes.
pub struct TerminalChannel {
    term: Term,
}

impl TerminalChannel {
    pub fn new(term: Term) -> Self {
        Self { term }
    }

    /// Terminal channel on stderr, matching where dialoguer draws its prompts.
    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }

    pub fn is_attended(&self) -> bool {
        self.term.is_term()
    }
}

impl LineChannel for TerminalChannel {
    fn write_prompt(&mut self, text: &str) -> Result<()> {
        self.term.write_str(text)?;
        self.term.flush()?;
        Ok(())
    }

    fn write_diagnostic(&mut self, text: &str) -> Result<()> {
        self.term.write_line(&style(text).yellow().to_string())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let line = terminal_line(self.term.read_line())?;
        trace!("Read terminal line {:?}", line);
        Ok(line)
    }
}

/// Turn a raw terminal read into a channel read.
///
/// Ctrl-D arrives as a literal EOT in raw mode; a line starting with it, or
/// a read that hit end of file, means the user closed the input.
fn terminal_line(read: io::Result<String>) -> Result<Option<String>> {
    match read {
        Ok(line) if line.starts_with(EOT) => Ok(None),
        Ok(line) => Ok(Some(line)),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(err.into()),
    }
}
