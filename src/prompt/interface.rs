//! Pure interface for the text channel prompts talk to
//!
//! A channel is a duplex, line-oriented text stream. It knows nothing about
//! validation or retries; those live in [`crate::prompt::Prompter`].

use crate::error::Result;

/// Abstract duplex line channel
pub trait LineChannel {
    /// Write prompt text without a trailing newline and flush it.
    fn write_prompt(&mut self, text: &str) -> Result<()>;

    /// Write a diagnostic followed by a newline.
    fn write_diagnostic(&mut self, text: &str) -> Result<()>;

    /// Read one line with its terminator stripped.
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

impl<C: LineChannel + ?Sized> LineChannel for Box<C> {
    fn write_prompt(&mut self, text: &str) -> Result<()> {
        (**self).write_prompt(text)
    }

    fn write_diagnostic(&mut self, text: &str) -> Result<()> {
        (**self).write_diagnostic(text)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}

impl<C: LineChannel + ?Sized> LineChannel for &mut C {
    fn write_prompt(&mut self, text: &str) -> Result<()> {
        (**self).write_prompt(text)
    }

    fn write_diagnostic(&mut self, text: &str) -> Result<()> {
        (**self).write_diagnostic(text)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}

/// Strip a single trailing `\n` or `\r\n`.
pub(crate) fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
