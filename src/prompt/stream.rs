//! Channel over any buffered reader and writer pair

use super::interface::{strip_line_terminator, LineChannel};
use crate::error::Result;
use log::trace;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line channel backed by a `BufRead` input and a `Write` output
pub struct StreamChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the channel, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamChannel<StdinLock<'static>, Stdout> {
    /// Channel reading standard input and writing standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineChannel for StreamChannel<R, W> {
    fn write_prompt(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_diagnostic(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            trace!("Input stream closed");
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and are rejected like any bad answer.
        let line = String::from_utf8_lossy(&buf).into_owned();
        trace!("Read raw line {:?}", line);
        Ok(Some(strip_line_terminator(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::messages, prompt::Prompter};
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_end_of_input() {
        let mut channel = StreamChannel::new(Cursor::new("first\r\n second \nlast"), Vec::new());
        assert_eq!(channel.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(channel.read_line().unwrap(), Some(" second ".to_string()));
        assert_eq!(channel.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(channel.read_line().unwrap(), None);
        assert_eq!(channel.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut channel = StreamChannel::new(Cursor::new("\n"), Vec::new());
        assert_eq!(channel.read_line().unwrap(), Some(String::new()));
        assert_eq!(channel.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_has_no_newline_and_diagnostic_does() {
        let mut channel = StreamChannel::new(Cursor::new(""), Vec::new());
        channel.write_prompt("Name? ").unwrap();
        channel.write_diagnostic("Enter y or n!").unwrap();
        let (_, output) = channel.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Name? Enter y or n!\n");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut channel = StreamChannel::new(Cursor::new(vec![b'a', 0xff, b'\n']), Vec::new());
        assert_eq!(channel.read_line().unwrap(), Some("a\u{FFFD}".to_string()));
        assert_eq!(channel.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_answer_is_retried() {
        let input = Cursor::new(b"\xff\n5\n".to_vec());
        let mut prompter = Prompter::new(StreamChannel::new(input, Vec::new()));
        assert_eq!(prompter.prompt_int("N? ").unwrap(), 5);

        let (_, output) = prompter.into_channel().into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("N? {}\nN? ", messages::BAD_INT)
        );
    }
}
