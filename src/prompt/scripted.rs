//! Channel that replays predefined answers
//!
//! Useful for automation, testing, or CI/CD environments where nobody is
//! sitting at the keyboard. Everything written to the channel is kept in a
//! transcript so callers can inspect what the user would have seen.

use super::interface::LineChannel;
use crate::error::Result;
use log::debug;
use std::collections::VecDeque;

/// Scripted line channel
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    responses: VecDeque<String>,
    prompts: Vec<String>,
    diagnostics: Vec<String>,
    transcript: String,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a channel that answers with `responses`, in order.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { responses: responses.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Queue one more response after the existing ones.
    pub fn push_response(mut self, response: &str) -> Self {
        self.responses.push_back(response.to_string());
        self
    }

    /// Every prompt text written, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every diagnostic written, in order, without trailing newlines.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Everything written to the channel, exactly as a stream would show it.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl LineChannel for ScriptedChannel {
    fn write_prompt(&mut self, text: &str) -> Result<()> {
        self.prompts.push(text.to_string());
        self.transcript.push_str(text);
        Ok(())
    }

    fn write_diagnostic(&mut self, text: &str) -> Result<()> {
        self.diagnostics.push(text.to_string());
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let response = self.responses.pop_front();
        match &response {
            Some(line) => debug!("Auto-answering with: '{}'", line),
            None => debug!("Scripted responses exhausted"),
        }
        Ok(response)
    }
}
