//! Validated console prompts
//!
//! The module is structured in layers:
//! - `interface`: the abstract [`LineChannel`] every prompt reads from and writes to
//! - `stream`, `terminal`, `scripted`: concrete channels
//! - [`Prompter`]: the read-validate-reprompt loops built on top of a channel
//!
//! Malformed answers never surface as errors. The user sees a diagnostic and
//! is asked again with the same prompt text. The only ways out of a loop other
//! than an acceptable answer are the channel closing ([`Error::EndOfInput`]),
//! an I/O failure, or a configured attempt limit ([`Error::AttemptsExhausted`]).

use crate::{
    config::PromptConfig,
    constants::{answers, messages},
    error::{Error, Result},
    validation::{is_decimal_string, is_int_string},
};
use log::debug;
use std::{
    fmt::Display,
    io::{self, IsTerminal, StdinLock, Stdout},
    str::FromStr,
};

pub mod interface;
pub mod scripted;
pub mod stream;
pub mod terminal;

// Re-export the channel interface and backends for easy access
pub use interface::LineChannel;
pub use scripted::ScriptedChannel;
pub use stream::StreamChannel;
pub use terminal::TerminalChannel;

/// Lines read so far by one prompt operation, against an optional limit.
struct Attempts {
    limit: Option<u32>,
    used: u32,
}

impl Attempts {
    fn new(limit: Option<u32>) -> Self {
        Self { limit, used: 0 }
    }

    /// Accounts for one more read, failing once the limit has been spent.
    fn charge(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(Error::AttemptsExhausted { attempts: self.used });
            }
        }
        self.used += 1;
        Ok(())
    }
}

/// Runs prompt operations against a [`LineChannel`]
pub struct Prompter<C: LineChannel> {
    channel: C,
    config: PromptConfig,
}

impl Prompter<StreamChannel<StdinLock<'static>, Stdout>> {
    /// Prompter over standard input and output with the default config.
    pub fn stdio() -> Self {
        Self::new(StreamChannel::stdio())
    }
}

impl<C: LineChannel> Prompter<C> {
    pub fn new(channel: C) -> Self {
        Self { channel, config: PromptConfig::default() }
    }

    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Show `prompt` and return the next line as typed.
    ///
    /// Only the line terminator is removed. There is no validation and no
    /// retry.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.channel.write_prompt(prompt)?;
        self.channel.read_line()?.ok_or(Error::EndOfInput)
    }

    /// Ask until the trimmed answer is an integer.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64> {
        let mut attempts = self.attempts();
        self.fetch_number(prompt, &mut attempts, is_int_string, messages::BAD_INT)
    }

    /// Ask until the trimmed answer is a decimal number.
    pub fn prompt_double(&mut self, prompt: &str) -> Result<f64> {
        let mut attempts = self.attempts();
        self.fetch_number(prompt, &mut attempts, is_decimal_string, messages::BAD_DECIMAL)
    }

    /// Ask until the answer is an integer in `[low, high]`.
    ///
    /// The range is appended to the prompt. `low > high` is not checked and
    /// can never be satisfied.
    pub fn prompt_int_in_range(&mut self, prompt: &str, low: i64, high: i64) -> Result<i64> {
        self.fetch_in_range(prompt, low, high, is_int_string, messages::BAD_INT)
    }

    /// Ask until the answer is a decimal in `[low, high]`.
    pub fn prompt_double_in_range(
        &mut self,
        prompt: &str,
        low: f64,
        high: f64,
    ) -> Result<f64> {
        self.fetch_in_range(prompt, low, high, is_decimal_string, messages::BAD_DECIMAL)
    }

    /// Ask `question` until the first character of the answer reads as yes
    /// (`y`, `t`) or no (`n`, `f`), in either case.
    pub fn agree(&mut self, question: &str) -> Result<bool> {
        let mut attempts = self.attempts();
        loop {
            let answer = self.read_answer(question, &mut attempts)?;
            match answer.chars().next() {
                Some(ch) if answers::AFFIRMATIVE.contains(&ch) => return Ok(true),
                Some(ch) if answers::NEGATIVE.contains(&ch) => return Ok(false),
                _ => debug!("Rejected confirmation answer {:?}", answer),
            }
            self.channel.write_diagnostic(messages::ENTER_Y_OR_N)?;
        }
    }

    fn attempts(&self) -> Attempts {
        Attempts::new(self.config.max_attempts)
    }

    fn read_answer(&mut self, prompt: &str, attempts: &mut Attempts) -> Result<String> {
        attempts.charge()?;
        self.prompt_line(prompt)
    }

    /// Format loop shared by the numeric prompts.
    ///
    /// A well-formed answer the parser still refuses (an integer too large
    /// for `i64`) is reported with the same diagnostic as a malformed one.
    fn fetch_number<T: FromStr>(
        &mut self,
        prompt: &str,
        attempts: &mut Attempts,
        is_valid: fn(&str) -> bool,
        diagnostic: &str,
    ) -> Result<T> {
        loop {
            let line = self.read_answer(prompt, attempts)?;
            let answer = line.trim();
            if is_valid(answer) {
                match answer.parse::<T>() {
                    Ok(number) => return Ok(number),
                    Err(_) => debug!("Answer {:?} is well formed but does not parse", answer),
                }
            } else {
                debug!("Rejected answer {:?} for prompt {:?}", answer, prompt);
            }
            self.channel.write_diagnostic(diagnostic)?;
        }
    }

    fn fetch_in_range<T>(
        &mut self,
        prompt: &str,
        low: T,
        high: T,
        is_valid: fn(&str) -> bool,
        diagnostic: &str,
    ) -> Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        let long_prompt = format!("{prompt} ({low} through {high}) ");
        if low > high {
            debug!("Range {} through {} is empty; no answer can satisfy it", low, high);
        }

        let mut attempts = self.attempts();
        loop {
            let number: T = self.fetch_number(&long_prompt, &mut attempts, is_valid, diagnostic)?;
            if !(number < low || number > high) {
                return Ok(number);
            }
            debug!("Answer {} is outside {} through {}", number, low, high);
            self.channel
                .write_diagnostic(&format!("{number} {}", messages::OUT_OF_RANGE_SUFFIX))?;
        }
    }
}

/// Pick the channel for an interactive session.
///
/// The dialoguer terminal is used when both stdin and stderr are attached to
/// a terminal and `plain` is not set; otherwise prompts are written to stderr
/// and answers read line by line from stdin, which keeps piped input and
/// redirected files working.
pub fn get_channel(plain: bool) -> Box<dyn LineChannel> {
    let terminal = TerminalChannel::stderr();
    if !plain && terminal.is_attended() && io::stdin().is_terminal() {
        debug!("Using terminal channel");
        Box::new(terminal)
    } else {
        debug!("Using stream channel");
        Box::new(StreamChannel::new(io::stdin().lock(), io::stderr()))
    }
}

/// Convenience function to create a prompter on the default channel
pub fn get_prompter(plain: bool, config: PromptConfig) -> Prompter<Box<dyn LineChannel>> {
    Prompter::new(get_channel(plain)).with_config(config)
}
