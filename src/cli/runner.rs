use crate::{
    cli::{Cli, Commands},
    config::PromptConfig,
    error::Result,
    prompt::{get_channel, LineChannel, Prompter},
};
use log::info;
use serde_json::Value;
use std::fmt;

/// The answer produced by one prompt operation
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Line(String),
    Int(i64),
    Decimal(f64),
    Bool(bool),
}

impl Answer {
    pub fn to_json(&self) -> Value {
        match self {
            Answer::Line(line) => Value::String(line.clone()),
            Answer::Int(n) => Value::from(*n),
            Answer::Decimal(x) => Value::from(*x),
            Answer::Bool(b) => Value::Bool(*b),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Line(line) => write!(f, "{line}"),
            Answer::Int(n) => write!(f, "{n}"),
            Answer::Decimal(x) => write!(f, "{x}"),
            Answer::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Runs one CLI command against a channel
pub struct Runner<C: LineChannel> {
    prompter: Prompter<C>,
}

impl<C: LineChannel> Runner<C> {
    pub fn new(channel: C, config: PromptConfig) -> Self {
        Self { prompter: Prompter::new(channel).with_config(config) }
    }

    /// Executes the prompt the command asks for and returns its answer
    pub fn run(&mut self, command: &Commands) -> Result<Answer> {
        let answer = match command {
            Commands::Line { prompt } => Answer::Line(self.prompter.prompt_line(prompt)?),
            Commands::Int { prompt } => Answer::Int(self.prompter.prompt_int(prompt)?),
            Commands::Decimal { prompt } => {
                Answer::Decimal(self.prompter.prompt_double(prompt)?)
            }
            Commands::IntRange { prompt, low, high } => {
                Answer::Int(self.prompter.prompt_int_in_range(prompt, *low, *high)?)
            }
            Commands::DecimalRange { prompt, low, high } => {
                Answer::Decimal(self.prompter.prompt_double_in_range(prompt, *low, *high)?)
            }
            Commands::Agree { question } => Answer::Bool(self.prompter.agree(question)?),
        };
        info!("Accepted answer: {answer}");
        Ok(answer)
    }

    pub fn into_channel(self) -> C {
        self.prompter.into_channel()
    }
}

/// Render the answer the way the binary prints it.
pub fn format_answer(answer: &Answer, json: bool) -> String {
    if json {
        answer.to_json().to_string()
    } else {
        answer.to_string()
    }
}

/// Ask the question on the default channel and print the answer to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let mut runner = Runner::new(get_channel(cli.plain), cli.prompt_config());
    let answer = runner.run(&cli.command)?;
    println!("{}", format_answer(&answer, cli.json));
    Ok(())
}
