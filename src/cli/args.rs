use crate::config::PromptConfig;
use crate::constants::verbosity;
use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Ask one validated question on the console and print the answer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Give up after this many unacceptable answers (default: keep asking).
    #[arg(long = "max-attempts", global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Print the answer as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Read plain lines from stdin even when attached to a terminal.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Read one line as typed.
    Line {
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },
    /// Read an integer.
    Int {
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },
    /// Read a decimal number.
    Decimal {
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },
    /// Read an integer between LOW and HIGH inclusive.
    IntRange {
        #[arg(value_name = "PROMPT")]
        prompt: String,
        #[arg(value_name = "LOW", allow_negative_numbers = true)]
        low: i64,
        #[arg(value_name = "HIGH", allow_negative_numbers = true)]
        high: i64,
    },
    /// Read a decimal number between LOW and HIGH inclusive.
    DecimalRange {
        #[arg(value_name = "PROMPT")]
        prompt: String,
        #[arg(value_name = "LOW", allow_negative_numbers = true)]
        low: f64,
        #[arg(value_name = "HIGH", allow_negative_numbers = true)]
        high: f64,
    },
    /// Ask a yes/no question.
    Agree {
        #[arg(value_name = "QUESTION")]
        question: String,
    },
}

impl Cli {
    pub fn prompt_config(&self) -> PromptConfig {
        PromptConfig::new().with_max_attempts(self.max_attempts)
    }
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
