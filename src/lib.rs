/// Handles argument parsing and the command-line front end.
pub mod cli;

/// Prompt behaviour settings.
pub mod config;

/// Messages, answer sets, exit codes and verbosity levels.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Validated prompts and the channels they run on.
pub mod prompt;

/// Lexical checks for numeric answers.
pub mod validation;

pub use config::PromptConfig;
pub use error::{Error, Result};
pub use prompt::{LineChannel, Prompter};
