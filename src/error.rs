use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The input channel closed before an acceptable answer was read.
    #[error("No more input: the input stream closed before an answer was given.")]
    EndOfInput,

    /// Only raised when a maximum number of attempts is configured.
    #[error("Gave up after {attempts} unacceptable answers.")]
    AttemptsExhausted { attempts: u32 },
}

impl Error {
    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::IoError(_) => exit_codes::FAILURE,
            Error::EndOfInput => exit_codes::NO_INPUT,
            Error::AttemptsExhausted { .. } => exit_codes::ATTEMPTS_EXHAUSTED,
        }
    }
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with the code matching the error kind.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}
