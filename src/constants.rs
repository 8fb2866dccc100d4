//! Constants used throughout lineprompt

/// Diagnostics written back to the user when an answer is rejected
pub mod messages {
    pub const BAD_INT: &str = "Bad int format!  Try again.";
    pub const BAD_DECIMAL: &str = "Bad decimal format!  Try again.";
    pub const ENTER_Y_OR_N: &str = "Enter y or n!";
    pub const OUT_OF_RANGE_SUFFIX: &str = "is out of range!";
}

/// First characters that resolve a yes/no confirmation
pub mod answers {
    pub const AFFIRMATIVE: &[char] = &['y', 't', 'Y', 'T'];
    pub const NEGATIVE: &[char] = &['n', 'f', 'N', 'F'];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const NO_INPUT: i32 = 2;
    pub const ATTEMPTS_EXHAUSTED: i32 = 3;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
