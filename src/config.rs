//! Prompt behaviour settings.

/// Settings shared by every prompt operation of a [`crate::prompt::Prompter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptConfig {
    /// Maximum number of lines read by one operation before it gives up.
    /// `None` keeps asking until an acceptable answer arrives.
    pub max_attempts: Option<u32>,
}

impl PromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}
