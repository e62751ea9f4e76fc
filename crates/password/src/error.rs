use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a word list has no tokens.
    #[error("word list is empty, unable to assemble a password")]
    EmptyWordList,

    /// Error generated when the tokens of a word list do not
    /// contain any characters that can be used in a password.
    #[error("word list tokens produced an empty password")]
    EmptyPassword,

    /// Error generated when asked to select from zero candidates.
    #[error("candidate batch size must be greater than zero")]
    EmptyBatch,

    /// Error generated when a configuration value is out of range.
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the configuration value.
        name: &'static str,
        /// Value that was given.
        value: usize,
        /// Minimum allowed value.
        min: usize,
        /// Maximum allowed value.
        max: usize,
    },
}
