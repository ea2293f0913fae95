//! Settings validation error types.

use thiserror::Error;

/// Broad classification of settings errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A duration fell outside the accepted minute range.
    OutOfRange,
}

/// Errors produced when validating interval durations.
///
/// The display strings are shown inline in the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Zero, negative, or non-numeric input.
    #[error("Time must be greater than 0")]
    NotPositive,

    /// More than the maximum interval length.
    #[error("Time cannot exceed 120 minutes")]
    ExceedsMaximum,
}

impl SettingsError {
    /// Returns the error classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPositive | Self::ExceedsMaximum => ErrorKind::OutOfRange,
        }
    }

    /// Returns true if the error is a range violation.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }
}
