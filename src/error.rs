//! Error types for tone generation.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the synthesis pipeline.
///
/// Every variant is a caller-input problem reported synchronously at the
/// offending call; nothing is retried internally and no partial output is
/// produced. Out-of-range numeric inputs (octave, sample rate, volume) are
/// clamped rather than rejected, so they never appear here.
#[derive(Debug, Error)]
pub enum Error {
    /// The note name is not one of the 12 pitch classes.
    #[error("'{0}' is not a valid note")]
    InvalidNote(String),

    /// No profile is registered under the given name or index.
    #[error("invalid sound profile: {0}")]
    InvalidProfile(String),

    /// The modulation index is outside the registered set.
    #[error("invalid modulation function index: {0}")]
    InvalidModulation(usize),

    /// A profile with the same name is already registered.
    #[error("a profile named '{0}' is already registered")]
    ProfileRegistration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = Error::InvalidNote("H".to_string());
        assert!(err.to_string().contains('H'));

        let err = Error::InvalidProfile("kazoo".to_string());
        assert!(err.to_string().contains("kazoo"));

        let err = Error::InvalidModulation(42);
        assert!(err.to_string().contains("42"));
    }
}
