//! Error types.
//!
//! `InputError` covers bad player input and is always recovered by asking
//! again. `ArcadeError` covers requests the engine refuses in its current
//! state; front-ends report it and leave the session untouched.

use thiserror::Error;

use super::GameKind;

/// Invalid player input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input was not a whole number.
    #[error("'{0}' is not a whole number")]
    NonNumericInput(String),

    /// The number falls outside the accepted range.
    #[error("{value} is outside {low}-{high}")]
    OutOfRangeInput { value: i64, low: i64, high: i64 },

    /// The input matched no known command or answer.
    #[error("unrecognized command '{0}'")]
    UnrecognizedCommand(String),
}

/// A request the engine cannot honor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArcadeError {
    /// Invalid input was submitted.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The round already reached a terminal outcome.
    #[error("the {0} round is already resolved")]
    RoundResolved(GameKind),

    /// No round of this kind is in progress.
    #[error("no {0} round in progress")]
    NoActiveRound(GameKind),

    /// The operation does not apply to this kind of round.
    #[error("operation does not apply to a {0} round")]
    WrongKind(GameKind),

    /// Today's challenge has been cracked already.
    #[error("today's challenge is already completed")]
    DailyCompleted,

    /// Blitz roll count must be even and within the allowed range.
    #[error("blitz needs an even roll count between {min} and {max}, got {rolls}")]
    InvalidBlitzRolls { rolls: u32, min: u32, max: u32 },
}

/// Result alias for engine operations.
pub type ArcadeResult<T> = Result<T, ArcadeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        let err = InputError::OutOfRangeInput {
            value: 7,
            low: 1,
            high: 6,
        };
        assert_eq!(err.to_string(), "7 is outside 1-6");
        assert_eq!(
            InputError::NonNumericInput("abc".into()).to_string(),
            "'abc' is not a whole number"
        );
    }

    #[test]
    fn test_input_converts_to_arcade_error() {
        let err: ArcadeError = InputError::UnrecognizedCommand("x".into()).into();
        assert_eq!(err.to_string(), "unrecognized command 'x'");
    }
}
