//! Quiz error types.

use character_catalog::Attribute;
use thiserror::Error;

/// Errors raised by the quiz controller and its configuration.
///
/// Controller errors are usage-contract violations: the call is refused and
/// the quiz state is left exactly as it was.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("The quiz has already revealed its guess")]
    AlreadyRevealed,

    #[error("'{value}' is not an option for the {attribute} question")]
    UnknownOption { attribute: Attribute, value: String },

    #[error("No answer recorded for the {attribute} question")]
    MissingAnswer { attribute: Attribute },

    #[error("Invalid quiz configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Override '{rule}' names '{name}', which is not in the catalog")]
    UnknownSurvivor { rule: String, name: String },
}
