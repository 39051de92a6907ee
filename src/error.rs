//! Error types for game operations.

use thiserror::Error;

/// Error returned when drawing from an empty deck.
///
/// Unreachable under the fixed ruleset: a 40-card deck loses exactly ten
/// cards to the opening deal and nothing else draws. Hitting this error
/// means the deck or deal constants were changed without updating the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw from an empty deck")]
pub struct EmptyDeckError;
