use thiserror::Error;

use super::Card;

/// Errors from reading the two character card notation.
///
/// These are always recoverable; the offending token is carried
/// so that the caller can point the user at it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("Unable to parse card '{0}'")]
    InvalidCard(String),
    #[error("Card string '{0}' has an odd number of characters")]
    OddLength(String),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors from building or dealing a `Deck`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeckError {
    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
    #[error("Card {0} was excluded from the deck more than once")]
    DuplicateExclusion(Card),
    #[error("Can't draw {requested} cards with only {remaining} left in the deck")]
    NotEnoughCards { requested: usize, remaining: usize },
}

/// Errors from hand evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EvaluationError {
    #[error("Hands are evaluated from 5 to 7 cards, got {0}")]
    HandSize(usize),
    #[error("Card {0} is in the hand more than once")]
    DuplicateCard(Card),
}
