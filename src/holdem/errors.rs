use thiserror::Error;

use crate::core::{Card, DeckError, EvaluationError, ParseError};

/// Everything that can stop an equity simulation or a call/fold
/// decision from running as requested.
///
/// A request that fails validation is rejected before any trial runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Enter exactly two hole cards, got {0}")]
    HeroHandSize(usize),
    #[error("Board must have 0, 3, 4, or 5 cards, got {0}")]
    BoardSize(usize),
    #[error("At least one trial is needed")]
    NoTrials,
    #[error("At least one opponent is needed")]
    NoOpponents,
    #[error("Trials must be split into at least one batch")]
    NoBatches,
    #[error("Card {0} is both in the hand and on the board")]
    DuplicateCard(Card),
    #[error(
        "{opponents} opponents need {needed} cards from the deck but only {available} are left"
    )]
    ExhaustedDeck {
        opponents: usize,
        needed: usize,
        available: usize,
    },
    #[error("Pot ({pot}) and bet ({bet}) must be finite and not negative")]
    InvalidStake { pot: f64, bet: f64 },
    #[error("Pot odds are undefined for pot {pot} and bet {bet}")]
    UndefinedPotOdds { pot: f64, bet: f64 },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl ValidationError {
    /// Is this the deck running out of cards?
    pub fn is_exhausted_deck(&self) -> bool {
        matches!(
            self,
            ValidationError::ExhaustedDeck { .. }
                | ValidationError::Deck(DeckError::NotEnoughCards { .. })
        )
    }
}
