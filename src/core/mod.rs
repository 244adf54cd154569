//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error types for parsing, dealing and evaluating.
mod error;
pub use self::error::{DeckError, EvaluationError, ParseError};

/// Bitset of cards used for fast membership checks.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Deck is the normal 52 card deck minus any known cards.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Reading cards from the two character notation.
mod parse;
pub use self::parse::{parse_cards, parse_hand_and_board};

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{CoreRank, Rank, Rankable};

/// Pluggable hand evaluation.
mod evaluator;
pub use self::evaluator::{
    BitSetEvaluator, ComboEvaluator, HandEvaluator, MAX_HAND_SIZE, MIN_HAND_SIZE,
};
