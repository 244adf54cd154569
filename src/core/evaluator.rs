use super::{Card, CardBitSet, CardIter, EvaluationError, Rank, Rankable};

/// Smallest number of cards that make a poker hand.
pub const MIN_HAND_SIZE: usize = 5;
/// Hold'em never shows down more than 7 cards.
pub const MAX_HAND_SIZE: usize = 7;

/// Something that can find the best 5 card hand among 5 to 7 cards.
///
/// Every implementation must agree on the ordering of the returned
/// `Rank`s: a greater rank beats a lesser one and equal ranks are an
/// exact tie.
pub trait HandEvaluator {
    fn evaluate(&self, cards: &[Card]) -> Result<Rank, EvaluationError>;
}

/// Check that `cards` is a legal hand and hand back its card set.
fn checked_set(cards: &[Card]) -> Result<CardBitSet, EvaluationError> {
    if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cards.len()) {
        return Err(EvaluationError::HandSize(cards.len()));
    }
    let mut set = CardBitSet::new();
    for card in cards {
        if set.contains(*card) {
            return Err(EvaluationError::DuplicateCard(*card));
        }
        set.insert(*card);
    }
    Ok(set)
}

/// The default evaluator. One pass over the value and suit bitsets
/// regardless of how many cards there are.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitSetEvaluator;

impl HandEvaluator for BitSetEvaluator {
    fn evaluate(&self, cards: &[Card]) -> Result<Rank, EvaluationError> {
        checked_set(cards)?;
        Ok(cards.rank())
    }
}

/// Tries every 5 card combination and keeps the best one.
///
/// Much slower than `BitSetEvaluator`, but it is simple enough to
/// check the faster evaluator against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComboEvaluator;

impl HandEvaluator for ComboEvaluator {
    fn evaluate(&self, cards: &[Card]) -> Result<Rank, EvaluationError> {
        checked_set(cards)?;
        CardIter::new(cards, MIN_HAND_SIZE)
            .map(|five| five.rank_five())
            .max()
            .ok_or(EvaluationError::HandSize(cards.len()))
    }
}
