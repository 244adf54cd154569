use std::ops::Index;
use std::slice::Iter;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardBitSet, DeckError};

/// `Deck` is an ordered collection of the cards that are still
/// available to be dealt.
///
/// Cards are dealt from the front. A freshly built deck is in card
/// index order so that the same excluded cards and the same random
/// source always produce the same deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the full 52 card deck
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: CardBitSet::default().into_iter().collect(),
        }
    }

    /// Create the 52 card deck minus the cards that are already known.
    ///
    /// Fails if a card is excluded twice.
    ///
    /// ```
    /// use holdem_equity::core::{parse_cards, Deck};
    ///
    /// let known = parse_cards("As Kd").unwrap();
    /// let deck = Deck::excluding(&known).unwrap();
    /// assert_eq!(50, deck.len());
    /// assert!(!deck.contains(&known[0]));
    /// ```
    pub fn excluding(known: &[Card]) -> Result<Self, DeckError> {
        let mut remaining = CardBitSet::default();
        for card in known {
            if !remaining.contains(*card) {
                return Err(DeckError::DuplicateExclusion(*card));
            }
            remaining.remove(*card);
        }
        Ok(Self {
            cards: remaining.into_iter().collect(),
        })
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck.
    /// Fails if the card isn't there.
    pub fn remove(&mut self, c: &Card) -> Result<(), DeckError> {
        let idx = self
            .cards
            .iter()
            .position(|card| card == c)
            .ok_or(DeckError::CardNotInDeck(*c))?;
        self.cards.remove(idx);
        Ok(())
    }

    /// Randomly shuffle the deck.
    /// Every permutation is equally likely given a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Remove and return the first `n` cards of the deck.
    ///
    /// The deck is left untouched when there aren't enough cards.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_contains_in() {
        let d = Deck::new();
        assert!(d.contains(&Card {
            value: Value::Eight,
            suit: Suit::Heart,
        }));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::new();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.remove(&c).is_ok());
        assert!(!d.contains(&c));
        assert_eq!(Err(DeckError::CardNotInDeck(c)), d.remove(&c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_excluding() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        let king = Card::new(Value::King, Suit::Diamond);
        let d = Deck::excluding(&[ace, king]).unwrap();
        assert_eq!(50, d.len());
        assert!(d.iter().all(|c| *c != ace && *c != king));
    }

    #[test]
    fn test_excluding_duplicate() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        assert_eq!(
            Err(DeckError::DuplicateExclusion(ace)),
            Deck::excluding(&[ace, ace])
        );
    }

    #[test]
    fn test_draw_from_front() {
        let mut d = Deck::new();
        let first = d[0];
        let second = d[1];
        assert_eq!(vec![first, second], d.draw(2).unwrap());
        assert_eq!(50, d.len());
        assert!(!d.contains(&first));
    }

    #[test]
    fn test_draw_too_many() {
        let mut d = Deck::new();
        d.draw(50).unwrap();
        assert_eq!(
            Err(DeckError::NotEnoughCards {
                requested: 3,
                remaining: 2,
            }),
            d.draw(3)
        );
        // Nothing was dealt by the failed draw.
        assert_eq!(2, d.len());
        assert_eq!(2, d.draw(2).unwrap().len());
        assert!(d.is_empty());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut one = Deck::new();
        let mut two = Deck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        one.shuffle(&mut rng_one);
        two.shuffle(&mut rng_two);

        assert_eq!(one, two);
        assert_ne!(Deck::new(), one);

        let mut sorted: Vec<Card> = one.into_iter().collect();
        sorted.sort();
        assert_eq!(Deck::new().into_iter().collect::<Vec<_>>(), sorted);
    }
}
