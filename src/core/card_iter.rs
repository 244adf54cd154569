use super::Card;

/// Iterator over every `num_cards` sized combination of the possible
/// cards. Combinations come out in lexicographic index order.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    done: bool,
}

impl<'a> CardIter<'a> {
    /// Create a new iterator.
    ///
    /// ```
    /// use holdem_equity::core::{parse_cards, CardIter};
    ///
    /// let cards = parse_cards("As Kd Qh Jc").unwrap();
    /// assert_eq!(6, CardIter::new(&cards, 2).count());
    /// ```
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            // Asking for more cards than there are gives nothing back.
            done: num_cards > possible_cards.len(),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result: Vec<Card> = self.idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Find the right most offset that can still move forward.
        // Offset `level` can be at most `len - (num_cards - level)`.
        let len = self.possible_cards.len();
        let movable = (0..self.num_cards)
            .rev()
            .find(|&level| self.idx[level] < len - (self.num_cards - level));

        match movable {
            Some(level) => {
                self.idx[level] += 1;
                for after in level + 1..self.num_cards {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Rankable, parse_cards};

    #[test]
    fn test_iter_one() {
        let cards = parse_cards("2s").unwrap();
        for combo in CardIter::new(&cards, 1) {
            assert_eq!(1, combo.len());
        }
        assert_eq!(1, CardIter::new(&cards, 1).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = parse_cards("2s3s4s").unwrap();

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards and they are different.
        for combo in CardIter::new(&cards, 2) {
            assert_eq!(2, combo.len());
            assert!(combo[0] != combo[1]);
        }
    }

    #[test]
    fn test_iter_order() {
        let cards = parse_cards("2s3s4s").unwrap();
        let combos: Vec<Vec<_>> = CardIter::new(&cards, 2).collect();
        assert_eq!(vec![cards[0], cards[1]], combos[0]);
        assert_eq!(vec![cards[0], cards[2]], combos[1]);
        assert_eq!(vec![cards[1], cards[2]], combos[2]);
    }

    #[test]
    fn test_too_many_requested() {
        let cards = parse_cards("2s3s").unwrap();
        assert_eq!(0, CardIter::new(&cards, 3).count());
    }

    #[test]
    fn test_seven_choose_five() {
        let cards = parse_cards("2s3s4s5s6s7s8s").unwrap();
        assert_eq!(21, CardIter::new(&cards, 5).count());
    }

    #[test]
    fn test_iter_deck() {
        let cards: Vec<_> = Deck::new().into_iter().collect();
        assert_eq!(2_598_960, CardIter::new(&cards, 5).count());
    }

    #[test]
    fn test_iter_rank() {
        let cards = parse_cards("AsKsQsJsTs9s").unwrap();
        let best = CardIter::new(&cards, 5).map(|c| c.rank_five()).max();
        assert_eq!(Some(cards.rank()), best);
    }
}
