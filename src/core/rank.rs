use super::{Card, CardBitSet};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// The derived ordering is the poker ordering: a greater `Rank`
/// beats a lesser one and equal ranks split the pot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

/// Just the category of a `Rank` without the kickers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum CoreRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl From<Rank> for CoreRank {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => CoreRank::HighCard,
            Rank::OnePair(_) => CoreRank::OnePair,
            Rank::TwoPair(_) => CoreRank::TwoPair,
            Rank::ThreeOfAKind(_) => CoreRank::ThreeOfAKind,
            Rank::Straight(_) => CoreRank::Straight,
            Rank::Flush(_) => CoreRank::Flush,
            Rank::FullHouse(_) => CoreRank::FullHouse,
            Rank::FourOfAKind(_) => CoreRank::FourOfAKind,
            Rank::StraightFlush(_) => CoreRank::StraightFlush,
        }
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of card values find the highest straight in it.
/// The wheel is 0 and broadway is 9.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Every bit that survives the shifts is the top of five
    // values in a row.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the N most significant bits.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// From a slice of values sets find if there's one that has a
/// flush
fn find_flush(suit_value_sets: &[u32]) -> Option<usize> {
    suit_value_sets.iter().position(|sv| sv.count_ones() >= 5)
}

/// Can this turn into a hand rank?
///
/// Both methods assume the cards are distinct. `HandEvaluator`
/// is the checked way in.
pub trait Rankable {
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards to find the best 5 card hand.
    /// This works on 5, 6 or 7 cards. If you know that the hand only
    /// contains 5 cards then `rank_five` will be faster.
    ///
    /// # Examples
    /// ```
    /// use holdem_equity::core::{parse_cards, Rank, Rankable};
    ///
    /// let hand = parse_cards("2h2d8d8sKd6sTh").unwrap();
    /// let rank = hand.rank();
    /// assert!(Rank::TwoPair(0) <= rank);
    /// assert!(Rank::TwoPair(u32::MAX) >= rank);
    /// ```
    fn rank(&self) -> Rank {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut count_to_value: [u32; 5] = [0; 5];
        let mut suit_value_sets: [u32; 4] = [0; 4];
        let mut value_set: u32 = 0;

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
            suit_value_sets[s as usize] |= 1 << v;
        }

        // Now rotate the value to count map.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        // With at most 7 cards a flush rules out quads and full houses,
        // so it can be decided first.
        if let Some(flush_idx) = find_flush(&suit_value_sets) {
            if let Some(rank) = rank_straight(suit_value_sets[flush_idx]) {
                Rank::StraightFlush(rank)
            } else {
                Rank::Flush(keep_n(suit_value_sets[flush_idx], 5))
            }
        } else if count_to_value[4] != 0 {
            let high = keep_highest(value_set ^ count_to_value[4]);
            Rank::FourOfAKind((count_to_value[4] << 13) | high)
        } else if count_to_value[3].count_ones() == 2 {
            // Two sets. The lower one plays as the pair.
            let set = keep_highest(count_to_value[3]);
            let pair = count_to_value[3] ^ set;
            Rank::FullHouse((set << 13) | pair)
        } else if count_to_value[3] != 0 && count_to_value[2] != 0 {
            let set = count_to_value[3];
            let pair = keep_highest(count_to_value[2]);
            Rank::FullHouse((set << 13) | pair)
        } else if let Some(s_rank) = rank_straight(value_set) {
            Rank::Straight(s_rank)
        } else if count_to_value[3] != 0 {
            let low = keep_n(value_set ^ count_to_value[3], 2);
            Rank::ThreeOfAKind((count_to_value[3] << 13) | low)
        } else if count_to_value[2].count_ones() >= 2 {
            // Three pairs leave the lowest pair as a kicker candidate.
            let pairs = keep_n(count_to_value[2], 2);
            let low = keep_highest(value_set ^ pairs);
            Rank::TwoPair((pairs << 13) | low)
        } else if count_to_value[2] == 0 {
            Rank::HighCard(keep_n(value_set, 5))
        } else {
            let pair = count_to_value[2];
            let low = keep_n(value_set ^ pair, 3);
            Rank::OnePair((pair << 13) | low)
        }
    }

    /// Rank exactly five cards. It doesn't do any caching so it's left up
    /// to the user to understand that duplicate work will be done if this
    /// is called more than once.
    fn rank_five(&self) -> Rank {
        let mut suit_set: u32 = 0;
        let mut value_set: u32 = 0;
        let mut value_to_count: [u8; 13] = [0; 13];
        // count => bitset of values.
        let mut count_to_value: [u32; 5] = [0; 5];

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            suit_set |= 1 << s;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
        }

        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        // The major deciding factor for hand rank
        // is the number of unique card values.
        match value_set.count_ones() {
            5 => {
                let is_flush = suit_set.count_ones() == 1;
                match (rank_straight(value_set), is_flush) {
                    (None, false) => Rank::HighCard(value_set),
                    (Some(rank), false) => Rank::Straight(rank),
                    (None, true) => Rank::Flush(value_set),
                    (Some(rank), true) => Rank::StraightFlush(rank),
                }
            }
            4 => {
                let major_rank = count_to_value[2];
                let minor_rank = value_set ^ major_rank;
                Rank::OnePair((major_rank << 13) | minor_rank)
            }
            3 => {
                let three_value = count_to_value[3];
                if three_value > 0 {
                    let minor_rank = value_set ^ three_value;
                    Rank::ThreeOfAKind((three_value << 13) | minor_rank)
                } else {
                    let major_rank = count_to_value[2];
                    let minor_rank = value_set ^ major_rank;
                    Rank::TwoPair((major_rank << 13) | minor_rank)
                }
            }
            2 => {
                let three_value = count_to_value[3];
                if three_value > 0 {
                    let minor_rank = value_set ^ three_value;
                    Rank::FullHouse((three_value << 13) | minor_rank)
                } else {
                    let major_rank = count_to_value[4];
                    let minor_rank = value_set ^ major_rank;
                    Rank::FourOfAKind((major_rank << 13) | minor_rank)
                }
            }
            _ => unreachable!("five distinct cards have two to five values"),
        }
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Value, parse_cards};

    fn rank_str(s: &str) -> Rank {
        parse_cards(s).unwrap().rank()
    }

    #[test]
    fn test_keep_highest() {
        assert_eq!(0b100, keep_highest(0b111));
    }

    #[test]
    fn test_keep_n() {
        assert_eq!(3, keep_n(0b1111, 3).count_ones());
        assert_eq!(0b1110, keep_n(0b1111, 3));
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard(0) < Rank::StraightFlush(0));
        assert!(Rank::HighCard(0) < Rank::FourOfAKind(0));
        assert!(Rank::HighCard(0) < Rank::ThreeOfAKind(0));
        assert!(Rank::HighCard(u32::MAX) < Rank::OnePair(0));
    }

    #[test]
    fn test_high_card_hand() {
        let rank = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        let hand = parse_cards("Ad8h9cTc5c").unwrap();
        assert_eq!(Rank::HighCard(rank), hand.rank_five());
        assert_eq!(Rank::HighCard(rank), hand.rank());
    }

    #[test]
    fn test_flush() {
        let rank = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        assert_eq!(Rank::Flush(rank), rank_str("Ad8d9dTd5d"));
    }

    #[test]
    fn test_full_house() {
        let rank = ((1 << (Value::Nine as u32)) << 13) | (1 << (Value::Ace as u32));
        assert_eq!(Rank::FullHouse(rank), rank_str("AdAc9d9c9s"));
    }

    #[test]
    fn test_two_pair() {
        let rank = (((1 << Value::Ace as u32) | (1 << Value::Nine as u32)) << 13)
            | (1 << Value::Ten as u32);
        assert_eq!(Rank::TwoPair(rank), rank_str("AdAc9d9cTs"));
    }

    #[test]
    fn test_one_pair() {
        let rank = ((1 << Value::Ace as u32) << 13)
            | (1 << Value::Nine as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Ten as u32);
        assert_eq!(Rank::OnePair(rank), rank_str("AdAc9d8cTs"));
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = ((1 << (Value::Ace as u32)) << 13) | (1 << (Value::Ten as u32));
        assert_eq!(Rank::FourOfAKind(rank), rank_str("AdAcAsAhTs"));
    }

    #[test]
    fn test_wheel() {
        assert_eq!(Rank::Straight(0), rank_str("Ad2c3s4h5s"));
        assert_eq!(Rank::Straight(0), parse_cards("Ad2c3s4h5s").unwrap().rank_five());
    }

    #[test]
    fn test_straight() {
        assert_eq!(Rank::Straight(1), rank_str("2c3s4h5s6d"));
        assert_eq!(Rank::Straight(9), rank_str("AcKsQhJsTd"));
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        assert!(rank_str("Ad2c3s4h5s") < rank_str("2c3s4h5s6d"));
        // With a six the wheel isn't the best straight.
        assert_eq!(Rank::Straight(1), rank_str("Ad2c3s4h5s6c9d"));
    }

    #[test]
    fn test_steel_wheel() {
        assert_eq!(Rank::StraightFlush(0), rank_str("As2s3s4s5sKd"));
    }

    #[test]
    fn test_royal_beats_two_pair() {
        let two_pair = rank_str("2s2h3d3c4h5sKd");
        let royal = rank_str("AsKsQsJsTs");
        assert_eq!(CoreRank::TwoPair, CoreRank::from(two_pair));
        assert_eq!(Rank::StraightFlush(9), royal);
        assert!(two_pair < royal);
        assert!(royal == rank_str("AsKsQsJsTs2h2d"));
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = ((1 << (Value::Two as u32)) << 13)
            | (1 << (Value::Five as u32))
            | (1 << (Value::Six as u32));
        assert_eq!(Rank::ThreeOfAKind(rank), rank_str("2c2s2h5s6d"));
    }

    #[test]
    fn test_seven_two_sets() {
        let rank = ((1 << (Value::King as u32)) << 13) | (1 << (Value::Two as u32));
        assert_eq!(Rank::FullHouse(rank), rank_str("KcKsKh2s2d2c9h"));
    }

    #[test]
    fn test_seven_three_pairs() {
        // The third pair plays as the kicker.
        let rank = (((1 << Value::Ace as u32) | (1 << Value::King as u32)) << 13)
            | (1 << Value::Queen as u32);
        assert_eq!(Rank::TwoPair(rank), rank_str("AcAsKhKsQdQc2h"));
    }

    #[test]
    fn test_seven_flush_keeps_five() {
        let five = rank_str("Ah9h7h5h3h");
        let seven = rank_str("Ah9h7h5h3h2hKd");
        assert_eq!(five, seven);
    }

    #[test]
    fn test_kickers_split() {
        // Board plays for both players.
        let a = rank_str("AsKdQhJc9s2c3d");
        let b = rank_str("AsKdQhJc9s4h5h");
        assert_eq!(a, b);

        let better = rank_str("AcAdKh7s4c2d3h");
        let worse = rank_str("AhAsQh7d4s2c3s");
        assert!(better > worse);
    }

    #[test]
    fn test_straight_flush_over_quads() {
        assert!(rank_str("9h8h7h6h5h") > rank_str("AcAdAhAsKd"));
    }

    #[test]
    fn test_bit_set_rank() {
        let cards = parse_cards("2h2d8d8sKd6sTh").unwrap();
        let set: CardBitSet = cards.iter().copied().collect();
        assert_eq!(cards.rank(), set.rank());
    }
}
