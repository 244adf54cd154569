use super::{Card, CardBitSet, ParseError};

/// Parse a string of cards in the two character notation.
///
/// Tokens are separated by whitespace or commas. A token longer than
/// two characters is read as a compact run of cards, two characters
/// at a time. Rank characters are case-insensitive.
///
/// An empty (or whitespace only) string is an empty list of cards.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{parse_cards, Card, Suit, Value};
///
/// let spaced = parse_cards("As Kd").unwrap();
/// let compact = parse_cards("AsKd").unwrap();
///
/// assert_eq!(spaced, compact);
/// assert_eq!(
///     vec![
///         Card::new(Value::Ace, Suit::Spade),
///         Card::new(Value::King, Suit::Diamond)
///     ],
///     spaced
/// );
/// assert!(parse_cards("  ").unwrap().is_empty());
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseError> {
    let mut seen = CardBitSet::new();
    let mut cards = Vec::new();

    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(ParseError::OddLength(token.to_string()));
        }

        for chunk in chars.chunks(2) {
            let chunk: String = chunk.iter().collect();
            let card: Card = chunk.parse()?;
            if seen.contains(card) {
                return Err(ParseError::DuplicateCard(card));
            }
            seen.insert(card);
            cards.push(card);
        }
    }

    Ok(cards)
}

/// Parse the hero's hole cards and the known board together.
///
/// Each string is parsed with `parse_cards`, and a card that shows up
/// in both is rejected. Sizes are not checked here.
///
/// ```
/// use holdem_equity::core::{parse_hand_and_board, ParseError};
///
/// let (hand, board) = parse_hand_and_board("AhKh", "Qh Jh Th").unwrap();
/// assert_eq!(2, hand.len());
/// assert_eq!(3, board.len());
///
/// assert!(matches!(
///     parse_hand_and_board("AhKh", "Ah 2c 3d"),
///     Err(ParseError::DuplicateCard(_))
/// ));
/// ```
pub fn parse_hand_and_board(
    hand_text: &str,
    board_text: &str,
) -> Result<(Vec<Card>, Vec<Card>), ParseError> {
    let hand = parse_cards(hand_text)?;
    let board = parse_cards(board_text)?;

    let held: CardBitSet = hand.iter().copied().collect();
    if let Some(dupe) = board.iter().find(|c| held.contains(**c)) {
        return Err(ParseError::DuplicateCard(*dupe));
    }
    Ok((hand, board))
}
