//! Monte Carlo equity for Texas hold'em.
//!
//! Given two hole cards, whatever part of the board is known and a
//! number of opponents holding random hands, this estimates how often
//! the hand wins (ties count half) and whether that is enough to call
//! a bet.
//!
//! ```
//! use holdem_equity::core::parse_hand_and_board;
//! use holdem_equity::holdem::{decide, estimate_equity};
//!
//! let (hand, board) = parse_hand_and_board("As Kd", "Qh Jh 2c").unwrap();
//! let equity = estimate_equity(&hand, &board, 2, 2_000).unwrap();
//! let advice = decide(equity, 100.0, 50.0).unwrap();
//! assert!(advice.is_some());
//! ```

/// Everything in core is agnostic to the poker style:
/// cards, decks, parsing and hand ranking.
pub mod core;
/// Hold'em equity simulation and call/fold recommendations.
pub mod holdem;
