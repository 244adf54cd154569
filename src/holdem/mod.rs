/// Errors for simulation requests and call/fold decisions.
mod errors;
pub use self::errors::ValidationError;

/// Module for `EquitySimulator` that plays out random boards and
/// opponent hands.
mod equity;
/// Export the simulator and its results.
pub use self::equity::{
    EquityEstimate, EquityRequest, EquitySimulator, EquityTally, FULL_BOARD, HOLE_CARDS, Showdown,
    estimate_equity, estimate_equity_with_rng,
};

/// Turning equity and pot odds into a call or a fold.
mod decision;
pub use self::decision::{BetDecision, Decision, check_stakes, decide, pot_odds, recommend};
