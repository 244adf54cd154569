use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};
use tracing::{event, trace_span};

use super::ValidationError;
use crate::core::{
    BitSetEvaluator, Card, Deck, DeckError, HandEvaluator, Rank, parse_hand_and_board,
};

/// Cards in a hold'em starting hand.
pub const HOLE_CARDS: usize = 2;
/// Cards on a complete board.
pub const FULL_BOARD: usize = 5;
/// Preflop, flop, turn and river.
const BOARD_SIZES: [usize; 4] = [0, 3, 4, 5];

/// How one simulated hand ended for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showdown {
    /// Hero beat every opponent.
    Win,
    /// Hero split with the best opponent.
    Tie,
    /// Some opponent had a better hand.
    Loss,
}

/// Running counters for one simulation.
///
/// Tallies from disjoint sets of trials can be added together in any
/// order; the division into an equity only happens once at the end.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EquityTally {
    pub wins: u64,
    pub ties: u64,
    pub trials: u64,
}

impl EquityTally {
    /// Count one more trial.
    pub fn record(&mut self, showdown: Showdown) {
        self.trials += 1;
        match showdown {
            Showdown::Win => self.wins += 1,
            Showdown::Tie => self.ties += 1,
            Showdown::Loss => {}
        }
    }

    /// Trials that were neither won nor tied. Saturates at zero for a
    /// tally whose fields don't add up.
    pub fn losses(&self) -> u64 {
        self.trials.saturating_sub(self.wins).saturating_sub(self.ties)
    }

    /// Win probability plus half the tie probability.
    /// `None` when nothing has been counted.
    ///
    /// ```
    /// use holdem_equity::holdem::EquityTally;
    ///
    /// let tally = EquityTally { wins: 6, ties: 2, trials: 10 };
    /// assert_eq!(Some(0.7), tally.equity());
    /// assert_eq!(None, EquityTally::default().equity());
    /// ```
    pub fn equity(&self) -> Option<f64> {
        if self.trials == 0 {
            return None;
        }
        Some((self.wins as f64 + self.ties as f64 / 2.0) / self.trials as f64)
    }
}

impl Add for EquityTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            trials: self.trials + rhs.trials,
        }
    }
}

impl AddAssign for EquityTally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for EquityTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| acc + t)
    }
}

/// The result of a run that may have been stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquityEstimate {
    /// Every requested trial ran.
    Complete(EquityTally),
    /// The run was cancelled after `tally.trials` of `requested` trials.
    Partial { tally: EquityTally, requested: u64 },
}

impl EquityEstimate {
    pub fn tally(&self) -> EquityTally {
        match self {
            EquityEstimate::Complete(tally) => *tally,
            EquityEstimate::Partial { tally, .. } => *tally,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, EquityEstimate::Partial { .. })
    }

    /// The equity, only if every requested trial ran.
    pub fn equity(&self) -> Option<f64> {
        match self {
            EquityEstimate::Complete(tally) => tally.equity(),
            EquityEstimate::Partial { .. } => None,
        }
    }

    /// The equity over whatever trials did run, complete or not.
    pub fn partial_equity(&self) -> Option<f64> {
        self.tally().equity()
    }
}

/// Monte Carlo equity of one hero hand against random opponents.
///
/// The request is checked once when the simulator is built. Each
/// trial then gets its own freshly shuffled copy of the remaining
/// deck; the board is completed first and then each opponent is dealt
/// two cards in order.
#[derive(Debug, Clone)]
pub struct EquitySimulator<E = BitSetEvaluator> {
    hero: [Card; HOLE_CARDS],
    board: Vec<Card>,
    num_opponents: usize,
    // Every card not in the hero hand or on the board, in index order.
    deck: Deck,
    evaluator: E,
}

impl EquitySimulator<BitSetEvaluator> {
    /// Create a simulator with the default evaluator.
    ///
    /// ```
    /// use holdem_equity::core::parse_cards;
    /// use holdem_equity::holdem::EquitySimulator;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let hand = parse_cards("AsKs").unwrap();
    /// let board = parse_cards("QsJsTs").unwrap();
    /// let sim = EquitySimulator::new(&hand, &board, 3).unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let tally = sim.run(&mut rng, 100).unwrap();
    /// assert_eq!(Some(1.0), tally.equity());
    /// ```
    pub fn new(
        hand: &[Card],
        board: &[Card],
        num_opponents: usize,
    ) -> Result<Self, ValidationError> {
        Self::with_evaluator(hand, board, num_opponents, BitSetEvaluator)
    }
}

impl<E: HandEvaluator> EquitySimulator<E> {
    /// Create a simulator that ranks hands with `evaluator`.
    pub fn with_evaluator(
        hand: &[Card],
        board: &[Card],
        num_opponents: usize,
        evaluator: E,
    ) -> Result<Self, ValidationError> {
        let result = Self::validate(hand, board, num_opponents, evaluator);
        if let Err(e) = &result {
            event!(tracing::Level::DEBUG, error = %e, "Rejected equity request");
        }
        result
    }

    fn validate(
        hand: &[Card],
        board: &[Card],
        num_opponents: usize,
        evaluator: E,
    ) -> Result<Self, ValidationError> {
        let hero: [Card; HOLE_CARDS] = hand
            .try_into()
            .map_err(|_| ValidationError::HeroHandSize(hand.len()))?;
        if !BOARD_SIZES.contains(&board.len()) {
            return Err(ValidationError::BoardSize(board.len()));
        }
        if num_opponents == 0 {
            return Err(ValidationError::NoOpponents);
        }

        let known: Vec<Card> = hero.iter().chain(board).copied().collect();
        let deck = Deck::excluding(&known).map_err(|e| match e {
            DeckError::DuplicateExclusion(card) => ValidationError::DuplicateCard(card),
            other => other.into(),
        })?;

        // The whole deal has to fit in what's left before any trial runs.
        let needed = (FULL_BOARD - board.len())
            .saturating_add(HOLE_CARDS.saturating_mul(num_opponents));
        if needed > deck.len() {
            return Err(ValidationError::ExhaustedDeck {
                opponents: num_opponents,
                needed,
                available: deck.len(),
            });
        }

        Ok(Self {
            hero,
            board: board.to_vec(),
            num_opponents,
            deck,
            evaluator,
        })
    }

    pub fn hero(&self) -> &[Card] {
        &self.hero
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn num_opponents(&self) -> usize {
        self.num_opponents
    }

    /// Cards dealt from the deck in every trial.
    pub fn cards_needed(&self) -> usize {
        (FULL_BOARD - self.board.len()) + HOLE_CARDS * self.num_opponents
    }

    /// Play out one trial.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Showdown, ValidationError> {
        let mut deck = self.deck.clone();
        deck.shuffle(rng);

        // The first five cards are always the board, the last two
        // are swapped for each player's hole cards.
        let mut cards: Vec<Card> = Vec::with_capacity(FULL_BOARD + HOLE_CARDS);
        cards.extend_from_slice(&self.board);
        cards.extend(deck.draw(FULL_BOARD - self.board.len())?);

        cards.extend_from_slice(&self.hero);
        let hero_rank = self.evaluator.evaluate(&cards)?;

        let mut best_opponent: Option<Rank> = None;
        for _ in 0..self.num_opponents {
            let hole = deck.draw(HOLE_CARDS)?;
            cards.truncate(FULL_BOARD);
            cards.extend(hole);
            let rank = self.evaluator.evaluate(&cards)?;
            best_opponent = best_opponent.max(Some(rank));
        }
        let best_opponent = best_opponent.ok_or(ValidationError::NoOpponents)?;

        Ok(match hero_rank.cmp(&best_opponent) {
            Ordering::Greater => Showdown::Win,
            Ordering::Equal => Showdown::Tie,
            Ordering::Less => Showdown::Loss,
        })
    }

    /// Run `trials` trials one after another.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        trials: u64,
    ) -> Result<EquityTally, ValidationError> {
        Ok(self.run_until(rng, trials, || false)?.tally())
    }

    /// Run up to `trials` trials, asking `should_stop` before each one.
    ///
    /// A run that is stopped early comes back as
    /// `EquityEstimate::Partial` with the trials that did finish.
    pub fn run_until<R, F>(
        &self,
        rng: &mut R,
        trials: u64,
        mut should_stop: F,
    ) -> Result<EquityEstimate, ValidationError>
    where
        R: Rng + ?Sized,
        F: FnMut() -> bool,
    {
        if trials == 0 {
            return Err(ValidationError::NoTrials);
        }
        let span = trace_span!("EquitySimulator::run", trials, opponents = self.num_opponents);
        let _enter = span.enter();

        let mut tally = EquityTally::default();
        for _ in 0..trials {
            if should_stop() {
                event!(
                    tracing::Level::INFO,
                    completed = tally.trials,
                    requested = trials,
                    "Equity simulation cancelled"
                );
                return Ok(EquityEstimate::Partial {
                    tally,
                    requested: trials,
                });
            }
            tally.record(self.simulate(rng)?);
        }

        event!(
            tracing::Level::DEBUG,
            wins = tally.wins,
            ties = tally.ties,
            trials = tally.trials,
            "Equity simulation finished"
        );
        Ok(EquityEstimate::Complete(tally))
    }

    /// Run the trials split into `batches` batches on one thread.
    ///
    /// Batch `i` draws from its own `StdRng` seeded from `seed` and `i`,
    /// so this gives exactly the same tally as `run_parallel`.
    pub fn run_batches_sequential(
        &self,
        trials: u64,
        batches: usize,
        seed: u64,
    ) -> Result<EquityTally, ValidationError> {
        batch_sizes(trials, batches)?
            .into_iter()
            .enumerate()
            .map(|(idx, size)| self.run(&mut batch_rng(seed, idx), size))
            .sum()
    }

    /// Run the trials split into `batches` batches on the rayon pool.
    ///
    /// Each batch owns its deck copies, random source and tally. The
    /// tallies are summed at the end.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(
        &self,
        trials: u64,
        batches: usize,
        seed: u64,
    ) -> Result<EquityTally, ValidationError>
    where
        E: Sync,
    {
        use rayon::prelude::*;

        let tallies: Vec<EquityTally> = batch_sizes(trials, batches)?
            .into_par_iter()
            .enumerate()
            .map(|(idx, size)| self.run(&mut batch_rng(seed, idx), size))
            .collect::<Result<_, _>>()?;
        Ok(tallies.into_iter().sum())
    }
}

/// The random source for one batch.
fn batch_rng(seed: u64, batch: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(batch as u64))
}

/// Split `trials` into at most `batches` non-empty batches whose sizes
/// differ by at most one.
fn batch_sizes(trials: u64, batches: usize) -> Result<Vec<u64>, ValidationError> {
    if trials == 0 {
        return Err(ValidationError::NoTrials);
    }
    if batches == 0 {
        return Err(ValidationError::NoBatches);
    }
    let batches = (batches as u64).min(trials);
    let base = trials / batches;
    let extra = trials % batches;
    Ok((0..batches)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect())
}

/// Everything needed to ask for an equity estimate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityRequest {
    pub hand: Vec<Card>,
    pub board: Vec<Card>,
    pub num_opponents: usize,
    pub trials: u64,
}

impl EquityRequest {
    /// Build a request from the two character notation.
    pub fn parse(
        hand: &str,
        board: &str,
        num_opponents: usize,
        trials: u64,
    ) -> Result<Self, ValidationError> {
        let (hand, board) = parse_hand_and_board(hand, board)?;
        Ok(Self {
            hand,
            board,
            num_opponents,
            trials,
        })
    }

    pub fn simulator(&self) -> Result<EquitySimulator, ValidationError> {
        if self.trials == 0 {
            return Err(ValidationError::NoTrials);
        }
        EquitySimulator::new(&self.hand, &self.board, self.num_opponents)
    }

    /// Run every requested trial with `rng`.
    pub fn estimate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EquityTally, ValidationError> {
        self.simulator()?.run(rng, self.trials)
    }
}

/// Estimate the hero's equity against `num_opponents` random hands.
///
/// ```
/// use holdem_equity::core::parse_cards;
/// use holdem_equity::holdem::estimate_equity;
///
/// let hand = parse_cards("AhAd").unwrap();
/// let equity = estimate_equity(&hand, &[], 1, 1_000).unwrap();
/// assert!((0.0..=1.0).contains(&equity));
/// ```
pub fn estimate_equity(
    hand: &[Card],
    board: &[Card],
    num_opponents: usize,
    trials: u64,
) -> Result<f64, ValidationError> {
    estimate_equity_with_rng(hand, board, num_opponents, trials, &mut rng())
}

/// Same as `estimate_equity` but with a caller supplied random source.
pub fn estimate_equity_with_rng<R: Rng + ?Sized>(
    hand: &[Card],
    board: &[Card],
    num_opponents: usize,
    trials: u64,
    rng: &mut R,
) -> Result<f64, ValidationError> {
    if trials == 0 {
        return Err(ValidationError::NoTrials);
    }
    EquitySimulator::new(hand, board, num_opponents)?
        .run(rng, trials)?
        .equity()
        .ok_or(ValidationError::NoTrials)
}
