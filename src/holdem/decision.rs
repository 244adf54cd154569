use std::fmt;

use super::ValidationError;

/// What to do when facing a bet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Call,
    Fold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Call => write!(f, "CALL"),
            Decision::Fold => write!(f, "FOLD"),
        }
    }
}

/// The pot odds of a bet and what to do about it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetDecision {
    pub pot_odds: f64,
    pub decision: Decision,
}

/// The share of the final pot that calling costs, `bet / (pot + bet)`.
/// This is the equity needed to break even on a call.
///
/// ```
/// use holdem_equity::holdem::pot_odds;
///
/// let odds = pot_odds(100.0, 50.0).unwrap();
/// assert!((odds - 1.0 / 3.0).abs() < 1e-12);
/// assert!(pot_odds(0.0, 0.0).is_err());
/// ```
pub fn pot_odds(pot: f64, bet: f64) -> Result<f64, ValidationError> {
    check_stakes(pot, bet)?;
    let total = pot + bet;
    if total <= 0.0 {
        return Err(ValidationError::UndefinedPotOdds { pot, bet });
    }
    Ok(bet / total)
}

/// Both stakes have to be finite and not negative.
///
/// ```
/// use holdem_equity::holdem::check_stakes;
///
/// assert!(check_stakes(0.0, 0.0).is_ok());
/// assert!(check_stakes(-1.0, 5.0).is_err());
/// ```
pub fn check_stakes(pot: f64, bet: f64) -> Result<(), ValidationError> {
    if !pot.is_finite() || !bet.is_finite() || pot < 0.0 || bet < 0.0 {
        return Err(ValidationError::InvalidStake { pot, bet });
    }
    Ok(())
}

/// Call only when the equity is strictly better than the pot odds.
///
/// An exact match folds. That tie-break is fixed policy.
pub fn recommend(equity: f64, pot_odds: f64) -> Decision {
    if equity > pot_odds {
        Decision::Call
    } else {
        Decision::Fold
    }
}

/// Pot odds and a decision for facing `bet` into `pot`.
///
/// With no bet to call there is nothing to decide and this is `None`,
/// even when the pot is empty too.
///
/// ```
/// use holdem_equity::holdem::{decide, Decision};
///
/// assert_eq!(None, decide(0.4, 100.0, 0.0).unwrap());
/// assert_eq!(None, decide(0.4, 0.0, 0.0).unwrap());
///
/// let facing = decide(0.4, 100.0, 50.0).unwrap().unwrap();
/// assert_eq!(Decision::Call, facing.decision);
/// ```
pub fn decide(equity: f64, pot: f64, bet: f64) -> Result<Option<BetDecision>, ValidationError> {
    check_stakes(pot, bet)?;
    if bet == 0.0 {
        return Ok(None);
    }
    let odds = pot_odds(pot, bet)?;
    Ok(Some(BetDecision {
        pot_odds: odds,
        decision: recommend(equity, odds),
    }))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_pot_odds() {
        assert_relative_eq!(50.0 / 150.0, pot_odds(100.0, 50.0).unwrap());
        assert_relative_eq!(1.0, pot_odds(0.0, 10.0).unwrap());
        assert_relative_eq!(0.5, pot_odds(10.0, 10.0).unwrap());
        assert_relative_eq!(0.0, pot_odds(10.0, 0.0).unwrap());
    }

    #[test]
    fn test_pot_odds_undefined() {
        assert_eq!(
            Err(ValidationError::UndefinedPotOdds { pot: 0.0, bet: 0.0 }),
            pot_odds(0.0, 0.0)
        );
    }

    #[test]
    fn test_pot_odds_bad_stakes() {
        assert!(matches!(
            pot_odds(-5.0, 10.0),
            Err(ValidationError::InvalidStake { .. })
        ));
        assert!(matches!(
            pot_odds(5.0, -1.0),
            Err(ValidationError::InvalidStake { .. })
        ));
        assert!(matches!(
            pot_odds(f64::NAN, 1.0),
            Err(ValidationError::InvalidStake { .. })
        ));
        assert!(matches!(
            pot_odds(1.0, f64::INFINITY),
            Err(ValidationError::InvalidStake { .. })
        ));
    }

    #[test]
    fn test_recommend() {
        assert_eq!(Decision::Call, recommend(0.6, 0.33));
        assert_eq!(Decision::Fold, recommend(0.2, 0.33));
    }

    #[test]
    fn test_equal_folds() {
        assert_eq!(Decision::Fold, recommend(0.5, 0.5));
        let odds = pot_odds(100.0, 100.0).unwrap();
        assert_eq!(Decision::Fold, recommend(odds, odds));
    }

    #[test]
    fn test_decide() {
        assert_eq!(None, decide(0.9, 10.0, 0.0).unwrap());

        let facing = decide(0.25, 100.0, 50.0).unwrap().unwrap();
        assert_relative_eq!(1.0 / 3.0, facing.pot_odds);
        assert_eq!(Decision::Fold, facing.decision);

        assert!(decide(0.5, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_decide_empty_pot_no_bet() {
        assert_eq!(Ok(None), decide(0.5, 0.0, 0.0));
        assert_eq!(Ok(None), decide(0.0, 0.0, 0.0));
        assert!(matches!(
            decide(0.5, f64::NAN, 0.0),
            Err(ValidationError::InvalidStake { .. })
        ));
        assert!(matches!(
            decide(0.5, 0.0, -1.0),
            Err(ValidationError::InvalidStake { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!("CALL", Decision::Call.to_string());
        assert_eq!("FOLD", Decision::Fold.to_string());
    }
}
