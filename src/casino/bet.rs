use super::outcome::Outcome;
use super::ratio::Ratio;
use crate::Chips;
use crate::Error;
use std::sync::Arc;

/// An amount wagered on a single [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    amount: Chips,
    outcome: Arc<Outcome>,
}

impl Bet {
    pub fn new(amount: Chips, outcome: Arc<Outcome>) -> Result<Self, Error> {
        if amount <= 0 {
            return Err(Error::object(format!("wager of {} on {}", amount, outcome.name())));
        }
        Ok(Self { amount, outcome })
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn outcome(&self) -> &Arc<Outcome> {
        &self.outcome
    }
    /// payout plus the returned wager
    pub fn win_amount(&self) -> Ratio {
        self.outcome.win_amount(self.amount) + self.amount
    }
    pub fn lose_amount(&self) -> Chips {
        self.amount
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome.name())
    }
}
