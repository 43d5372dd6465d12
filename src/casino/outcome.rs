use super::ratio::Ratio;
use crate::Chips;
use std::hash::Hash;
use std::hash::Hasher;

/// A named proposition a bet can be placed on, paying fixed odds.
///
/// Identity is the name alone: two outcomes with the same name are the same
/// entity whatever their odds. [`OutcomeFactory`](super::OutcomeFactory)
/// guarantees one instance per name, so conflicting odds never arise in
/// practice.
#[derive(Debug, Clone)]
pub struct Outcome {
    name: String,
    odds: Ratio,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: Ratio) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn odds(&self) -> Ratio {
        self.odds
    }
    /// payout on a winning wager, excluding the returned wager
    pub fn win_amount(&self, amount: Chips) -> Ratio {
        self.odds * amount
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Outcome {}

impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.odds)
    }
}
