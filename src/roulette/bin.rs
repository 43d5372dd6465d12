use crate::DOUBLE_ZERO;
use crate::Number;
use crate::casino::Outcome;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::sync::Arc;

/// One pocket of the wheel and every outcome a bet on it would satisfy.
#[derive(Debug, Clone)]
pub struct Bin {
    number: Number,
    outcomes: HashSet<Arc<Outcome>>,
}

impl Bin {
    pub fn new(number: Number) -> Self {
        Self {
            number,
            outcomes: HashSet::new(),
        }
    }
    pub fn number(&self) -> Number {
        self.number
    }
    pub fn add(&mut self, outcome: Arc<Outcome>) {
        self.outcomes.insert(outcome);
    }
    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }
    pub fn outcomes(&self) -> impl Iterator<Item = &Arc<Outcome>> {
        self.outcomes.iter()
    }
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
    /// outcome names in sorted order, handy for comparing bins
    pub fn names(&self) -> BTreeSet<&str> {
        self.outcomes.iter().map(|o| o.name()).collect()
    }
    /// pocket label as printed on the felt
    pub fn label(&self) -> String {
        match self.number {
            DOUBLE_ZERO => String::from("00"),
            n => n.to_string(),
        }
    }
}

impl std::fmt::Display for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.names().into_iter().collect::<Vec<_>>().join(", ");
        write!(f, "Bin({}, {{{}}})", self.label(), names)
    }
}
