use super::outcome::Outcome;
use super::ratio::Ratio;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry handing out one shared [`Outcome`] per name.
///
/// The first call for a name fixes its odds; later calls return the cached
/// instance and ignore the odds they pass. Nothing is ever evicted.
#[derive(Debug, Default)]
pub struct OutcomeFactory {
    outcomes: HashMap<String, Arc<Outcome>>,
}

impl OutcomeFactory {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn make(&mut self, name: &str, odds: Ratio) -> Arc<Outcome> {
        self.outcomes
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Outcome::new(name, odds)))
            .clone()
    }
    pub fn get(&self, name: &str) -> Option<Arc<Outcome>> {
        self.outcomes.get(name).cloned()
    }
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
