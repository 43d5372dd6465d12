use super::bin::Bin;
use super::builder::BinBuilder;
use crate::BINS;
use crate::Chips;
use crate::Error;
use crate::Number;
use crate::casino::Outcome;
use crate::casino::OutcomeFactory;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::sync::Arc;

/// A double-zero wheel: 38 bins and the random source that spins it.
///
/// The bin layout is shared between clones and never changes once built;
/// each clone owns its random source. Every random draw in a simulation
/// goes through here, so seeding the wheel makes a run reproducible.
#[derive(Debug, Clone)]
pub struct Wheel {
    bins: Arc<Vec<Bin>>,
    outcomes: Arc<Vec<Arc<Outcome>>>,
    rng: SmallRng,
}

impl Wheel {
    /// 38 empty bins
    pub fn empty(rng: SmallRng) -> Self {
        Self {
            bins: Arc::new((0..BINS).map(Bin::new).collect()),
            outcomes: Arc::new(Vec::new()),
            rng,
        }
    }
    /// fully populated with every standard bet
    pub fn new(factory: &mut OutcomeFactory, rng: SmallRng) -> Result<Self, Error> {
        let mut wheel = Self::empty(rng);
        BinBuilder::new(factory).build_bins(&mut wheel)?;
        Ok(wheel)
    }
    pub fn seeded(factory: &mut OutcomeFactory, seed: u64) -> Result<Self, Error> {
        Self::new(factory, SmallRng::seed_from_u64(seed))
    }
    pub fn entropic(factory: &mut OutcomeFactory) -> Result<Self, Error> {
        Self::new(factory, SmallRng::from_rng(&mut rand::rng()))
    }
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    pub fn add_outcome(&mut self, number: Number, outcome: Arc<Outcome>) -> Result<(), Error> {
        if number >= BINS {
            return Err(Error::object(format!("no bin {} for {}", number, outcome.name())));
        }
        if !self.outcomes.contains(&outcome) {
            Arc::make_mut(&mut self.outcomes).push(outcome.clone());
        }
        Arc::make_mut(&mut self.bins)[number].add(outcome);
        Ok(())
    }

    /// spin: a uniformly random bin
    pub fn next(&mut self) -> &Bin {
        let number = self.rng.random_range(0..BINS);
        &self.bins[number]
    }
    pub fn get(&self, number: Number) -> Option<&Bin> {
        self.bins.get(number)
    }
    /// linear search by name
    pub fn get_outcome(&self, name: &str) -> Option<Arc<Outcome>> {
        self.outcomes.iter().find(|o| o.name() == name).cloned()
    }
    /// uniformly among distinct outcomes
    pub fn random_outcome(&mut self) -> Option<Arc<Outcome>> {
        self.outcomes.choose(&mut self.rng).cloned()
    }
    /// uniformly in lo..=hi, or lo when the range is empty
    pub fn uniform(&mut self, lo: Chips, hi: Chips) -> Chips {
        if hi <= lo {
            lo
        } else {
            self.rng.random_range(lo..=hi)
        }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }
    pub fn outcomes(&self) -> &[Arc<Outcome>] {
        &self.outcomes
    }
}
