use super::wheel::Wheel;
use crate::Chips;
use crate::Error;
use crate::Number;
use crate::casino::Bet;
use crate::casino::Table;
use crate::config::Limits;

/// The roulette layout: house limits, the bets on the felt, and the wheel.
#[derive(Debug, Clone)]
pub struct RouletteTable {
    limits: Limits,
    bets: Vec<Bet>,
    wheel: Wheel,
}

impl RouletteTable {
    pub fn new(limits: Limits, wheel: Wheel) -> Result<Self, Error> {
        limits.validate()?;
        Ok(Self {
            limits,
            bets: Vec::new(),
            wheel,
        })
    }
    pub fn min(&self) -> Chips {
        self.limits.min
    }
    pub fn max(&self) -> Chips {
        self.limits.max
    }
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }
    pub fn wheel_mut(&mut self) -> &mut Wheel {
        &mut self.wheel
    }
    /// spin the wheel, returning the winning pocket
    pub fn spin(&mut self) -> Number {
        self.wheel.next().number()
    }
}

impl Table for RouletteTable {
    /// within limits on its own, and the running total stays under the max
    fn is_valid(&self, bet: &Bet) -> bool {
        (self.min()..=self.max()).contains(&bet.amount())
            && self.exposure().saturating_add(bet.amount()) <= self.max()
    }
    fn bets(&self) -> &[Bet] {
        &self.bets
    }
    fn bets_mut(&mut self) -> &mut Vec<Bet> {
        &mut self.bets
    }
}

/// placed bets in order, e.g. `Table(10 on Red, 20 on 17)`
impl std::fmt::Display for RouletteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let bets = self.bets.iter().map(Bet::to_string).collect::<Vec<_>>();
        write!(f, "Table({})", bets.join(", "))
    }
}
