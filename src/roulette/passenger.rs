use super::table::RouletteTable;
use crate::Chips;
use crate::Error;
use crate::FALLBACK_WAGER;
use crate::casino::Bet;
use crate::casino::Outcome;
use crate::casino::Player;
use std::sync::Arc;

/// Always bets on black, a random amount between the table minimum and
/// whatever is left of the stake.
#[derive(Debug, Clone)]
pub struct Passenger57 {
    stake: Chips,
    rounds: usize,
    black: Arc<Outcome>,
}

impl Passenger57 {
    pub fn new(table: &RouletteTable, stake: Chips, rounds: usize) -> Result<Self, Error> {
        let black = table
            .wheel()
            .get_outcome("Black")
            .ok_or_else(|| Error::object("wheel has no Black outcome"))?;
        Ok(Self {
            stake,
            rounds,
            black,
        })
    }
}

impl Player for Passenger57 {
    type Table = RouletteTable;

    fn stake(&self) -> Chips {
        self.stake
    }
    fn set_stake(&mut self, stake: Chips) {
        self.stake = stake;
    }
    fn rounds(&self) -> usize {
        self.rounds
    }
    fn set_rounds(&mut self, rounds: usize) {
        self.rounds = rounds;
    }
    fn make_bet(&self, table: &mut RouletteTable) -> Result<Bet, Error> {
        let amount = if self.stake >= table.min() {
            let min = table.min();
            table.wheel_mut().uniform(min, self.stake)
        } else {
            FALLBACK_WAGER
        };
        Bet::new(amount, self.black.clone())
    }
    fn lose(&mut self, bet: &Bet) {
        log::trace!("lost {}", bet.lose_amount());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::OutcomeFactory;
    use crate::casino::Table;
    use crate::config::Limits;
    use crate::roulette::Wheel;

    fn table() -> RouletteTable {
        let wheel = Wheel::seeded(&mut OutcomeFactory::new(), 57).unwrap();
        RouletteTable::new(Limits::new(10, 500).unwrap(), wheel).unwrap()
    }

    #[test]
    fn always_black_within_stake() {
        let ref mut table = table();
        let player = Passenger57::new(table, 100, 10).unwrap();
        for _ in 0..100 {
            let bet = player.make_bet(table).unwrap();
            assert!(bet.outcome().name() == "Black");
            assert!((10..=100).contains(&bet.amount()));
        }
    }

    #[test]
    fn falls_back_below_minimum() {
        let ref mut table = table();
        let player = Passenger57::new(table, 9, 10).unwrap();
        let bet = player.make_bet(table).unwrap();
        assert!(bet.amount() == FALLBACK_WAGER);
        assert!(!player.can_bet(&bet, table));
        assert!(!player.playing(table));
    }

    #[test]
    fn win_credits_payout_and_wager() {
        let ref mut table = table();
        let mut player = Passenger57::new(table, 100, 10).unwrap();
        let bet = Bet::new(40, player.black.clone()).unwrap();
        player.win(&bet);
        assert!(player.stake() == 180);
        player.lose(&bet);
        assert!(player.stake() == 180);
    }

    #[test]
    fn place_bet_debits_stake() {
        let ref mut table = table();
        let mut player = Passenger57::new(table, 100, 10).unwrap();
        player.place_bet(table).unwrap();
        let placed = table.bets().iter().map(Bet::amount).sum::<Chips>();
        assert!(table.bets().len() == 1);
        assert!(player.stake() == 100 - placed);
        assert!(player.rounds() == 9);
    }

    #[test]
    fn requires_black_on_wheel() {
        let wheel = Wheel::empty(<rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(0));
        let table = RouletteTable::new(Limits::default(), wheel).unwrap();
        assert!(matches!(Passenger57::new(&table, 100, 10), Err(Error::InvalidObject(_))));
    }
}
