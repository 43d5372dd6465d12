use super::table::RouletteTable;
use crate::Chips;
use crate::Error;
use crate::casino::Bet;
use crate::casino::Player;

/// Doubles the wager after every loss and resets after a win.
///
/// The loss counter is never capped. Once the doubled wager outgrows the
/// stake or the table maximum the player simply stops being able to bet,
/// which is how a Martingale session ends.
#[derive(Debug, Clone)]
pub struct Martingale {
    stake: Chips,
    rounds: usize,
    wager: Chips,
    losses: u32,
}

impl Martingale {
    pub fn new(wager: Chips, stake: Chips, rounds: usize) -> Result<Self, Error> {
        if wager <= 0 {
            return Err(Error::object(format!("martingale base wager {}", wager)));
        }
        Ok(Self {
            stake,
            rounds,
            wager,
            losses: 0,
        })
    }
    /// consecutive losses since the last win
    pub fn losses(&self) -> u32 {
        self.losses
    }
    /// base × 2^losses, saturating once it no longer fits
    pub fn wager(&self) -> Chips {
        (2 as Chips)
            .checked_pow(self.losses)
            .map_or(Chips::MAX, |factor| self.wager.saturating_mul(factor))
    }
}

impl Player for Martingale {
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
        let outcome = table
            .wheel_mut()
            .random_outcome()
            .ok_or_else(|| Error::object("wheel has no outcomes to bet on"))?;
        Bet::new(self.wager(), outcome)
    }
    fn win(&mut self, bet: &Bet) {
        self.credit(bet);
        self.losses = 0;
    }
    fn lose(&mut self, _: &Bet) {
        self.losses = self.losses.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::OutcomeFactory;
    use crate::config::Limits;
    use crate::roulette::Wheel;

    fn table() -> RouletteTable {
        let wheel = Wheel::seeded(&mut OutcomeFactory::new(), 2).unwrap();
        RouletteTable::new(Limits::new(5, 500).unwrap(), wheel).unwrap()
    }

    #[test]
    fn doubles_after_each_loss() {
        let ref mut table = table();
        let mut player = Martingale::new(10, 1000, 100).unwrap();
        for k in 0..6 {
            let bet = player.make_bet(table).unwrap();
            assert!(bet.amount() == 10 * (1 << k));
            player.lose(&bet);
        }
        assert!(player.losses() == 6);
    }

    #[test]
    fn win_resets_counter() {
        let ref mut table = table();
        let mut player = Martingale::new(10, 1000, 100).unwrap();
        let bet = player.make_bet(table).unwrap();
        player.lose(&bet);
        player.lose(&bet);
        assert!(player.make_bet(table).unwrap().amount() == 40);
        let bet = player.make_bet(table).unwrap();
        let before = player.stake();
        player.win(&bet);
        assert!(player.losses() == 0);
        assert!(player.stake() == before + bet.win_amount().whole());
        assert!(player.make_bet(table).unwrap().amount() == 10);
    }

    #[test]
    fn unbounded_losses_saturate_wager() {
        let ref mut table = table();
        let mut player = Martingale::new(10, 1000, 100).unwrap();
        let bet = player.make_bet(table).unwrap();
        (0..70).for_each(|_| player.lose(&bet));
        assert!(player.losses() == 70);
        assert!(player.wager() == Chips::MAX);
        let bet = player.make_bet(table).unwrap();
        assert!(!player.can_bet(&bet, table));
        assert!(!player.playing(table));
    }

    #[test]
    fn stops_when_doubling_outgrows_stake() {
        let ref mut table = table();
        let mut player = Martingale::new(10, 100, 100).unwrap();
        let bet = player.make_bet(table).unwrap();
        (0..3).for_each(|_| player.lose(&bet));
        assert!(player.playing(table));
        player.lose(&bet);
        assert!(player.wager() == 160);
        assert!(!player.playing(table));
    }

    #[test]
    fn rejects_non_positive_wager() {
        assert!(matches!(Martingale::new(0, 100, 10), Err(Error::InvalidObject(_))));
    }
}
