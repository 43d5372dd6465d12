use super::gambler::Gambler;
use super::table::RouletteTable;
use super::wheel::Wheel;
use crate::Error;
use crate::Number;
use crate::casino::Game;
use crate::casino::Player;
use crate::casino::Table;
use crate::config::GameConfig;

/// What a single spin did to the bets on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    pub number: Number,
    pub wins: usize,
    pub losses: usize,
}

#[derive(Debug, Clone)]
pub struct RouletteGame {
    table: RouletteTable,
}

impl RouletteGame {
    pub fn new(config: &GameConfig, wheel: Wheel) -> Result<Self, Error> {
        Ok(Self {
            table: RouletteTable::new(config.table_limits, wheel)?,
        })
    }
    pub fn reseed(&mut self, seed: u64) {
        self.table.wheel_mut().reseed(seed);
    }

    /// collect the bet, spin, pay out, clear the felt.
    /// the table is cleared even when the player's bet was dropped.
    pub fn play<P>(&mut self, player: &mut P) -> Result<Spin, Error>
    where
        P: Player<Table = RouletteTable>,
    {
        player.place_bet(&mut self.table)?;
        let number = self.table.spin();
        let ref winner = self.table.wheel().bins()[number];
        let mut spin = Spin {
            number,
            wins: 0,
            losses: 0,
        };
        for bet in self.table.bets() {
            if winner.contains(bet.outcome()) {
                player.win(bet);
                spin.wins += 1;
            } else {
                player.lose(bet);
                spin.losses += 1;
            }
        }
        log::trace!("{} w{} l{} stake {}", winner.label(), spin.wins, spin.losses, player.stake());
        self.table.clear();
        Ok(spin)
    }
}

impl Game for RouletteGame {
    type Player = Gambler;
    type Round = Spin;

    fn table(&self) -> &RouletteTable {
        &self.table
    }
    fn table_mut(&mut self) -> &mut RouletteTable {
        &mut self.table
    }
    fn cycle(&mut self, player: &mut Gambler) -> Result<Spin, Error> {
        self.play(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;
    use crate::casino::OutcomeFactory;
    use crate::config::Limits;
    use crate::roulette::Martingale;
    use crate::roulette::Passenger57;
    use crate::roulette::PlayerClass;

    fn game(seed: u64) -> RouletteGame {
        let wheel = Wheel::seeded(&mut OutcomeFactory::new(), seed).unwrap();
        let config = GameConfig {
            table_limits: Limits::new(5, 500).unwrap(),
        };
        RouletteGame::new(&config, wheel).unwrap()
    }

    #[test]
    fn resolves_against_winning_bin() {
        let mut game = game(11);
        for _ in 0..200 {
            let mut player = Passenger57::new(game.table(), 100, 10).unwrap();
            let spin = game.play(&mut player).unwrap();
            let black = game.table().wheel().bins()[spin.number]
                .names()
                .contains("Black");
            assert!(spin.wins + spin.losses == 1);
            assert!(black == (spin.wins == 1));
            assert!(black == (player.stake() > 100));
            assert!(game.table().bets().is_empty());
        }
    }

    #[test]
    fn payout_matches_bet() {
        let mut game = game(12);
        for _ in 0..200 {
            let mut player = Martingale::new(10, 100, 10).unwrap();
            let spin = game.play(&mut player).unwrap();
            let stake: Chips = match spin.wins {
                1 => player.stake(),
                _ => continue,
            };
            assert!(player.losses() == 0);
            assert!(stake > 90);
            assert!((stake - 90 - 10) % 10 == 0);
        }
    }

    #[test]
    fn loss_debits_only_the_wager() {
        let mut game = game(13);
        for _ in 0..200 {
            let mut player = Martingale::new(10, 100, 10).unwrap();
            let spin = game.play(&mut player).unwrap();
            if spin.losses == 1 {
                assert!(player.stake() == 90);
                assert!(player.losses() == 1);
            }
        }
    }

    #[test]
    fn dropped_bet_still_spins() {
        let mut game = game(14);
        let mut player = Martingale::new(10, 100, 1).unwrap();
        let spin = game.play(&mut player).unwrap();
        assert!(spin.wins + spin.losses == 0);
        assert!(player.rounds() == 0);
        assert!(player.stake() == 100);
        assert!(game.table().bets().is_empty());
    }

    #[test]
    fn cycle_accepts_any_gambler() {
        let mut game = game(15);
        for class in PlayerClass::ALL {
            let mut gambler = class.seat(game.table(), 100, 5).unwrap();
            game.cycle(&mut gambler).unwrap();
            assert!(gambler.rounds() == 4);
        }
    }
}
