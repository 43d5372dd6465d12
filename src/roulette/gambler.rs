use super::martingale::Martingale;
use super::passenger::Passenger57;
use super::table::RouletteTable;
use crate::BASE_WAGER;
use crate::Chips;
use crate::Error;
use crate::casino::Bet;
use crate::casino::Player;
use serde::Deserialize;
use serde::Serialize;

/// The closed set of strategies a simulation can seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Passenger57,
    #[default]
    Martingale,
}

impl PlayerClass {
    pub const ALL: [Self; 2] = [Self::Passenger57, Self::Martingale];

    /// a fresh player of this class with the given stake and rounds
    pub fn seat(&self, table: &RouletteTable, stake: Chips, rounds: usize) -> Result<Gambler, Error> {
        match self {
            Self::Passenger57 => Passenger57::new(table, stake, rounds).map(Gambler::Passenger57),
            Self::Martingale => Martingale::new(BASE_WAGER, stake, rounds).map(Gambler::Martingale),
        }
    }
}

impl std::str::FromStr for PlayerClass {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.to_string() == s)
            .ok_or_else(|| Error::object(format!("unknown player class {}", s)))
    }
}

impl std::fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Passenger57 => write!(f, "Passenger57"),
            Self::Martingale => write!(f, "Martingale"),
        }
    }
}

/// A seated player of any [`PlayerClass`].
#[derive(Debug, Clone)]
pub enum Gambler {
    Passenger57(Passenger57),
    Martingale(Martingale),
}

impl Gambler {
    pub fn class(&self) -> PlayerClass {
        match self {
            Self::Passenger57(_) => PlayerClass::Passenger57,
            Self::Martingale(_) => PlayerClass::Martingale,
        }
    }
    fn inner(&self) -> &dyn Player<Table = RouletteTable> {
        match self {
            Self::Passenger57(p) => p,
            Self::Martingale(p) => p,
        }
    }
    fn inner_mut(&mut self) -> &mut dyn Player<Table = RouletteTable> {
        match self {
            Self::Passenger57(p) => p,
            Self::Martingale(p) => p,
        }
    }
}

impl Player for Gambler {
    type Table = RouletteTable;

    fn stake(&self) -> Chips {
        self.inner().stake()
    }
    fn set_stake(&mut self, stake: Chips) {
        self.inner_mut().set_stake(stake)
    }
    fn rounds(&self) -> usize {
        self.inner().rounds()
    }
    fn set_rounds(&mut self, rounds: usize) {
        self.inner_mut().set_rounds(rounds)
    }
    fn make_bet(&self, table: &mut RouletteTable) -> Result<Bet, Error> {
        self.inner().make_bet(table)
    }
    fn win(&mut self, bet: &Bet) {
        self.inner_mut().win(bet)
    }
    fn lose(&mut self, bet: &Bet) {
        self.inner_mut().lose(bet)
    }
}
