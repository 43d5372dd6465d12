use super::bet::Bet;
use super::table::Table;
use crate::Chips;
use crate::Error;

/// A betting strategy seated at a [`Table`].
///
/// Strategies supply the bet they want to make and how they react to a loss.
/// The bookkeeping around stake and remaining rounds is shared.
///
/// `make_bet` takes the table mutably because drawing a bet may consume the
/// table's random source.
pub trait Player {
    type Table: Table;

    fn stake(&self) -> Chips;
    fn set_stake(&mut self, stake: Chips);
    fn rounds(&self) -> usize;
    fn set_rounds(&mut self, rounds: usize);
    fn make_bet(&self, table: &mut Self::Table) -> Result<Bet, Error>;
    fn lose(&mut self, bet: &Bet);

    fn win(&mut self, bet: &Bet) {
        self.credit(bet);
    }
    /// pay out a winning bet: the wager back plus its winnings
    fn credit(&mut self, bet: &Bet) {
        self.set_stake(self.stake().saturating_add(bet.win_amount().whole()));
        log::trace!("won {} from {}", bet.win_amount(), bet);
    }
    fn can_bet(&self, bet: &Bet, table: &Self::Table) -> bool {
        bet.amount() <= self.stake() && table.is_valid(bet)
    }
    fn can_continue(&self, table: &mut Self::Table) -> bool {
        self.rounds() > 0
            && self
                .make_bet(table)
                .map(|bet| self.can_bet(&bet, table))
                .unwrap_or(false)
    }
    fn playing(&self, table: &mut Self::Table) -> bool {
        self.can_continue(table)
    }
    /// spend a round. the bet is silently dropped if the player can no
    /// longer continue or afford it; otherwise the stake is debited up front.
    fn place_bet(&mut self, table: &mut Self::Table) -> Result<(), Error> {
        self.set_rounds(self.rounds().saturating_sub(1));
        let bet = self.make_bet(table)?;
        if !(self.can_continue(table) && self.can_bet(&bet, table)) {
            log::trace!("dropped {} with stake {}", bet, self.stake());
            return Ok(());
        }
        self.set_stake(self.stake() - bet.amount());
        table.place_bet(bet)
    }
}
