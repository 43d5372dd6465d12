use super::bet::Bet;
use crate::Chips;
use crate::Error;

/// The surface bets are placed on.
///
/// Implementors decide what a valid bet is and own the list of placed bets;
/// placement, clearing and exposure come for free.
pub trait Table {
    fn is_valid(&self, bet: &Bet) -> bool;
    fn bets(&self) -> &[Bet];
    fn bets_mut(&mut self) -> &mut Vec<Bet>;

    /// validate, then append in placement order
    fn place_bet(&mut self, bet: Bet) -> Result<(), Error> {
        if !self.is_valid(&bet) {
            return Err(Error::bet(format!("{} exceeds table limits", bet)));
        }
        self.bets_mut().push(bet);
        Ok(())
    }
    fn clear(&mut self) {
        self.bets_mut().clear();
    }
    /// total currently wagered on the table
    fn exposure(&self) -> Chips {
        self.bets().iter().map(Bet::amount).sum()
    }
}
