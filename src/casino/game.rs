use super::player::Player;
use crate::Error;

/// One round of a casino game between a table and a player.
///
/// The associated player type binds a game to the strategies it can seat,
/// so a player built for another game is rejected at compile time.
pub trait Game {
    type Player: Player;
    /// whatever a single round reports back
    type Round;

    fn table(&self) -> &<Self::Player as Player>::Table;
    fn table_mut(&mut self) -> &mut <Self::Player as Player>::Table;
    fn cycle(&mut self, player: &mut Self::Player) -> Result<Self::Round, Error>;
}
