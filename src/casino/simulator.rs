use crate::Chips;
use crate::Error;

/// Repeats sessions of a game and collects per-session statistics.
pub trait Simulator {
    /// play until the player stops, returning the stake after every round.
    /// the player is replaced with a fresh one before returning.
    fn session(&mut self) -> Result<Vec<Chips>, Error>;
    /// run every configured sample, appending to durations and maxima
    fn gather(&mut self) -> Result<(), Error>;
    /// rounds survived per session, in session order
    fn durations(&self) -> &[usize];
    /// peak stake per session, in session order
    fn maxima(&self) -> &[Chips];
}
