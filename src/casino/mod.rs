pub mod bet;
pub use bet::*;

pub mod factory;
pub use factory::*;

pub mod game;
pub use game::*;

pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod ratio;
pub use ratio::*;

pub mod simulator;
pub use simulator::*;

pub mod table;
pub use table::*;
