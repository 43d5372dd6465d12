pub mod bin;
pub use bin::*;

pub mod builder;
pub use builder::*;

pub mod gambler;
pub use gambler::*;

pub mod game;
pub use game::*;

pub mod martingale;
pub use martingale::*;

pub mod passenger;
pub use passenger::*;

pub mod simulator;
pub use simulator::*;

pub mod table;
pub use table::*;

pub mod wheel;
pub use wheel::*;
