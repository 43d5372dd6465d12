//! Monte Carlo roulette simulator.
//!
//! The [`casino`] module holds the game-agnostic pieces (odds, outcomes,
//! bets and the table/player/game/simulator traits). The [`roulette`] module
//! implements them for an American double-zero wheel.
pub mod casino;
pub mod config;
pub mod error;
pub mod roulette;
pub mod summary;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stakes, wagers and table limits in whole currency units.
pub type Chips = i64;
/// Position of a pocket on the wheel (37 is "00").
pub type Number = usize;

// ============================================================================
// WHEEL LAYOUT
// ============================================================================
/// Pockets on a double-zero wheel: 0, 1–36 and 00.
pub const BINS: usize = 38;
/// Bin index used for the "00" pocket.
pub const DOUBLE_ZERO: Number = 37;

// ============================================================================
// TABLE AND SESSION DEFAULTS
// ============================================================================
/// Default table minimum per bet.
pub const TABLE_MIN: Chips = 5;
/// Default table maximum per bet and per total exposure.
pub const TABLE_MAX: Chips = 500;
/// Default rounds a player is allowed per session.
pub const INIT_DURATION: usize = 250;
/// Default stake a player starts each session with.
pub const INIT_STAKE: Chips = 100;
/// Default number of sessions gathered per simulation.
pub const SAMPLES: usize = 50;

// ============================================================================
// STRATEGY PARAMETERS
// ============================================================================
/// Martingale base wager, doubled after every consecutive loss.
pub const BASE_WAGER: Chips = 10;
/// Passenger57 wager when the stake has fallen below the table minimum.
pub const FALLBACK_WAGER: Chips = 50;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
