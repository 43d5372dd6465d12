//! Simulation settings.
//!
//! Every field has a default matching the stock simulation (Martingale at a
//! 5–500 table, 250 rounds, 100 stake, 50 samples), so a JSON file only needs
//! to name what it changes.
use crate::Chips;
use crate::Error;
use crate::INIT_DURATION;
use crate::INIT_STAKE;
use crate::SAMPLES;
use crate::TABLE_MAX;
use crate::TABLE_MIN;
use crate::roulette::PlayerClass;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// House limits, applied per bet and to the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub min: Chips,
    pub max: Chips,
}

impl Limits {
    pub fn new(min: Chips, max: Chips) -> Result<Self, Error> {
        let limits = Self { min, max };
        limits.validate()?;
        Ok(limits)
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.min < 1 {
            return Err(Error::object(format!("table minimum {} is below 1", self.min)));
        }
        if self.min > self.max {
            return Err(Error::object(format!(
                "table minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min: TABLE_MIN,
            max: TABLE_MAX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub table_limits: Limits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// rounds a player gets per session
    pub init_duration: usize,
    pub init_stake: Chips,
    /// sessions per gather
    pub samples: usize,
    /// fixed seed for reproducible runs; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            init_duration: INIT_DURATION,
            init_stake: INIT_STAKE,
            samples: SAMPLES,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub player_class: PlayerClass,
    pub game: GameConfig,
    pub session: SessionConfig,
}

impl Configuration {
    pub fn validate(&self) -> Result<(), Error> {
        self.game.table_limits.validate()
    }
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(text).context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        Self::from_json(&text)
    }
}
