//! Configuration options for the engine

use anyhow::{bail, ensure, Result};
use std::str::FromStr;

use crate::ai::PlayerOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    MonteCarlo,
    Random,
}

impl FromStr for PlayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "montecarlo" => Ok(PlayerType::MonteCarlo),
            "random" => Ok(PlayerType::Random),
            _ => bail!("Unknown player type: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Whether protocol errors abort the process
    pub strict_mode: bool,
    /// The player strategy to use
    pub player: PlayerType,
    /// Seed for the player's random stream; fresh entropy when unset
    pub seed: Option<u64>,
    /// Tunables for the Monte Carlo player
    pub search: PlayerOptions,
}

impl EngineOptions {
    /// Set a named option from its string value
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strictmode" => self.strict_mode = value.parse()?,
            "player" => self.player = value.parse()?,
            "seed" => self.seed = Some(value.parse()?),
            "playouts" => {
                let playouts: u32 = value.parse()?;
                ensure!(playouts > 0, "playouts must be positive");
                self.search.playouts = playouts;
            }
            "maxsteps" => self.search.max_steps = value.parse()?,
            "exploreweight" => self.search.explore_weight = value.parse()?,
            "futureweight" => self.search.future_moves_weight = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_mode: true,
            player: PlayerType::MonteCarlo,
            seed: None,
            search: PlayerOptions::default(),
        }
    }
}
