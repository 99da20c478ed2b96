use anyhow::{bail, ensure, Context};

use std::str::FromStr;

use crate::ai::PlayerOptions;

/// Per-search overrides passed with the `go` command
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Playouts per candidate move for this search only
    pub playouts: Option<u32>,
    /// Playout step cap for this search only
    pub max_steps: Option<u32>,
}

impl SearchOptions {
    /// Player options for this search: the engine tunables with any
    /// per-`go` overrides applied.
    pub fn apply(&self, base: &PlayerOptions) -> PlayerOptions {
        let mut options = base.clone();
        if let Some(playouts) = self.playouts {
            options.playouts = playouts;
        }
        if let Some(max_steps) = self.max_steps {
            options.max_steps = max_steps;
        }
        options
    }
}

impl FromStr for SearchOptions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut search_options = SearchOptions::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "playouts" if i + 1 < parts.len() => {
                    let playouts: u32 = parts[i + 1].parse().context("invalid playouts")?;
                    ensure!(playouts > 0, "playouts must be positive");
                    search_options.playouts = Some(playouts);
                    i += 1;
                }
                "maxsteps" if i + 1 < parts.len() => {
                    let max_steps = parts[i + 1].parse().context("invalid maxsteps")?;
                    search_options.max_steps = Some(max_steps);
                    i += 1;
                }
                p => bail!("invalid go argument {}", p),
            }
            i += 1;
        }
        Ok(search_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_default() {
        let options: SearchOptions = "".parse().unwrap();
        assert!(options.playouts.is_none());
        assert!(options.max_steps.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let options: SearchOptions = "playouts 5 maxsteps 40".parse().unwrap();
        assert_eq!(options.playouts, Some(5));
        assert_eq!(options.max_steps, Some(40));

        let applied = options.apply(&PlayerOptions::default());
        assert_eq!(applied.playouts, 5);
        assert_eq!(applied.max_steps, 40);
        assert_eq!(applied.explore_weight, 1.2);
    }

    #[test]
    fn test_parse_rejects_unknown_argument() {
        assert!("depth 3".parse::<SearchOptions>().is_err());
        assert!("playouts 0".parse::<SearchOptions>().is_err());
    }
}
