use anyhow::{ensure, Result};

use crate::ai::{MonteCarloPlayer, Player, RandomPlayer};
use crate::core::{Board, GridBoard, Move};

use super::options::{EngineOptions, PlayerType};
use super::search::SearchOptions;

/// Engine manages the current board and produces moves on request
pub struct Engine {
    pub board: GridBoard,
    pub options: EngineOptions,
}

impl Engine {
    pub const DEFAULT_SIZE: usize = 10;

    /// Create a new engine instance with default options
    pub fn new() -> Self {
        Self {
            board: GridBoard::new(Self::DEFAULT_SIZE),
            options: EngineOptions::default(),
        }
    }

    /// Start a fresh game on a board of the given size
    pub fn reset(&mut self, size: usize) -> Result<()> {
        ensure!(size > 0, "board size must be positive");
        self.board = GridBoard::new(size);
        Ok(())
    }

    /// Replace the current board with a parsed position
    pub fn set_position(&mut self, fen: &str) -> Result<()> {
        self.board = GridBoard::from_fen(fen)?;
        Ok(())
    }

    /// Set engine options
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)
    }

    /// Pick a move with the configured player. The engine's board is only
    /// read; all exploration happens on clones.
    pub fn go(&mut self, search_options: &SearchOptions) -> Option<Move> {
        let options = search_options.apply(&self.options.search);

        match self.options.player {
            PlayerType::MonteCarlo => {
                let mut player = match self.options.seed {
                    Some(seed) => MonteCarloPlayer::with_seed(options, seed),
                    None => MonteCarloPlayer::new(options),
                };
                player.next_move(&self.board)
            }
            PlayerType::Random => {
                let mut player = match self.options.seed {
                    Some(seed) => RandomPlayer::with_seed(seed),
                    None => RandomPlayer::new(),
                };
                player.next_move(&self.board)
            }
        }
    }

    /// Apply a move to the real board
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        ensure!(self.board.apply_move(mv), "illegal move: {}", mv);
        Ok(())
    }

    pub fn display(&self) {
        println!("{}", self.board);
    }

    pub fn fen(&self) -> String {
        self.board.to_fen()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
