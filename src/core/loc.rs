use std::{fmt::Display, ops::Add, str::FromStr};

use anyhow::Context;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(&self, size: usize) -> bool {
        self.row >= 0 && self.row < size as i32 && self.col >= 0 && self.col < size as i32
    }

    pub fn index(&self, size: usize) -> usize {
        (self.row as usize) * size + (self.col as usize)
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: (index / size) as i32,
            col: (index % size) as i32,
        }
    }

    /// Euclidean distance to the board center `(size / 2, size / 2)`.
    pub fn center_dist(&self, size: usize) -> f64 {
        let center = (size / 2) as i32;
        let dr = (self.row - center) as f64;
        let dc = (self.col - center) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Distance to the nearest row edge.
    pub fn row_edge_dist(&self, size: usize) -> i32 {
        self.row.min(size as i32 - 1 - self.row)
    }

    /// Distance to the nearest column edge.
    pub fn col_edge_dist(&self, size: usize) -> i32 {
        self.col.min(size as i32 - 1 - self.col)
    }
}

impl From<(i32, i32)> for Loc {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').context("Invalid loc")?;

        Ok(Loc {
            row: row.parse()?,
            col: col.parse()?,
        })
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A directional move delta with value semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dr: i32,
    pub dc: i32,
}

impl Move {
    pub fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }
}

impl Add<Move> for Loc {
    type Output = Loc;

    fn add(self, mv: Move) -> Self::Output {
        Loc {
            row: self.row + mv.dr,
            col: self.col + mv.dc,
        }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dr, dc) = s.split_once(',').context("Invalid move")?;

        Ok(Move {
            dr: dr.parse()?,
            dc: dc.parse()?,
        })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.dr, self.dc)
    }
}

/// The eight compass directions, in the order the reference board
/// enumerates its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Dir {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Dir {
    pub fn all() -> impl Iterator<Item = Dir> {
        (0..8).filter_map(Dir::from_usize)
    }
}

impl From<Dir> for Move {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::N => Move { dr: -1, dc: 0 },
            Dir::NE => Move { dr: -1, dc: 1 },
            Dir::E => Move { dr: 0, dc: 1 },
            Dir::SE => Move { dr: 1, dc: 1 },
            Dir::S => Move { dr: 1, dc: 0 },
            Dir::SW => Move { dr: 1, dc: -1 },
            Dir::W => Move { dr: 0, dc: -1 },
            Dir::NW => Move { dr: -1, dc: -1 },
        }
    }
}

impl FromStr for Dir {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Dir::N),
            "ne" => Ok(Dir::NE),
            "e" => Ok(Dir::E),
            "se" => Ok(Dir::SE),
            "s" => Ok(Dir::S),
            "sw" => Ok(Dir::SW),
            "w" => Ok(Dir::W),
            "nw" => Ok(Dir::NW),
            _ => anyhow::bail!("Invalid direction: {}", s),
        }
    }
}
