//! Reference board: an agent walking an `n x n` grid, visiting cells

use anyhow::{ensure, Context, Result};

use super::board::Board;
use super::loc::{Dir, Loc, Move};

/// A square grid with one agent. A move is legal when its target cell is
/// in bounds and not yet visited; the game ends when no legal move
/// remains. Coverage is the number of visited cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    size: usize,
    loc: Loc,
    visited: Vec<bool>,
    covered: u32,
}

impl GridBoard {
    /// Fresh board with the agent on the center cell.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0);
        let loc = Loc::new((size / 2) as i32, (size / 2) as i32);
        let mut visited = vec![false; size * size];
        visited[loc.index(size)] = true;

        Self {
            size,
            loc,
            visited,
            covered: 1,
        }
    }

    pub fn is_visited(&self, loc: Loc) -> bool {
        loc.in_bounds(self.size) && self.visited[loc.index(self.size)]
    }

    /// Parse a position string: `<size> <row>,<col> <visited indices>`.
    ///
    /// The visited list is comma-separated cell indices, or `-` for none;
    /// the agent's cell counts as visited whether or not it is listed.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();

        let size: usize = parts
            .next()
            .context("missing board size")?
            .parse()
            .context("invalid board size")?;
        ensure!(size > 0, "board size must be positive");

        let loc: Loc = parts.next().context("missing position")?.parse()?;
        ensure!(loc.in_bounds(size), "position {} out of bounds", loc);

        let mut visited = vec![false; size * size];
        let cells = parts.next().context("missing visited list")?;
        if cells != "-" {
            for cell in cells.split(',') {
                let index: usize = cell.parse().context("invalid visited cell")?;
                ensure!(index < size * size, "visited cell {} out of bounds", index);
                visited[index] = true;
            }
        }
        ensure!(parts.next().is_none(), "trailing fen fields");

        visited[loc.index(size)] = true;
        let covered = visited.iter().filter(|v| **v).count() as u32;

        Ok(Self {
            size,
            loc,
            visited,
            covered,
        })
    }

    pub fn to_fen(&self) -> String {
        let cells: Vec<String> = self
            .visited
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i.to_string())
            .collect();

        format!("{} {} {}", self.size, self.loc, cells.join(","))
    }
}

impl Board for GridBoard {
    fn legal_moves(&self) -> Vec<Move> {
        Dir::all()
            .map(Move::from)
            .filter(|&mv| {
                let target = self.loc + mv;
                target.in_bounds(self.size) && !self.visited[target.index(self.size)]
            })
            .collect()
    }

    fn apply_move(&mut self, mv: Move) -> bool {
        let target = self.loc + mv;
        if !target.in_bounds(self.size) || self.visited[target.index(self.size)] {
            return false;
        }

        self.visited[target.index(self.size)] = true;
        self.loc = target;
        self.covered += 1;
        true
    }

    fn is_over(&self) -> bool {
        self.legal_moves().is_empty()
    }

    fn coverage(&self) -> u32 {
        self.covered
    }

    fn loc(&self) -> Loc {
        self.loc
    }

    fn size(&self) -> usize {
        self.size
    }
}
