use std::fmt;

use colored::Colorize;

use super::board::Board;
use super::grid::GridBoard;
use super::loc::Loc;

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();

        write!(f, "  ")?;
        for col in 0..size {
            write!(f, " {}", col % 10)?;
        }
        writeln!(f)?;

        write!(f, "  ")?;
        writeln!(f, " {}", "─".repeat(2 * size - 1))?;

        for row in 0..size {
            write!(f, "{:2}", row)?;
            for col in 0..size {
                let loc = Loc::new(row as i32, col as i32);
                if loc == self.loc() {
                    write!(f, " {}", "@".bright_yellow())?;
                } else if self.is_visited(loc) {
                    write!(f, " {}", "#".bright_blue())?;
                } else {
                    write!(f, " ·")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        writeln!(f, " {}", "─".repeat(2 * size - 1))?;
        writeln!(f, "coverage {}", self.coverage())?;
        Ok(())
    }
}
