use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Mark;

pub const CELL_COUNT: usize = 9;

const ROW_WIDTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn mark_at(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    pub fn set_mark(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(ROW_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, mark) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", mark.as_char())?;
            }
        }
        Ok(())
    }
}
