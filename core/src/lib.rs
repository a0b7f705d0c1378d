#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Validated dimensions and mine count for a new board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Pos,
    mines: CellCount,
}

impl BoardConfig {
    /// Both dimensions must be positive and `0 < mines < rows * cols`, so
    /// every board has at least one mine and at least one safe cell.
    pub fn new((rows, cols): Pos, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidConfiguration);
        }
        if mines == 0 || mines >= area(rows, cols) {
            return Err(BoardError::InvalidConfiguration);
        }
        Ok(Self {
            size: (rows, cols),
            mines,
        })
    }

    pub const fn size(&self) -> Pos {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    /// The 20x20, 10-mine board of the classic desktop game.
    fn default() -> Self {
        Self {
            size: (20, 20),
            mines: 10,
        }
    }
}

/// Fixed mine layout plus the per-cell adjacency counts, both immutable
/// once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    adjacency: Array2<u8>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        let mut field = Self {
            adjacency: Array2::default(mines.raw_dim()),
            mines,
            mine_count,
        };
        field.fill_adjacency();
        field
    }

    pub fn from_mine_positions(size: Pos, mine_positions: &[Pos]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        for &pos in mine_positions {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(BoardError::OutOfBounds);
            }
            mines[pos.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    /// Scans each safe cell's neighbors once and stores the count. A mine
    /// cell keeps 0; its count is never read.
    fn fill_adjacency(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let pos = (row, col);
                if self[pos] {
                    continue;
                }
                let count = self
                    .neighbors(pos)
                    .filter(|&neighbor| self[neighbor])
                    .count();
                self.adjacency[pos.to_nd_index()] = count.try_into().unwrap();
            }
        }
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Pos {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Pos) -> bool {
        self[pos]
    }

    pub fn adjacent_mines(&self, pos: Pos) -> u8 {
        self.adjacency[pos.to_nd_index()]
    }

    pub fn neighbors(&self, pos: Pos) -> Neighbors {
        Neighbors::new(pos, self.size())
    }
}

impl Index<Pos> for Minefield {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mines[pos.to_nd_index()]
    }
}

/// Outcome of cycling a cell's mark.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    /// The cell's state after the call.
    Cycled(CellState),
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cycled(_) => true,
        }
    }
}

/// Outcome of probing a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ProbeOutcome {
    NoChange,
    /// A safe cell was revealed; carries its adjacent-mine count.
    Revealed(u8),
    /// The probed cell hid a mine. The game is lost.
    Detonated,
}

impl ProbeOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use ProbeOutcome::*;
        match self {
            NoChange => false,
            Revealed(_) => true,
            Detonated => true,
        }
    }
}
