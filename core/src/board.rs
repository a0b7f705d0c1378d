use alloc::collections::VecDeque;
use core::num::Saturating;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardState {
    Ready,
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Ready
    }
}

/// One game's board: the fixed minefield plus the mutable visibility grid.
///
/// A new game means a new `Board`; nothing is reused. All operations are
/// synchronous and run to completion. Once the session is won or lost,
/// mutating calls become `NoChange` no-ops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    minefield: Minefield,
    grid: Array2<CellState>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: BoardState,
    detonated_at: Option<Pos>,
}

impl Board {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        Self {
            minefield,
            grid: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            state: Default::default(),
            detonated_at: None,
        }
    }

    /// Builds a board with `mines` placed uniformly at random; the same
    /// seed always yields the same layout.
    pub fn generate(config: BoardConfig, seed: u64) -> Self {
        Self::new(RandomMinefieldGenerator::from_seed(seed).generate(config))
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// True once every safe cell has been revealed. Flag placement plays
    /// no part in the win condition, and revealing is terminal, so this
    /// never flips back to false.
    pub fn is_won(&self) -> bool {
        self.revealed_count.0 == self.minefield.safe_cell_count()
    }

    pub fn size(&self) -> Pos {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// Mine count minus placed flags, for the counter display. Goes
    /// negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.minefield.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn cell_at(&self, pos: Pos) -> CellState {
        self.grid[pos.to_nd_index()]
    }

    /// Lets a frontend paint the remaining mines after a loss.
    pub fn has_mine_at(&self, pos: Pos) -> bool {
        self.minefield.contains_mine(pos)
    }

    /// The mine that ended the game, if one was probed.
    pub fn detonated_at(&self) -> Option<Pos> {
        self.detonated_at
    }

    pub fn neighbors(&self, pos: Pos) -> Neighbors {
        self.minefield.neighbors(pos)
    }

    /// Reveals a covered cell. Revealing a mine loses the game; revealing
    /// a zero-count cell expands over its whole zero region and the
    /// numbered ring around it. Flagged, questioned, and already revealed
    /// cells are left alone.
    pub fn probe(&mut self, pos: Pos) -> Result<ProbeOutcome> {
        let pos = self.minefield.validate_pos(pos)?;

        if self.state.is_finished() {
            return Ok(ProbeOutcome::NoChange);
        }
        if !matches!(self.grid[pos.to_nd_index()], CellState::Covered) {
            return Ok(ProbeOutcome::NoChange);
        }

        if self.minefield.contains_mine(pos) {
            self.grid[pos.to_nd_index()] = CellState::Detonated;
            self.detonated_at = Some(pos);
            self.state = BoardState::Lost;
            log::debug!("mine detonated at {:?}", pos);
            return Ok(ProbeOutcome::Detonated);
        }

        let count = self.minefield.adjacent_mines(pos);
        self.reveal_cell(pos, count);

        if count == 0 {
            self.flood_reveal(pos);
        }

        if self.is_won() {
            self.state = BoardState::Won;
            log::debug!("all {} safe cells revealed", self.revealed_count.0);
        } else {
            self.mark_started();
        }

        Ok(ProbeOutcome::Revealed(count))
    }

    /// Cycles a concealed cell's annotation:
    /// `Covered -> Flagged -> Questioned -> Covered`.
    ///
    /// Only flags count against `mines_left`; a question mark releases the
    /// flag it replaced.
    pub fn cycle_mark(&mut self, pos: Pos) -> Result<MarkOutcome> {
        use CellState::*;

        let pos = self.minefield.validate_pos(pos)?;

        if self.state.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let next = match self.grid[pos.to_nd_index()] {
            Covered => Flagged,
            Flagged => Questioned,
            Questioned => Covered,
            Revealed(_) | Detonated => return Ok(MarkOutcome::NoChange),
        };

        match next {
            Flagged => self.flagged_count += 1,
            Questioned => self.flagged_count -= 1,
            _ => {}
        }
        self.grid[pos.to_nd_index()] = next;
        self.mark_started();

        Ok(MarkOutcome::Cycled(next))
    }

    fn reveal_cell(&mut self, pos: Pos, count: u8) {
        self.grid[pos.to_nd_index()] = CellState::Revealed(count);
        self.revealed_count += 1;
        log::trace!("revealed {:?}, adjacent mines: {}", pos, count);
    }

    /// Expands the revealed area outward from a zero-count cell with an
    /// explicit frontier queue; call-stack recursion would otherwise grow
    /// with the grid area. Covered neighbors are revealed; only those that
    /// are themselves zero-count feed the frontier further.
    fn flood_reveal(&mut self, origin: Pos) {
        let mut visited: HashSet<Pos> = HashSet::new();
        visited.insert(origin);

        let mut frontier: VecDeque<Pos> = self
            .minefield
            .neighbors(origin)
            .filter(|&pos| matches!(self.grid[pos.to_nd_index()], CellState::Covered))
            .collect();
        log::trace!(
            "flood-fill from {:?}, initial frontier: {:?}",
            origin,
            frontier
        );

        while let Some(pos) = frontier.pop_front() {
            if !visited.insert(pos) {
                continue;
            }

            // marked cells stay concealed, revealed ones are done
            if !matches!(self.grid[pos.to_nd_index()], CellState::Covered) {
                continue;
            }

            let count = self.minefield.adjacent_mines(pos);
            self.reveal_cell(pos, count);

            if count == 0 {
                frontier.extend(
                    self.minefield
                        .neighbors(pos)
                        .filter(|&next| matches!(self.grid[next.to_nd_index()], CellState::Covered))
                        .filter(|next| !visited.contains(next)),
                );
            }
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, BoardState::Ready) {
            self.state = BoardState::Active;
        }
    }
}
