//! Placement and territory operations
//!
//! All operations validate the acting player first, then check coordinates,
//! then check ownership preconditions, and only mutate once every check has
//! passed. A failed call leaves the grid byte-identical to its pre-call
//! state; there is no partial pattern application.

use crate::board::grid::Board;
use crate::io::error::{BoardError, Result};
use crate::pattern::Pattern;

const fn check_player(player: i32) -> Result<()> {
    if player < 1 {
        return Err(BoardError::InvalidPlayer { player });
    }
    Ok(())
}

impl Board {
    /// Mark the cell at `(i, j)` as territory owned by `player`
    ///
    /// The cell is set dead-and-owned, except when it is already alive and
    /// owned by this same player, in which case it is left untouched:
    /// claiming territory never kills the player's own live cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPlayer`] for a non-positive player id
    /// and [`BoardError::OutOfBounds`] for coordinates off the grid.
    pub fn assign_territory(&mut self, i: i32, j: i32, player: i32) -> Result<()> {
        check_player(player)?;
        self.note_player(player);
        let current = self.cell(i, j)?;
        if current != player {
            self.write_cell(i as usize, j as usize, -player);
        }
        Ok(())
    }

    /// Mark every live-offset cell of `pattern` as territory of `player`
    ///
    /// The pattern is centered at `(i, j)`; each live offset receives the
    /// same rule as [`Board::assign_territory`]. The bounding rectangle is
    /// validated before any cell is touched, so a failure mutates nothing.
    /// An empty pattern is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPlayer`] for a non-positive player id
    /// and [`BoardError::OutOfBounds`] if any part of the pattern's
    /// bounding rectangle falls outside the grid.
    pub fn assign_territories(
        &mut self,
        i: i32,
        j: i32,
        pattern: &Pattern,
        player: i32,
    ) -> Result<()> {
        check_player(player)?;
        self.note_player(player);
        if pattern.is_empty() {
            return Ok(());
        }
        let (start, end) = pattern.bounding_rectangle(i, j);
        self.check_rectangle(start, end)?;
        for offset in pattern.live_offsets() {
            let row = (start[0] + offset[0] as i32) as usize;
            let col = (start[1] + offset[1] as i32) as usize;
            let current = self.cells().get((row, col)).copied().unwrap_or(0);
            if current != player {
                self.write_cell(row, col, -player);
            }
        }
        Ok(())
    }

    /// Set the cell at `(i, j)` alive and owned by `player`
    ///
    /// Unforced placement requires the cell to be dead territory of this
    /// player; `forced` overwrites unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPlayer`] for a non-positive player id,
    /// [`BoardError::OutOfBounds`] for coordinates off the grid, and
    /// [`BoardError::PlacementDenied`] when the unforced ownership
    /// precondition fails.
    pub fn add_cell(&mut self, i: i32, j: i32, player: i32, forced: bool) -> Result<()> {
        check_player(player)?;
        self.note_player(player);
        let current = self.cell(i, j)?;
        if !forced && current != -player {
            return Err(BoardError::PlacementDenied {
                position: [i, j],
                player,
                occupant: current,
            });
        }
        self.write_cell(i as usize, j as usize, player);
        Ok(())
    }

    /// Place every live-offset cell of `pattern` alive for `player`
    ///
    /// The pattern is centered at `(i, j)`. Unforced placement requires
    /// every live-offset cell to already be owned by the player, dead or
    /// alive; the whole call fails and nothing is written if any cell
    /// misses that precondition. On success all live offsets are set alive
    /// in one batch. An empty pattern is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPlayer`] for a non-positive player id,
    /// [`BoardError::OutOfBounds`] if the bounding rectangle exits the
    /// grid, and [`BoardError::PlacementDenied`] naming the first cell that
    /// fails the unforced ownership precondition.
    pub fn add_cells(
        &mut self,
        i: i32,
        j: i32,
        pattern: &Pattern,
        player: i32,
        forced: bool,
    ) -> Result<()> {
        check_player(player)?;
        self.note_player(player);
        if pattern.is_empty() {
            return Ok(());
        }
        let (start, end) = pattern.bounding_rectangle(i, j);
        self.check_rectangle(start, end)?;
        let offsets = pattern.live_offsets();

        if !forced {
            for &offset in &offsets {
                let row = start[0] + offset[0] as i32;
                let col = start[1] + offset[1] as i32;
                let current = self
                    .cells()
                    .get((row as usize, col as usize))
                    .copied()
                    .unwrap_or(0);
                if current.abs() != player {
                    return Err(BoardError::PlacementDenied {
                        position: [row, col],
                        player,
                        occupant: current,
                    });
                }
            }
        }

        for offset in offsets {
            let row = (start[0] + offset[0] as i32) as usize;
            let col = (start[1] + offset[1] as i32) as usize;
            self.write_cell(row, col, player);
        }
        Ok(())
    }
}
