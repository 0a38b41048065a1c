//! Heuristic move selection for the machine player

use rand::{Rng, seq::IndexedRandom};

use crate::{
    board::{Board, Player},
    error::{Error, Result},
};

/// Priority-ordered move picker for the machine.
///
/// In order of preference: a random corner while the grid is still fresh,
/// the completion of the machine's own two-in-a-line, the block of the
/// opponent's two-in-a-line, another random corner, and finally any random
/// empty cell. Random picks sample uniformly from the explicit list of
/// empty cells of the targeted category, so selection stays uniform even
/// on a nearly full board.
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// Choose the machine's move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEmptyCells`] if the board has no empty cell left;
    /// a session never reaches that state, since a full board is terminal.
    pub fn choose<R: Rng>(board: &Board, player: Player, rng: &mut R) -> Result<(usize, usize)> {
        // Opening: the grid is empty, or holds a single opponent mark.
        if board.plays() <= 1 {
            let corners = board.empty_corners();
            if let Some(&corner) = corners.choose(rng) {
                return Ok(corner);
            }
        }

        if let Some(cell) = Self::win_or_block(board, player) {
            return Ok(cell);
        }

        // Claim another corner, working towards a double threat.
        let corners = board.empty_corners();
        if let Some(&corner) = corners.choose(rng) {
            return Ok(corner);
        }

        board
            .empty_cells()
            .choose(rng)
            .copied()
            .ok_or(Error::NoEmptyCells)
    }

    /// Scan all rows, then all columns, then the two diagonals for near-win
    /// lines.
    ///
    /// A line the machine can complete is returned immediately, mid-scan.
    /// An opponent pair is remembered as a block candidate instead, each
    /// new one replacing the previous, and the scan continues in case a
    /// winning line still turns up.
    fn win_or_block(board: &Board, player: Player) -> Option<(usize, usize)> {
        let mut block = None;

        for (x, row) in board.rows().iter().enumerate() {
            if row.is_near_win() {
                let cell = (x, row.missing_coord());
                if row.is_pair_of(player) {
                    return Some(cell);
                }
                block = Some(cell);
            }
        }

        for (y, column) in board.columns().iter().enumerate() {
            if column.is_near_win() {
                let cell = (column.missing_coord(), y);
                if column.is_pair_of(player) {
                    return Some(cell);
                }
                block = Some(cell);
            }
        }

        for diagonal in board.diagonals() {
            if diagonal.is_near_win() {
                let cell = diagonal.missing_cell();
                if diagonal.is_pair_of(player) {
                    return Some(cell);
                }
                block = Some(cell);
            }
        }

        block
    }
}
