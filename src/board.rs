//! Grid state and incremental win bookkeeping

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    summary::{DiagonalSummary, LineSummary},
};

/// Side length of the grid
pub const SIZE: usize = 3;

/// Number of cells in the grid
pub const POSITIONS: usize = SIZE * SIZE;

/// Number of diagonals
pub const DIAGONALS: usize = 2;

/// Indices into the diagonal summaries
const MAIN: usize = 0;
const ANTI: usize = 1;

/// The four corner cells, the opening repertoire of the machine player.
const CORNERS: [(usize, usize); 4] = [
    (0, 0),
    (0, SIZE - 1),
    (SIZE - 1, 0),
    (SIZE - 1, SIZE - 1),
];

/// No line can be complete before the fifth move of a game.
const MIN_PLAYS_FOR_WIN: usize = 2 * SIZE - 1;

/// A cell on the board
///
/// The integer encoding carried by [`Cell::value`] is load-bearing: `Empty`
/// must be 0 and the two marks must be distinct small positive values. With
/// `Nought = 1` and `Cross = 2`, a fully occupied line sums to a multiple of
/// 3 only when all three cells carry the same mark (3 or 6), and a two-cell
/// line sums to an even value only when both cells carry the same mark
/// (2 or 4). The predicates in [`crate::summary`] rely on this arithmetic;
/// changing the encoding breaks win and near-win detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Nought,
    Cross,
}

impl Cell {
    /// Integer encoding summed by the line records.
    pub const fn value(self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Nought => 1,
            Cell::Cross => 2,
        }
    }

    /// Display glyph.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Nought => '○',
            Cell::Cross => 'X',
        }
    }
}

/// A player in the game, identified by the mark they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Nought,
    Cross,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }

    /// Convert player to the cell content they place
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Nought => Cell::Nought,
            Player::Cross => Cell::Cross,
        }
    }

    /// Integer value of the player's mark.
    pub fn value(self) -> usize {
        self.to_cell().value()
    }
}

/// Lifecycle of a single game
///
/// `NotStarted` becomes `InProgress` on the first applied move. `Over` is
/// entered the instant the terminal check holds after a move, and no
/// further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Over,
}

/// The 3×3 board engine
///
/// Alongside the grid itself, the board keeps one running-sum record per
/// row, per column, and per diagonal, so that win and near-win detection
/// works on the records alone and never rescans the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    rows: [LineSummary; SIZE],
    columns: [LineSummary; SIZE],
    diagonals: [DiagonalSummary; DIAGONALS],
    plays: usize,
    phase: Phase,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
            rows: [LineSummary::default(); SIZE],
            columns: [LineSummary::default(); SIZE],
            diagonals: [DiagonalSummary::default(); DIAGONALS],
            plays: 0,
            phase: Phase::NotStarted,
        }
    }

    /// Place `player`'s mark on cell `(x, y)`.
    ///
    /// Updates the grid, the play counter, the row record for row `x`, the
    /// column record for column `y`, and the record of every diagonal
    /// containing the cell (both of them for the centre), then advances the
    /// game phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over, the coordinates are
    /// outside the grid, or the cell is occupied.
    pub fn apply_move(&mut self, x: usize, y: usize, player: Player) -> Result<(), Error> {
        if self.phase == Phase::Over {
            return Err(Error::GameOver);
        }
        if x >= SIZE || y >= SIZE {
            return Err(Error::OutOfBounds { x, y });
        }
        if self.cells[x][y] != Cell::Empty {
            return Err(Error::OccupiedCell { x, y });
        }

        let value = player.value();
        self.cells[x][y] = player.to_cell();
        self.plays += 1;

        self.rows[x].record(y, value);
        self.columns[y].record(x, value);

        // The centre lies on both diagonals, corners on exactly one, edge
        // midpoints on none.
        if x == y {
            self.diagonals[MAIN].record(x, y, value);
        }
        if x + y == SIZE - 1 {
            self.diagonals[ANTI].record(x, y, value);
        }

        self.phase = if self.is_terminal() {
            Phase::Over
        } else {
            Phase::InProgress
        };
        Ok(())
    }

    /// Check if the game is over.
    ///
    /// False before the fifth play (no line can be complete yet), true on a
    /// full grid, and otherwise true exactly when some row, column, or
    /// diagonal is a completed single-mark line. Does not report which
    /// player won; the caller knows who moved last.
    pub fn is_terminal(&self) -> bool {
        if self.plays < MIN_PLAYS_FOR_WIN {
            return false;
        }
        if self.is_full() {
            return true;
        }
        self.rows.iter().any(LineSummary::is_won)
            || self.columns.iter().any(LineSummary::is_won)
            || self.diagonals.iter().any(DiagonalSummary::is_won)
    }

    /// Get cell content at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[x][y]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.cells[x][y] == Cell::Empty
    }

    /// Number of filled cells
    pub fn plays(&self) -> usize {
        self.plays
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if every cell is filled
    pub fn is_full(&self) -> bool {
        self.plays == POSITIONS
    }

    /// Row records, indexed by x
    pub fn rows(&self) -> &[LineSummary; SIZE] {
        &self.rows
    }

    /// Column records, indexed by y
    pub fn columns(&self) -> &[LineSummary; SIZE] {
        &self.columns
    }

    /// Diagonal records: main diagonal first, anti-diagonal second
    pub fn diagonals(&self) -> &[DiagonalSummary; DIAGONALS] {
        &self.diagonals
    }

    /// Get all empty cells, in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..SIZE)
            .flat_map(|x| (0..SIZE).map(move |y| (x, y)))
            .filter(|&(x, y)| self.is_empty(x, y))
            .collect()
    }

    /// Get the empty corner cells
    pub fn empty_corners(&self) -> Vec<(usize, usize)> {
        CORNERS
            .iter()
            .copied()
            .filter(|&(x, y)| self.is_empty(x, y))
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
        writeln!(f)?;
        for (x, row) in self.cells.iter().enumerate() {
            writeln!(
                f,
                " {} | {} | {} ",
                row[0].glyph(),
                row[1].glyph(),
                row[2].glyph()
            )?;
            if x < SIZE - 1 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)
    }
}
