//! Console Tic-Tac-Toe against a heuristic machine player
//!
//! This crate provides:
//! - A 3×3 board engine whose win and near-win detection is incremental,
//!   driven by running per-row/column/diagonal sums
//! - A priority-ordered heuristic move picker for the machine player
//! - A console session alternating machine and human turns over injected
//!   random, input, and output sources

pub mod board;
pub mod error;
pub mod input;
pub mod policy;
pub mod session;
pub mod summary;

pub use board::{Board, Cell, DIAGONALS, POSITIONS, Phase, Player, SIZE};
pub use error::{Error, Result};
pub use input::read_move;
pub use policy::HeuristicPolicy;
pub use session::{Outcome, Session, Turn};
pub use summary::{DiagonalSummary, LineSummary};
