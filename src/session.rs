//! Interactive game session alternating machine and human turns

use std::io::{BufRead, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Phase, Player},
    error::{Error, Result},
    input::read_move,
    policy::HeuristicPolicy,
};

/// Which side moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Machine,
    Human,
}

/// Result of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    MachineWin,
    HumanWin,
    Draw,
}

/// A single game between the machine and the human.
///
/// The random source, the input stream, and the output stream are injected
/// at construction, so sessions can be driven deterministically from seeded
/// generators and scripted streams.
pub struct Session<R, I, W> {
    board: Board,
    machine: Player,
    to_move: Player,
    rng: R,
    input: I,
    output: W,
}

impl<R, I, W> Session<R, I, W>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    /// Create a session with a random mark assignment and first mover.
    pub fn new(mut rng: R, input: I, output: W) -> Self {
        let machine = if rng.random() {
            Player::Nought
        } else {
            Player::Cross
        };
        let first = if rng.random() {
            Turn::Machine
        } else {
            Turn::Human
        };
        Self::with_roles(machine, first, rng, input, output)
    }

    /// Create a session with an explicit mark assignment and first mover.
    pub fn with_roles(machine: Player, first: Turn, rng: R, input: I, output: W) -> Self {
        let to_move = match first {
            Turn::Machine => machine,
            Turn::Human => machine.opponent(),
        };
        Session {
            board: Board::new(),
            machine,
            to_move,
            rng,
            input,
            output,
        }
    }

    /// The mark the machine plays
    pub fn machine_mark(&self) -> Player {
        self.machine
    }

    /// The mark the human plays
    pub fn human_mark(&self) -> Player {
        self.machine.opponent()
    }

    /// Board state, mainly for inspection
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the game to completion.
    ///
    /// Each turn picks a move (heuristic for the machine, console input for
    /// the human), applies it, announces it with 1-based coordinates, and
    /// prints the grid; the closing message depends only on whether the
    /// grid filled up and on who moved last.
    ///
    /// # Errors
    ///
    /// Fails when the input stream is exhausted before the game ends or
    /// when an I/O operation on the injected streams fails.
    pub fn play(&mut self) -> Result<Outcome> {
        loop {
            let mover = self.to_move;
            let machine_turn = mover == self.machine;

            let (x, y) = if machine_turn {
                HeuristicPolicy::choose(&self.board, mover, &mut self.rng)?
            } else {
                read_move(&self.board, &mut self.input, &mut self.output)?
            };
            self.board.apply_move(x, y, mover)?;

            let announcement = if machine_turn {
                "Computer says"
            } else {
                "Puny human played"
            };
            writeln!(self.output, "{announcement}: ({},{})", x + 1, y + 1)
                .map_err(|e| Error::io("write announcement", e))?;
            write!(self.output, "{}", self.board).map_err(|e| Error::io("write board", e))?;

            if self.board.phase() == Phase::Over {
                return self.finish(machine_turn);
            }

            self.to_move = mover.opponent();
        }
    }

    /// Print the closing message and derive the outcome.
    ///
    /// A full grid is reported as such without inspecting lines; otherwise
    /// the game ended because the last mover completed a line.
    fn finish(&mut self, machine_moved_last: bool) -> Result<Outcome> {
        let (message, outcome) = if self.board.is_full() {
            ("The grid is full. Nobody wins.", Outcome::Draw)
        } else if machine_moved_last {
            (
                "The machine wins. Better luck next time, puny human.",
                Outcome::MachineWin,
            )
        } else {
            ("The puny human wins. This cannot be!", Outcome::HumanWin)
        };

        writeln!(self.output, "{message}").map_err(|e| Error::io("write outcome", e))?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn roles_are_always_opposed() {
        for seed in 0..8 {
            let session = Session::new(
                StdRng::seed_from_u64(seed),
                Cursor::new(String::new()),
                Vec::new(),
            );
            assert_eq!(session.machine_mark(), session.human_mark().opponent());
            assert_eq!(session.board().plays(), 0);
        }
    }

    #[test]
    fn human_first_move_is_announced() {
        // Human opens at the centre; the machine answers before the next
        // prompt, so two announcements must be present.
        let script = "2 2\n1 1\n1 2\n1 3\n2 1\n2 3\n3 1\n3 2\n3 3\n\
                      2 2\n1 1\n1 2\n1 3\n2 1\n2 3\n3 1\n3 2\n3 3\n";
        let mut output = Vec::new();
        let mut session = Session::with_roles(
            Player::Cross,
            Turn::Human,
            StdRng::seed_from_u64(3),
            Cursor::new(script),
            &mut output,
        );
        session.play().unwrap();
        drop(session);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Puny human played: (2,2)"));
        assert!(text.contains("Computer says: ("));
        assert!(text.contains("---+---+---"));
    }

    #[test]
    fn machine_opens_in_a_corner_and_exhausted_input_is_fatal() {
        let mut output = Vec::new();
        let mut session = Session::with_roles(
            Player::Nought,
            Turn::Machine,
            StdRng::seed_from_u64(11),
            Cursor::new(String::new()),
            &mut output,
        );
        let err = session.play().unwrap_err();
        assert!(matches!(err, Error::InputExhausted));
        drop(session);

        let text = String::from_utf8(output).unwrap();
        let opening = ["(1,1)", "(1,3)", "(3,1)", "(3,3)"]
            .iter()
            .any(|corner| text.contains(&format!("Computer says: {corner}")));
        assert!(opening, "machine did not open in a corner: {text}");
        assert!(text.contains("no more input"));
    }

    #[test]
    fn closing_message_matches_the_outcome() {
        let script: String = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\n".repeat(2);
        for seed in 0..6 {
            let mut output = Vec::new();
            let mut session = Session::new(
                StdRng::seed_from_u64(seed),
                Cursor::new(script.clone()),
                &mut output,
            );
            let outcome = session.play().unwrap();
            drop(session);

            let text = String::from_utf8(output).unwrap();
            let expected = match outcome {
                Outcome::Draw => "The grid is full. Nobody wins.",
                Outcome::MachineWin => "The machine wins.",
                Outcome::HumanWin => "The puny human wins.",
            };
            assert!(text.contains(expected), "missing '{expected}' in: {text}");
        }
    }
}
