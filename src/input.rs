//! Console input for the human player

use std::io::{BufRead, Write};

use crate::{
    board::{Board, SIZE},
    error::{Error, Result},
};

const PROMPT: &str = "Please insert a valid pair of coordinates: ";

/// Read the human player's move.
///
/// Prompts on `output` and reads a line of two whitespace-separated 1-based
/// coordinates from `input`, re-prompting with a distinct diagnostic on
/// malformed input, out-of-range coordinates, or an occupied cell, until a
/// pair naming an empty in-range cell is read. Returns 0-based coordinates.
///
/// # Errors
///
/// Returns [`Error::InputExhausted`] when `input` reaches end of stream
/// before a valid move, and [`Error::Io`] when reading or writing fails.
pub fn read_move<I, W>(board: &Board, input: &mut I, output: &mut W) -> Result<(usize, usize)>
where
    I: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}").map_err(|e| Error::io("write prompt", e))?;
        output.flush().map_err(|e| Error::io("flush prompt", e))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| Error::io("read coordinates", e))?;
        if read == 0 {
            writeln!(output, "\nERROR: There is no more input to read.\n")
                .map_err(|e| Error::io("write diagnostic", e))?;
            return Err(Error::InputExhausted);
        }

        let Some((x, y)) = parse_pair(&line) else {
            writeln!(output, "\nERROR: An incorrect number was read.\n")
                .map_err(|e| Error::io("write diagnostic", e))?;
            continue;
        };

        // Console coordinates are 1-based.
        if !(1..=SIZE as i64).contains(&x) || !(1..=SIZE as i64).contains(&y) {
            writeln!(output, "\nERROR: The position you chose has invalid coordinates.\n")
                .map_err(|e| Error::io("write diagnostic", e))?;
            continue;
        }
        let (x, y) = ((x - 1) as usize, (y - 1) as usize);

        if !board.is_empty(x, y) {
            writeln!(output, "\nERROR: The position you chose is not empty.\n")
                .map_err(|e| Error::io("write diagnostic", e))?;
            continue;
        }

        return Ok((x, y));
    }
}

/// Parse exactly two integers from a line.
fn parse_pair(line: &str) -> Option<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((x, y))
}
